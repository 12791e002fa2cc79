use chrono::Duration;
use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

use crate::{
    credentials::Credentials, environment::Environment, errors::MontonioError, jwt::Jwt,
    payment_request::PaymentInfo,
};

const PAYMENT_TOKEN_TTL_MINUTES: i64 = 10;
const FINALIZED: &str = "finalized";

#[derive(Serialize)]
struct PaymentClaims<'a> {
    #[serde(flatten)]
    info: &'a PaymentInfo,
    access_key: &'a str,
}

/// Signs `info` together with the merchant access key. The token expires in 10 minutes.
pub fn payment_token(info: &PaymentInfo, credentials: &Credentials) -> Result<String, MontonioError> {
    debug!("Issuing payment token for {}", info.merchant_reference);
    let jwt = Jwt::new(credentials.secret_key())?;
    jwt.make_jwt(
        PaymentClaims {
            info,
            access_key: credentials.access_key(),
        },
        Duration::minutes(PAYMENT_TOKEN_TTL_MINUTES),
    )
}

/// Redirect URL for the payer. The token is inserted as is.
pub fn payment_url(token: &str, env: Environment) -> String {
    format!(
        "https://{}payments.montonio.com?payment_token={}",
        env.host_prefix(),
        token
    )
}

/// Verifies a token returned by Montonio and returns its claims.
pub fn decode_payment_token(token: &str, secret_key: &str) -> Result<Value, MontonioError> {
    Jwt::new(secret_key)?.claims(token)
}

/// Returns the merchant reference of a finalized payment.
///
/// A token that fails verification (signature, format, `exp`, `nbf`) is an
/// error. A valid token whose payload is not an object, is not finalized, or
/// has no string `merchant_reference` yields `Ok(None)`.
pub fn reference_from_payment_token(
    token: &str,
    secret_key: &str,
) -> Result<Option<String>, MontonioError> {
    let claims = decode_payment_token(token, secret_key)?;
    let Some(claims) = claims.as_object() else {
        debug!("Payment token payload is not an object");
        return Ok(None);
    };

    if claims.get("status").and_then(Value::as_str) != Some(FINALIZED) {
        info!("Payment is not finalized: {:?}", claims.get("status"));
        return Ok(None);
    }

    Ok(claims
        .get("merchant_reference")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned))
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{Algorithm, EncodingKey, Header};
    use model::decimal::Decimal;
    use serde_json::json;
    use url::Url;

    use super::*;

    const ACCESS_KEY: &str = "access-key";
    const SECRET_KEY: &str = "secret-key";

    fn credentials() -> Credentials {
        Credentials::new(ACCESS_KEY, SECRET_KEY)
    }

    fn return_token(payload: Value) -> String {
        Jwt::new(SECRET_KEY)
            .unwrap()
            .make_jwt(payload, Duration::minutes(10))
            .unwrap()
    }

    #[test]
    fn test_payment_token_round_trip() {
        let info = PaymentInfo::new(Decimal::try_from("12.34").unwrap(), "order-42", "https://shop.example/return")
            .with_merchant_name("Shop")
            .with_notification_url("https://shop.example/notify")
            .with_preselected_aspsp("HABAEE2X")
            .with_checkout_email("buyer@example.com");

        let token = payment_token(&info, &credentials()).unwrap();
        let claims = decode_payment_token(&token, SECRET_KEY).unwrap();

        assert_eq!(claims["access_key"], ACCESS_KEY);
        assert_eq!(claims["exp"].as_i64().unwrap() - claims["iat"].as_i64().unwrap(), 600);

        let decoded: PaymentInfo = serde_json::from_value(claims).unwrap();
        assert_eq!(decoded, info);
    }

    #[test]
    fn test_payment_token_omits_missing_fields() {
        let info = PaymentInfo::new(Decimal::int(5), "order-1", "https://shop.example/return");
        let token = payment_token(&info, &credentials()).unwrap();
        let claims = decode_payment_token(&token, SECRET_KEY).unwrap();

        let mut keys = claims.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "access_key",
                "amount",
                "currency",
                "exp",
                "iat",
                "merchant_reference",
                "merchant_return_url",
            ]
        );
    }

    #[test]
    fn test_payment_token_empty_secret() {
        let info = PaymentInfo::new(Decimal::int(5), "order-1", "https://shop.example/return");
        let err = payment_token(&info, &Credentials::new(ACCESS_KEY, "")).unwrap_err();
        assert!(matches!(err, MontonioError::EmptySecret));
    }

    #[test]
    fn test_payment_url() {
        let token = "aaa.bbb.ccc";

        let sandbox = payment_url(token, Environment::Sandbox);
        assert_eq!(sandbox, "https://sandbox-payments.montonio.com?payment_token=aaa.bbb.ccc");
        assert!(sandbox.ends_with("payment_token=aaa.bbb.ccc"));

        let production = payment_url(token, Environment::Production);
        let url = Url::parse(&production).unwrap();
        assert_eq!(url.host_str(), Some("payments.montonio.com"));
        assert_eq!(url.query(), Some("payment_token=aaa.bbb.ccc"));

        assert_eq!(payment_url(token, Environment::default()), sandbox);
    }

    #[test]
    fn test_payment_url_keeps_real_token() {
        let info = PaymentInfo::new(Decimal::int(1), "order-1", "https://shop.example/return");
        let token = payment_token(&info, &credentials()).unwrap();
        let url = Url::parse(&payment_url(&token, Environment::Sandbox)).unwrap();
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "payment_token");
        assert_eq!(value, token);
    }

    #[test]
    fn test_reference_finalized() {
        let token = return_token(json!({
            "status": "finalized",
            "merchant_reference": "order-42",
            "access_key": ACCESS_KEY,
        }));
        assert_eq!(
            reference_from_payment_token(&token, SECRET_KEY).unwrap(),
            Some("order-42".to_owned())
        );
    }

    #[test]
    fn test_reference_not_finalized() {
        for payload in [
            json!({ "status": "pending", "merchant_reference": "order-42" }),
            json!({ "status": "FINALIZED", "merchant_reference": "order-42" }),
            json!({ "merchant_reference": "order-42" }),
            json!({ "status": "finalized" }),
            json!({ "status": "finalized", "merchant_reference": 42 }),
            json!({ "status": "finalized", "merchant_reference": null }),
        ] {
            let token = return_token(payload.clone());
            assert_eq!(
                reference_from_payment_token(&token, SECRET_KEY).unwrap(),
                None,
                "payload: {}",
                payload
            );
        }
    }

    #[test]
    fn test_reference_wrong_secret() {
        let token = return_token(json!({
            "status": "finalized",
            "merchant_reference": "order-42",
        }));
        let err = reference_from_payment_token(&token, "other-secret").unwrap_err();
        assert!(matches!(err, MontonioError::Jwt(_)));
    }

    #[test]
    fn test_reference_expired() {
        let token = Jwt::new(SECRET_KEY)
            .unwrap()
            .make_jwt(
                json!({ "status": "finalized", "merchant_reference": "order-42" }),
                Duration::seconds(-120),
            )
            .unwrap();
        let err = reference_from_payment_token(&token, SECRET_KEY).unwrap_err();
        assert!(err.is_expired());
    }

    #[test]
    fn test_reference_primitive_payload() {
        for payload in [json!("finalized"), json!(42), json!(null), json!([1, 2])] {
            let token = jsonwebtoken::encode(
                &Header::new(Algorithm::HS256),
                &payload,
                &EncodingKey::from_secret(SECRET_KEY.as_bytes()),
            )
            .unwrap();
            assert_eq!(
                reference_from_payment_token(&token, SECRET_KEY).unwrap(),
                None,
                "payload: {}",
                payload
            );
        }
    }

    #[test]
    fn test_reference_not_yet_valid() {
        let token = return_token(json!({
            "status": "finalized",
            "merchant_reference": "order-42",
            "nbf": chrono::Utc::now().timestamp() + 3600,
        }));
        assert!(reference_from_payment_token(&token, SECRET_KEY).is_err());
    }

    #[test]
    fn test_reference_malformed_token() {
        assert!(reference_from_payment_token("not-a-token", SECRET_KEY).is_err());
        assert!(reference_from_payment_token("", SECRET_KEY).is_err());
    }

    #[test]
    fn test_reference_without_exp() {
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &json!({ "status": "finalized", "merchant_reference": "order-7" }),
            &EncodingKey::from_secret(SECRET_KEY.as_bytes()),
        )
        .unwrap();
        assert_eq!(
            reference_from_payment_token(&token, SECRET_KEY).unwrap(),
            Some("order-7".to_owned())
        );
    }
}
