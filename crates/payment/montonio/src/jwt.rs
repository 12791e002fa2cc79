use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{Duration, Utc};
use jsonwebtoken::{errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header};
use serde::Serialize;
use serde_json::Value;

use crate::errors::MontonioError;

/// HS256 signer/verifier keyed by a merchant secret.
pub(crate) struct Jwt {
    jwt_decode: DecodingKey,
    jwt_encode: EncodingKey,
    header: Header,
}

#[derive(Serialize)]
struct Expiring<C> {
    #[serde(flatten)]
    claims: C,
    iat: i64,
    exp: i64,
}

fn rejected(kind: ErrorKind) -> MontonioError {
    MontonioError::Jwt(kind.into())
}

impl Jwt {
    pub fn new(secret: &str) -> Result<Self, MontonioError> {
        if secret.is_empty() {
            return Err(MontonioError::EmptySecret);
        }
        Ok(Jwt {
            jwt_decode: DecodingKey::from_secret(secret.as_bytes()),
            jwt_encode: EncodingKey::from_secret(secret.as_bytes()),
            header: Header::new(Algorithm::HS256),
        })
    }

    pub fn make_jwt<C: Serialize>(&self, claims: C, ttl: Duration) -> Result<String, MontonioError> {
        let now = Utc::now();
        let claims = Expiring {
            claims,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };
        Ok(jsonwebtoken::encode(&self.header, &claims, &self.jwt_encode)?)
    }

    /// Verifies the signature and returns the payload as is.
    ///
    /// Any JSON payload is accepted. For object payloads `exp` and `nbf` are
    /// enforced when present, without clock leeway.
    pub fn claims(&self, token: &str) -> Result<Value, MontonioError> {
        let (message, signature) = token
            .rsplit_once('.')
            .ok_or_else(|| rejected(ErrorKind::InvalidToken))?;
        let (_, payload) = message
            .split_once('.')
            .ok_or_else(|| rejected(ErrorKind::InvalidToken))?;

        let header = jsonwebtoken::decode_header(token)?;
        if header.alg != Algorithm::HS256 {
            return Err(rejected(ErrorKind::InvalidAlgorithm));
        }
        if !jsonwebtoken::crypto::verify(
            signature,
            message.as_bytes(),
            &self.jwt_decode,
            Algorithm::HS256,
        )? {
            return Err(rejected(ErrorKind::InvalidSignature));
        }

        let payload = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| rejected(ErrorKind::InvalidToken))?;
        let claims: Value =
            serde_json::from_slice(&payload).map_err(|_| rejected(ErrorKind::InvalidToken))?;

        if let Some(object) = claims.as_object() {
            let now = Utc::now().timestamp() as f64;
            if let Some(exp) = object.get("exp") {
                let exp = exp.as_f64().ok_or_else(|| rejected(ErrorKind::InvalidToken))?;
                if now >= exp {
                    return Err(rejected(ErrorKind::ExpiredSignature));
                }
            }
            if let Some(nbf) = object.get("nbf") {
                let nbf = nbf.as_f64().ok_or_else(|| rejected(ErrorKind::InvalidToken))?;
                if nbf > now {
                    return Err(rejected(ErrorKind::ImmatureSignature));
                }
            }
        }
        Ok(claims)
    }
}
