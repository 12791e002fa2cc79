use chrono::Duration;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    credentials::Credentials, environment::Environment, errors::MontonioError, jwt::Jwt,
};

const AUTH_TOKEN_TTL_HOURS: i64 = 1;

#[derive(Serialize)]
struct AuthClaims<'a> {
    access_key: &'a str,
}

/// Bank list (ASPSP) endpoint and the bearer token to call it with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BankListRequest {
    pub url: String,
    pub auth: String,
}

pub fn bank_list_url(env: Environment) -> String {
    format!(
        "https://api.{}payments.montonio.com/pis/v2/merchants/aspsps",
        env.host_prefix()
    )
}

/// Builds the bank list request. The HTTP call itself is left to the caller.
pub fn bank_list_request(
    credentials: &Credentials,
    env: Environment,
) -> Result<BankListRequest, MontonioError> {
    debug!("Issuing bank list auth token for {} environment", env);
    let auth = Jwt::new(credentials.secret_key())?.make_jwt(
        AuthClaims {
            access_key: credentials.access_key(),
        },
        Duration::hours(AUTH_TOKEN_TTL_HOURS),
    )?;
    Ok(BankListRequest {
        url: bank_list_url(env),
        auth,
    })
}
