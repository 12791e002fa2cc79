use std::{env::var, sync::Arc};

use dotenv::dotenv;
use eyre::{Context, Error};
use log::debug;
use montonio::{Credentials, Environment};

#[derive(Clone)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone)]
pub struct EnvInner {
    access_key: String,
    secret_key: String,
    environment: Environment,
}

impl Env {
    pub fn access_key(&self) -> &str {
        &self.0.access_key
    }

    pub fn secret_key(&self) -> &str {
        &self.0.secret_key
    }

    pub fn environment(&self) -> Environment {
        self.0.environment
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.access_key(), self.secret_key())
    }

    pub fn load() -> Result<Env, Error> {
        if let Err(err) = dotenv() {
            debug!("Failed to load .env file: {}", err);
        }

        let environment = match var("MONTONIO_ENV") {
            Ok(value) => value.parse::<Environment>().context("MONTONIO_ENV is invalid")?,
            Err(_) => Environment::default(),
        };

        Ok(Env(Arc::new(EnvInner {
            access_key: var("MONTONIO_ACCESS_KEY").context("MONTONIO_ACCESS_KEY is not set")?,
            secret_key: var("MONTONIO_SECRET_KEY").context("MONTONIO_SECRET_KEY is not set")?,
            environment,
        })))
    }
}
