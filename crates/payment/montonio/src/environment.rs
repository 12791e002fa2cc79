use std::str::FromStr;

use strum::{Display, EnumIter};

use crate::errors::MontonioError;

/// Selects the family of Montonio hostnames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    pub fn host_prefix(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox-",
            Environment::Production => "",
        }
    }
}

impl FromStr for Environment {
    type Err = MontonioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            _ => Err(MontonioError::InvalidEnvironment(s.to_owned())),
        }
    }
}
