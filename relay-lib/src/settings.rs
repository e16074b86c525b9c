use std::{fmt, path::PathBuf, str::FromStr, time::Duration};

use relay_proto::{DEFAULT_FORWARD_TIMEOUT_SECS, DEFAULT_WEBHOOK_URL};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment: {}", other)),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub webhook_url: String,
    pub upload_dir: PathBuf,
    pub environment: Environment,
    pub forward_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            upload_dir: PathBuf::from("uploads"),
            environment: Environment::default(),
            forward_timeout: Duration::from_secs(DEFAULT_FORWARD_TIMEOUT_SECS),
        }
    }
}
