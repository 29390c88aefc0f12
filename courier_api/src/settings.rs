use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
    /// JSON file overriding the estimator tables.
    pub estimator_config: Option<PathBuf>,
}

impl ApiSettings {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("COURIER_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match lookup("COURIER_API_PORT").or_else(|| lookup("AI_SERVICE_PORT")) {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid port '{port}'"))?,
            None => DEFAULT_PORT,
        };

        let estimator_config = lookup("COURIER_ESTIMATOR_CONFIG")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(ApiSettings {
            host,
            port,
            estimator_config,
        })
    }
}
