use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SNCF_API_KEY environment variable is required")]
    MissingApiKey,
}

/// Startup configuration, read once before the dispatcher is constructed.
/// Request logic never reads the environment.
#[derive(Debug)]
pub struct Config {
    pub mode: String, // "stdio" or "server"
    pub port: u16,
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("SNCF_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let mode = std::env::var("MODE").unwrap_or_else(|_| "stdio".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);

        Ok(Self { mode, port, api_key })
    }
}
