//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_STORAGE_PATH, DEFAULT_TIMEOUT_SECONDS};

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub api: ApiSettings,
    pub storage: StorageSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    /// JSON file standing in for the browser's local storage.
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
    pub directory: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            directory: None,
        }
    }
}

impl ClientConfig {
    /// Load from `config/default`, `config/{APP_ENV}` and `HRIS__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Self::load_for(&env)
    }

    pub fn load_for(env: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("api.base_url", DEFAULT_API_BASE_URL)?
            .set_default("api.timeout_seconds", DEFAULT_TIMEOUT_SECONDS)?
            .set_default("storage.path", DEFAULT_STORAGE_PATH)?
            .set_default("log.level", "info")?
            .set_default("log.json", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("HRIS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut loaded: ClientConfig = config.try_deserialize()?;
        loaded.api.base_url = loaded.api.base_url.trim_end_matches('/').to_string();
        Ok(loaded)
    }
}
