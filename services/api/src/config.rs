use buybitcoin_core::price::{CryptoCompareClient, Url};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub price_api_url: Url,
    pub price_api_key: Option<String>,
    pub price_exchange: String,
    pub price_api_timeout: Duration,
    pub apl_document_path: PathBuf,
    /// When set, envelopes addressed to any other skill are rejected.
    pub skill_id: Option<String>,
    pub log_level: Level,
}

/// Reads an optional variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let price_api_url_str = std::env::var("PRICE_API_URL")
            .unwrap_or_else(|_| CryptoCompareClient::DEFAULT_URL.to_string());
        let price_api_url = Url::parse(&price_api_url_str)
            .map_err(|e| ConfigError::InvalidValue("PRICE_API_URL".to_string(), e.to_string()))?;

        let price_api_key = optional_var("PRICE_API_KEY");
        let price_exchange =
            std::env::var("PRICE_EXCHANGE").unwrap_or_else(|_| "Coinbase".to_string());

        let timeout_str =
            std::env::var("PRICE_API_TIMEOUT_SECS").unwrap_or_else(|_| "10".to_string());
        let price_api_timeout = match timeout_str.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                return Err(ConfigError::InvalidValue(
                    "PRICE_API_TIMEOUT_SECS".to_string(),
                    format!("'{}' is not a positive number of seconds", timeout_str),
                ));
            }
        };

        let apl_document_path = std::env::var("APL_DOCUMENT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./assets/aplbuybitcoin.json"));

        let skill_id = optional_var("SKILL_ID");

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            bind_address,
            price_api_url,
            price_api_key,
            price_exchange,
            price_api_timeout,
            apl_document_path,
            skill_id,
            log_level,
        })
    }

    /// Builds the CryptoCompare client described by this configuration.
    pub fn price_client(&self) -> Result<CryptoCompareClient, ConfigError> {
        let client = CryptoCompareClient::new(self.price_api_url.clone(), self.price_api_timeout)
            .map_err(|e| ConfigError::InvalidValue("PRICE_API_URL".to_string(), e.to_string()))?
            .with_exchange(self.price_exchange.clone());
        Ok(match &self.price_api_key {
            Some(key) => client.with_api_key(key.clone()),
            None => client,
        })
    }
}
