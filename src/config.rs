//! Configuration loading from TOML files.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection endpoints for the ledger gateway service.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Base URL for submit/evaluate calls.
    pub api_url: String,
    /// WebSocket URL for the contract event feed.
    pub ws_url: String,
    /// Channel the chaincode is deployed on.
    #[serde(default = "default_channel")]
    pub channel: String,
    /// Chaincode name.
    #[serde(default = "default_chaincode")]
    pub chaincode: String,
}

fn default_channel() -> String {
    "mychannel".into()
}

fn default_chaincode() -> String {
    "chaincode".into()
}

/// Local wallet directory holding per-identity state (wishlist files).
#[derive(Debug, Clone, Deserialize)]
pub struct WalletConfig {
    #[serde(default = "default_wallet_dir")]
    pub dir: PathBuf,
}

fn default_wallet_dir() -> PathBuf {
    PathBuf::from("wallet")
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            dir: default_wallet_dir(),
        }
    }
}

/// Marketplace naming conventions.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    /// Organization whose listings this identity buys from. Used to build
    /// fully-qualified item identifiers (`<counterparty>_<name>`) on
    /// manual purchases.
    #[serde(default = "default_counterparty")]
    pub counterparty: String,
}

fn default_counterparty() -> String {
    "Org2MSP".into()
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            counterparty: default_counterparty(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.gateway.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if self.gateway.ws_url.is_empty() {
            return Err(ConfigError::MissingField { field: "ws_url" }.into());
        }
        if self.market.counterparty.is_empty() {
            return Err(ConfigError::MissingField {
                field: "counterparty",
            }
            .into());
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig {
                api_url: "http://localhost:8080".into(),
                ws_url: "ws://localhost:8080/events".into(),
                channel: default_channel(),
                chaincode: default_chaincode(),
            },
            wallet: WalletConfig::default(),
            market: MarketConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
