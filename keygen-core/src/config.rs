// keygen-core/src/config.rs
//
// Runtime settings for front ends. Nothing here reaches key derivation:
// paths, word count and the entropy source are fixed.

use crate::chains::Chain;
use crate::error::{WalletError, WalletResult};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// How the CLI renders records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeygenConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Chain selected at startup
    #[serde(default)]
    pub default_chain: Option<Chain>,
    /// Print private keys and phrases instead of masking them
    #[serde(default)]
    pub reveal_secrets: bool,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_log_level() -> String {
    "keygen_core=info".to_string()
}

impl Default for KeygenConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_chain: None,
            reveal_secrets: false,
            output: OutputFormat::default(),
        }
    }
}

impl KeygenConfig {
    /// Load from `config/keygen.{toml,json,yaml}` then `KEYGEN_*` variables.
    ///
    /// e.g. `KEYGEN_OUTPUT=json`, `KEYGEN_DEFAULT_CHAIN=solana`
    pub fn load() -> WalletResult<Self> {
        let config = Config::builder()
            .add_source(File::with_name("config/keygen").required(false))
            .add_source(
                Environment::with_prefix("KEYGEN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_error)?;

        config.try_deserialize().map_err(config_error)
    }

    /// Parse a TOML document, falling back to defaults for missing keys.
    pub fn from_toml(source: &str) -> WalletResult<Self> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize::<Self>)
            .map_err(config_error)
    }
}

fn config_error(e: ConfigError) -> WalletError {
    WalletError::Config(e.to_string())
}
