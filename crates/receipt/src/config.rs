//! Runtime settings, read from the environment.

use core::str::FromStr;

use thiserror::Error;

pub const SEED_VAR: &str = "INVOICE_SEED";
pub const FORMAT_VAR: &str = "RECEIPT_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an unsigned integer, got {value:?}")]
    InvalidSeed { var: &'static str, value: String },

    #[error("{var} must be `text` or `json`, got {value:?}")]
    InvalidFormat { var: &'static str, value: String },
}

/// How the receipt is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReceiptFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReceiptFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidFormat {
                var: FORMAT_VAR,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Seed for deterministic invoice numbers; random numbers when `None`.
    pub seed: Option<u64>,
    pub format: ReceiptFormat,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from any variable lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let seed = match lookup(SEED_VAR) {
            Some(value) => Some(value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidSeed {
                var: SEED_VAR,
                value,
            })?),
            None => {
                tracing::debug!("{SEED_VAR} not set; invoice numbers will be random");
                None
            }
        };

        let format = match lookup(FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => {
                tracing::debug!("{FORMAT_VAR} not set; printing text receipt");
                ReceiptFormat::default()
            }
        };

        Ok(Self { seed, format })
    }
}
