use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid token count \"{input}\" (expected e.g. 1500, 1,500, 1.5K or 2M)")]
    InvalidTokenCount { input: String },

    #[error("Invalid exchange rate \"{input}\" (must be a positive number)")]
    InvalidExchangeRate { input: String },

    #[error("Invalid price \"{input}\" (must be a non-negative number)")]
    InvalidPrice { input: String },

    #[error("Unsupported currency: {input}")]
    UnsupportedCurrency { input: String },

    #[error("Failed to parse {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
