use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::currency::Currency;
use crate::error::AppError;
use crate::pricing::{PricingOverride, Provider};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    /// Kept as text so an unsupported code degrades to USD instead of rejecting the file
    #[serde(default)]
    pub(crate) currency: Option<String>,
    #[serde(default)]
    pub(crate) usd_to_inr: Option<f64>,
    #[serde(default)]
    pub(crate) provider: Option<Provider>,
    #[serde(default)]
    pub(crate) model: Option<String>,
    /// Per-model price overrides: `[pricing."model-id"]`
    #[serde(default)]
    pub(crate) pricing: HashMap<String, PricingOverride>,
}

impl Config {
    /// Load from an explicit path (errors are fatal) or the first parseable
    /// default location (errors are logged and skipped).
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            let config = Self::load_file(path)?;
            info!(path = %path.display(), "loaded config");
            return Ok(config);
        }

        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_file(&path) {
                Ok(config) => {
                    info!(path = %path.display(), "loaded config");
                    return Ok(config);
                }
                Err(e) => warn!("{e}"),
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    fn load_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str::<Config>(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/aicost/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("aicost").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/aicost/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("aicost").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.aicost.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".aicost.toml"));
        }

        paths
    }

    /// Configured display currency; unsupported codes fall back to USD.
    pub(crate) fn currency(&self) -> Option<Currency> {
        let raw = self.currency.as_deref()?;
        match raw.parse::<Currency>() {
            Ok(currency) => Some(currency),
            Err(e) => {
                warn!("{e}, falling back to USD");
                Some(Currency::Usd)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        for p in &paths {
            println!("Path: {:?}, exists: {}", p, p.exists());
        }
        assert!(!paths.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let config: Config = toml::from_str(
            r#"
currency = "INR"
usd_to_inr = 83.5
provider = "azure"
model = "azure-gpt-4"
color = "always"
compact = true

[pricing."openai-gpt-4o"]
input_price = 2.0
output_price = 8.0

[pricing."claude-3-haiku"]
output_price = 1.0
"#,
        )
        .unwrap();
        assert_eq!(config.currency(), Some(Currency::Inr));
        assert_eq!(config.usd_to_inr, Some(83.5));
        assert_eq!(config.provider, Some(Provider::Azure));
        assert_eq!(config.model.as_deref(), Some("azure-gpt-4"));
        assert!(matches!(config.color, Some(ConfigColorMode::Always)));
        assert!(config.compact);
        assert_eq!(config.pricing.len(), 2);
        assert_eq!(config.pricing["openai-gpt-4o"].input_price, Some(2.0));
        assert_eq!(config.pricing["claude-3-haiku"].input_price, None);
    }

    #[test]
    fn unsupported_currency_falls_back_to_usd() {
        let config: Config = toml::from_str(r#"currency = "EUR""#).unwrap();
        assert_eq!(config.currency(), Some(Currency::Usd));
        assert_eq!(Config::default().currency(), None);
    }

    #[test]
    fn unknown_provider_is_a_parse_error() {
        assert!(toml::from_str::<Config>(r#"provider = "gemini""#).is_err());
    }

    #[test]
    fn load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "usd_to_inr = 90.0").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.usd_to_inr, Some(90.0));
    }

    #[test]
    fn load_explicit_invalid_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "usd_to_inr = \"lots\"").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    fn load_explicit_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
