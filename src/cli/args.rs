//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::currency::Currency;
use crate::error::AppError;
use crate::pricing::Provider;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "aicost")]
#[command(about = "Fast AI-model API cost calculator", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Input tokens (e.g. 1500, 1,500, 1.5K, 2M)
    #[arg(short, long, global = true, value_name = "TOKENS", value_parser = parse_tokens)]
    pub(crate) input: Option<u64>,

    /// Output tokens (e.g. 1500, 1,500, 1.5K, 2M)
    #[arg(short, long, global = true, value_name = "TOKENS", value_parser = parse_tokens)]
    pub(crate) output: Option<u64>,

    /// Provider; selects that provider's first model unless --model is given
    #[arg(short, long, global = true, value_enum)]
    pub(crate) provider: Option<Provider>,

    /// Model id (see `aicost models`)
    #[arg(short, long, global = true, value_name = "ID")]
    pub(crate) model: Option<String>,

    /// Display currency
    #[arg(long, global = true, value_enum)]
    pub(crate) currency: Option<Currency>,

    /// USD to INR exchange rate
    #[arg(long, global = true, value_name = "RATE", value_parser = parse_rate)]
    pub(crate) rate: Option<f64>,

    /// Custom input price (USD per 1M tokens) for the selected model
    #[arg(long, global = true, value_name = "USD", value_parser = parse_price)]
    pub(crate) input_price: Option<f64>,

    /// Custom output price (USD per 1M tokens) for the selected model
    #[arg(long, global = true, value_name = "USD", value_parser = parse_price)]
    pub(crate) output_price: Option<f64>,

    /// Ignore any configured exchange rate and use the built-in default
    #[arg(long, global = true, conflicts_with = "rate")]
    pub(crate) default_rate: bool,

    /// Drop configured price overrides for these model ids (comma separated)
    #[arg(long, global = true, value_delimiter = ',', value_name = "IDS")]
    pub(crate) reset_pricing: Vec<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Compact output (fewer columns)
    #[arg(short = 'c', long, global = true)]
    pub(crate) compact: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI left them at the default
        if !self.compact && config.compact {
            self.compact = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && matches!(self.color, ColorMode::Auto)
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.currency.is_none() {
            self.currency = config.currency();
        }
        if self.rate.is_none() && !self.default_rate {
            self.rate = config.usd_to_inr;
        }
        // Provider and model are one selection: any explicit choice on the
        // command line replaces the configured pair entirely.
        if self.provider.is_none() && self.model.is_none() {
            self.provider = config.provider;
            self.model = config.model.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

/// Parse a token count: plain digits, comma-grouped digits, or a K/M suffix.
pub(crate) fn parse_tokens(raw: &str) -> Result<u64, AppError> {
    let invalid = || AppError::InvalidTokenCount {
        input: raw.to_string(),
    };
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    if cleaned.is_empty() {
        return Err(invalid());
    }

    let (number, multiplier) = match cleaned.chars().last() {
        Some('k' | 'K') => (&cleaned[..cleaned.len() - 1], 1_000.0),
        Some('m' | 'M') => (&cleaned[..cleaned.len() - 1], 1_000_000.0),
        _ => (cleaned.as_str(), 1.0),
    };

    // The calculator stores counts as i64, so anything above i64::MAX is rejected here.
    let max = i64::MAX as u64;
    if multiplier == 1.0 {
        let value = number.parse::<u64>().map_err(|_| invalid())?;
        return if value > max { Err(invalid()) } else { Ok(value) };
    }

    let value: f64 = number.parse().map_err(|_| invalid())?;
    let scaled = (value * multiplier).round();
    if !scaled.is_finite() || scaled < 0.0 || scaled >= max as f64 {
        return Err(invalid());
    }
    Ok(scaled as u64)
}

fn parse_rate(raw: &str) -> Result<f64, AppError> {
    let rate: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidExchangeRate {
            input: raw.trim().to_string(),
        })?;
    crate::currency::validate_rate(rate)
}

pub(crate) fn parse_price(raw: &str) -> Result<f64, AppError> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidPrice {
            input: raw.trim().to_string(),
        })?;
    validate_price(price)
}

pub(crate) fn validate_price(price: f64) -> Result<f64, AppError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(AppError::InvalidPrice {
            input: price.to_string(),
        })
    }
}
