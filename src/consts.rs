/// Catalog prices are quoted per this many tokens
pub(crate) const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// Model selected on startup (the most cost-effective OpenAI model)
pub(crate) const DEFAULT_MODEL_ID: &str = "openai-gpt-4o-mini";

/// Fallback USD to INR rate; there is no live rate fetching
pub(crate) const DEFAULT_USD_TO_INR_RATE: f64 = 86.00;

/// Timestamp format used when showing when the exchange rate was last set
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
