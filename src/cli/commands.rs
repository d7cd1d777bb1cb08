//! CLI subcommand definitions

use clap::Subcommand;

use crate::pricing::Provider;

/// Main CLI commands
#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Commands {
    /// Show the cost breakdown for the selected model (default)
    Calc,
    /// Compare every model's cost, grouped by provider
    Compare,
    /// Rank providers by their cheapest model
    Providers {
        /// Only compare these providers (comma separated)
        #[arg(long, value_enum, value_delimiter = ',', value_name = "PROVIDERS")]
        only: Vec<Provider>,
    },
    /// List catalog models and their prices
    Models,
    /// Show supported currencies and the current exchange rate
    Currencies,
}

impl Commands {
    /// Providers to compare; all of them when no filter is given
    pub(crate) fn provider_filter(only: &[Provider]) -> Vec<Provider> {
        if only.is_empty() {
            Provider::ALL.to_vec()
        } else {
            only.to_vec()
        }
    }
}
