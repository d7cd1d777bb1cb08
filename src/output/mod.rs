mod breakdown;
mod compare;
mod currencies;
mod format;
mod models;
mod providers;

pub(crate) use breakdown::{output_breakdown_json, print_breakdown};
pub(crate) use compare::{output_comparison_json, print_comparison};
pub(crate) use currencies::{output_currencies_json, print_currencies};
pub(crate) use format::DisplayOptions;
pub(crate) use models::{output_models_json, print_models};
pub(crate) use providers::{output_provider_comparison_json, print_provider_comparison};
