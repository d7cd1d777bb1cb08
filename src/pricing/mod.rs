mod catalog;
mod cost;
mod provider;
mod resolver;
mod types;

pub(crate) use catalog::{CATALOG, first_model_for};
pub(crate) use cost::{calculate_cost, calculate_percentage, compare_cost};
pub(crate) use provider::{Provider, ProviderInfo};
pub(crate) use resolver::{CustomPricing, resolve_all, resolve_by_provider, resolve_pricing};
pub(crate) use types::{CostCalculation, ModelPricing, PricingOverride};
