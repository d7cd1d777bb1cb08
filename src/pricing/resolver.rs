use std::collections::HashMap;

use super::catalog::find_model;
use super::provider::Provider;
use super::types::{ModelPricing, PricingOverride};

/// Per-model price overrides keyed by catalog id
pub(crate) type CustomPricing = HashMap<String, PricingOverride>;

/// Catalog entry for `id` with its override (if any) layered on top.
/// Never mutates the catalog.
pub(crate) fn resolve_pricing(
    catalog: &[ModelPricing],
    overrides: &CustomPricing,
    id: &str,
) -> Option<ModelPricing> {
    find_model(catalog, id).map(|m| m.with_override(overrides.get(id)))
}

pub(crate) fn resolve_all(catalog: &[ModelPricing], overrides: &CustomPricing) -> Vec<ModelPricing> {
    catalog
        .iter()
        .map(|m| m.with_override(overrides.get(m.id)))
        .collect()
}

pub(crate) fn resolve_by_provider(
    catalog: &[ModelPricing],
    overrides: &CustomPricing,
    provider: Provider,
) -> Vec<ModelPricing> {
    catalog
        .iter()
        .filter(|m| m.provider == provider)
        .map(|m| m.with_override(overrides.get(m.id)))
        .collect()
}
