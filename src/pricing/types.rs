use serde::{Deserialize, Serialize};

use super::provider::Provider;

/// Model pricing info (USD per million tokens)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct ModelPricing {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) input_price: f64,
    pub(crate) output_price: f64,
    pub(crate) category: &'static str,
    pub(crate) provider: Provider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) context_window: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<&'static str>,
}

/// Caller-supplied price fields shadowing a catalog entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PricingOverride {
    #[serde(default)]
    pub(crate) input_price: Option<f64>,
    #[serde(default)]
    pub(crate) output_price: Option<f64>,
}

impl PricingOverride {
    /// Layer `update` on top of `self`; fields present in `update` win.
    pub(crate) fn merge(self, update: PricingOverride) -> PricingOverride {
        PricingOverride {
            input_price: update.input_price.or(self.input_price),
            output_price: update.output_price.or(self.output_price),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.input_price.is_none() && self.output_price.is_none()
    }
}

impl ModelPricing {
    pub(crate) fn with_override(mut self, ov: Option<&PricingOverride>) -> ModelPricing {
        if let Some(ov) = ov {
            if let Some(input) = ov.input_price {
                self.input_price = input;
            }
            if let Some(output) = ov.output_price {
                self.output_price = output;
            }
        }
        self
    }
}

/// Cost breakdown for one model, always derived from token counts and pricing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct CostCalculation {
    pub(crate) input_tokens: u64,
    pub(crate) output_tokens: u64,
    pub(crate) model: ModelPricing,
    pub(crate) input_cost: f64,
    pub(crate) output_cost: f64,
    pub(crate) total_cost: f64,
}

impl CostCalculation {
    pub(crate) fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}
