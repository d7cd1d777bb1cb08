//! Cross-model and cross-provider cost rankings
//!
//! All amounts here are already converted to the display currency.

use serde::Serialize;

use crate::currency::{Currency, convert_currency};
use crate::pricing::{ModelPricing, Provider, ProviderInfo, calculate_cost, compare_cost};

/// Cost of one model for the current token counts
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct ModelCost {
    pub(crate) model: ModelPricing,
    pub(crate) input_cost: f64,
    pub(crate) output_cost: f64,
    pub(crate) total_cost: f64,
}

/// Inputs shared by every comparison
#[derive(Debug, Clone, Copy)]
pub(crate) struct CompareInput {
    pub(crate) input_tokens: u64,
    pub(crate) output_tokens: u64,
    pub(crate) currency: Currency,
    pub(crate) usd_to_inr: f64,
}

impl CompareInput {
    pub(crate) fn has_tokens(&self) -> bool {
        self.input_tokens > 0 || self.output_tokens > 0
    }
}

/// Cost every model and rank cheapest first. Ties keep catalog order.
pub(crate) fn compare_models(models: &[ModelPricing], input: CompareInput) -> Vec<ModelCost> {
    let mut costs: Vec<ModelCost> = models
        .iter()
        .map(|model| {
            let calc = calculate_cost(input.input_tokens, input.output_tokens, model);
            let convert = |usd| convert_currency(usd, input.currency, input.usd_to_inr);
            ModelCost {
                model: *model,
                input_cost: convert(calc.input_cost),
                output_cost: convert(calc.output_cost),
                total_cost: convert(calc.total_cost),
            }
        })
        .collect();
    costs.sort_by(|a, b| compare_cost(a.total_cost, b.total_cost));
    costs
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ProviderGroup {
    pub(crate) provider: Provider,
    /// Cheapest first
    pub(crate) models: Vec<ModelCost>,
}

impl ProviderGroup {
    pub(crate) fn best(&self) -> Option<&ModelCost> {
        self.models.first()
    }
}

/// Every model ranked, plus the same ranking grouped by provider
#[derive(Debug, Clone)]
pub(crate) struct ModelComparison {
    pub(crate) ranked: Vec<ModelCost>,
    pub(crate) groups: Vec<ProviderGroup>,
}

impl ModelComparison {
    /// `None` when there is nothing to compare (no tokens or no models).
    pub(crate) fn build(models: &[ModelPricing], input: CompareInput) -> Option<Self> {
        if !input.has_tokens() || models.is_empty() {
            return None;
        }
        let ranked = compare_models(models, input);

        let mut groups: Vec<ProviderGroup> = Vec::new();
        for cost in &ranked {
            match groups.iter_mut().find(|g| g.provider == cost.model.provider) {
                Some(group) => group.models.push(*cost),
                None => groups.push(ProviderGroup {
                    provider: cost.model.provider,
                    models: vec![*cost],
                }),
            }
        }
        // ranked is sorted, so groups already appear in order of their cheapest model
        Some(Self { ranked, groups })
    }

    pub(crate) fn cheapest(&self) -> &ModelCost {
        &self.ranked[0]
    }

    pub(crate) fn most_expensive(&self) -> &ModelCost {
        &self.ranked[self.ranked.len() - 1]
    }

    pub(crate) fn is_overall_best(&self, cost: &ModelCost) -> bool {
        self.cheapest().model.id == cost.model.id
    }

    /// How many times more `cost` is than the cheapest option.
    /// `None` when the cheapest option is free and this one is not.
    pub(crate) fn ratio_vs_cheapest(&self, cost: &ModelCost) -> Option<f64> {
        let cheapest = self.cheapest().total_cost;
        if cheapest == 0.0 {
            return (cost.total_cost == 0.0).then_some(1.0);
        }
        Some(cost.total_cost / cheapest)
    }
}

/// Cheapest model for one provider
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ProviderSummary {
    pub(crate) provider: ProviderInfo,
    pub(crate) cheapest: ModelCost,
    pub(crate) total_models: usize,
    #[serde(skip)]
    pub(crate) models: Vec<ModelCost>,
}

/// Rank `providers` by their cheapest model. Providers without models are dropped.
pub(crate) fn compare_providers(
    models: &[ModelPricing],
    providers: &[Provider],
    input: CompareInput,
) -> Vec<ProviderSummary> {
    if !input.has_tokens() {
        return Vec::new();
    }

    let mut summaries: Vec<ProviderSummary> = providers
        .iter()
        .filter_map(|&provider| {
            let provider_models: Vec<ModelPricing> = models
                .iter()
                .filter(|m| m.provider == provider)
                .copied()
                .collect();
            let ranked = compare_models(&provider_models, input);
            let cheapest = *ranked.first()?;
            Some(ProviderSummary {
                provider: provider.info(),
                cheapest,
                total_models: ranked.len(),
                models: ranked,
            })
        })
        .collect();

    summaries.sort_by(|a, b| compare_cost(a.cheapest.total_cost, b.cheapest.total_cost));
    summaries
}
