//! Calculator state store
//!
//! Single source of truth for the calculator inputs. Every setter changes one
//! facet of state and then synchronously re-derives `calculation`, so reads
//! never observe a stale result.

use chrono::Utc;
use tracing::debug;

use crate::consts::{DEFAULT_MODEL_ID, DEFAULT_USD_TO_INR_RATE};
use crate::core::CompareInput;
use crate::currency::{Currency, ExchangeRates, convert_currency};
use crate::pricing::{
    CATALOG, CostCalculation, CustomPricing, ModelPricing, PricingOverride, Provider,
    calculate_cost, first_model_for, resolve_all, resolve_by_provider, resolve_pricing,
};

/// Raw calculator inputs plus the derived calculation
#[derive(Debug, Clone)]
pub(crate) struct CalculatorState {
    pub(crate) input_tokens: i64,
    pub(crate) output_tokens: i64,
    pub(crate) selected_model: String,
    pub(crate) selected_provider: Provider,
    pub(crate) currency: Currency,
    pub(crate) exchange_rates: ExchangeRates,
    pub(crate) custom_pricing: CustomPricing,
    pub(crate) calculation: Option<CostCalculation>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            input_tokens: 0,
            output_tokens: 0,
            selected_model: DEFAULT_MODEL_ID.to_string(),
            selected_provider: Provider::OpenAi,
            currency: Currency::Usd,
            exchange_rates: ExchangeRates::default(),
            custom_pricing: CustomPricing::new(),
            calculation: None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct CalculatorStore {
    catalog: &'static [ModelPricing],
    state: CalculatorState,
}

impl Default for CalculatorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorStore {
    pub(crate) fn new() -> Self {
        Self::with_catalog(CATALOG)
    }

    pub(crate) fn with_catalog(catalog: &'static [ModelPricing]) -> Self {
        let mut store = Self {
            catalog,
            state: CalculatorState::default(),
        };
        store.calculate_current_cost();
        store
    }

    pub(crate) fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub(crate) fn input_tokens(&self) -> i64 {
        self.state.input_tokens
    }

    pub(crate) fn output_tokens(&self) -> i64 {
        self.state.output_tokens
    }

    pub(crate) fn selected_model(&self) -> &str {
        &self.state.selected_model
    }

    pub(crate) fn selected_provider(&self) -> Provider {
        self.state.selected_provider
    }

    pub(crate) fn currency(&self) -> Currency {
        self.state.currency
    }

    pub(crate) fn exchange_rates(&self) -> ExchangeRates {
        self.state.exchange_rates
    }

    pub(crate) fn calculation(&self) -> Option<&CostCalculation> {
        self.state.calculation.as_ref()
    }

    pub(crate) fn has_custom_pricing(&self, model_id: &str) -> bool {
        self.state.custom_pricing.contains_key(model_id)
    }

    // Mutations

    pub(crate) fn set_input_tokens(&mut self, tokens: i64) {
        self.state.input_tokens = tokens;
        self.calculate_current_cost();
    }

    pub(crate) fn set_output_tokens(&mut self, tokens: i64) {
        self.state.output_tokens = tokens;
        self.calculate_current_cost();
    }

    /// Unknown ids are accepted; they resolve to "no calculation".
    pub(crate) fn set_selected_model(&mut self, model_id: &str) {
        self.state.selected_model = model_id.to_string();
        self.calculate_current_cost();
    }

    /// Switch provider and select its first catalog model. A provider with no
    /// models keeps the previous selection.
    pub(crate) fn set_selected_provider(&mut self, provider: Provider) {
        self.state.selected_provider = provider;
        match first_model_for(self.catalog, provider) {
            Some(model) => self.state.selected_model = model.id.to_string(),
            None => debug!(%provider, "provider has no models, keeping current selection"),
        }
        self.calculate_current_cost();
    }

    pub(crate) fn set_currency(&mut self, currency: Currency) {
        self.state.currency = currency;
        self.calculate_current_cost();
    }

    /// Callers validate the rate; non-positive values are stored as given.
    pub(crate) fn set_exchange_rate(&mut self, rate: f64) {
        self.state.exchange_rates = ExchangeRates {
            usd_to_inr: rate,
            last_updated: Utc::now(),
        };
        self.calculate_current_cost();
    }

    pub(crate) fn reset_exchange_rate(&mut self) {
        self.set_exchange_rate(DEFAULT_USD_TO_INR_RATE);
    }

    /// Merge `update` onto the model's current override. No-op for ids outside the catalog.
    pub(crate) fn update_custom_pricing(&mut self, model_id: &str, update: PricingOverride) {
        if resolve_pricing(self.catalog, &self.state.custom_pricing, model_id).is_none() {
            debug!(model_id, "ignoring price override for unknown model");
            return;
        }

        let merged = self
            .state
            .custom_pricing
            .get(model_id)
            .copied()
            .unwrap_or_default()
            .merge(update);
        debug!(
            model_id,
            input_price = ?merged.input_price,
            output_price = ?merged.output_price,
            "applied price override"
        );
        self.state
            .custom_pricing
            .insert(model_id.to_string(), merged);

        if self.state.selected_model == model_id {
            self.calculate_current_cost();
        }
    }

    pub(crate) fn reset_custom_pricing(&mut self, model_id: &str) {
        if self.state.custom_pricing.remove(model_id).is_some() {
            debug!(model_id, "removed price override");
        }
        if self.state.selected_model == model_id {
            self.calculate_current_cost();
        }
    }

    /// Re-derive `calculation` from the current inputs.
    pub(crate) fn calculate_current_cost(&mut self) {
        let pricing = self.selected_model_pricing();
        let input = u64::try_from(self.state.input_tokens);
        let output = u64::try_from(self.state.output_tokens);

        self.state.calculation = match (pricing, input, output) {
            (Some(model), Ok(input), Ok(output)) => Some(calculate_cost(input, output, &model)),
            (None, _, _) => {
                debug!(model = %self.state.selected_model, "unknown model, no calculation");
                None
            }
            _ => {
                debug!(
                    input_tokens = self.state.input_tokens,
                    output_tokens = self.state.output_tokens,
                    "negative token count, no calculation"
                );
                None
            }
        };
    }

    // Queries

    pub(crate) fn all_models(&self) -> Vec<ModelPricing> {
        resolve_all(self.catalog, &self.state.custom_pricing)
    }

    pub(crate) fn models_by_provider(&self, provider: Provider) -> Vec<ModelPricing> {
        resolve_by_provider(self.catalog, &self.state.custom_pricing, provider)
    }

    pub(crate) fn selected_model_pricing(&self) -> Option<ModelPricing> {
        resolve_pricing(
            self.catalog,
            &self.state.custom_pricing,
            &self.state.selected_model,
        )
    }

    /// Token counts and currency for cross-model comparisons. Negative counts compare as zero.
    pub(crate) fn compare_input(&self) -> CompareInput {
        CompareInput {
            input_tokens: u64::try_from(self.state.input_tokens).unwrap_or(0),
            output_tokens: u64::try_from(self.state.output_tokens).unwrap_or(0),
            currency: self.state.currency,
            usd_to_inr: self.state.exchange_rates.usd_to_inr,
        }
    }

    /// Convert a USD amount into the current display currency
    pub(crate) fn display_amount(&self, amount_usd: f64) -> f64 {
        convert_currency(
            amount_usd,
            self.state.currency,
            self.state.exchange_rates.usd_to_inr,
        )
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    static NO_AZURE: &[ModelPricing] = &[
        ModelPricing {
            id: "openai-gpt-4o-mini",
            name: "GPT-4o mini",
            input_price: 0.15,
            output_price: 0.60,
            category: "GPT-4o mini",
            provider: Provider::OpenAi,
            context_window: Some(128_000),
            description: None,
        },
        ModelPricing {
            id: "claude-3-haiku",
            name: "Claude 3 Haiku",
            input_price: 0.25,
            output_price: 1.25,
            category: "Claude 3",
            provider: Provider::Anthropic,
            context_window: Some(200_000),
            description: None,
        },
    ];

    fn input_price(p: f64) -> PricingOverride {
        PricingOverride {
            input_price: Some(p),
            output_price: None,
        }
    }

    fn assert_calculation_consistent(store: &CalculatorStore) {
        let expected = match (
            store.selected_model_pricing(),
            u64::try_from(store.input_tokens()),
            u64::try_from(store.output_tokens()),
        ) {
            (Some(m), Ok(i), Ok(o)) => Some(calculate_cost(i, o, &m)),
            _ => None,
        };
        assert_eq!(store.calculation().copied(), expected);
    }

    #[test]
    fn defaults() {
        let store = CalculatorStore::new();
        assert_eq!(store.input_tokens(), 0);
        assert_eq!(store.output_tokens(), 0);
        assert_eq!(store.selected_model(), "openai-gpt-4o-mini");
        assert_eq!(store.selected_provider(), Provider::OpenAi);
        assert_eq!(store.currency(), Currency::Usd);
        assert_eq!(store.exchange_rates().usd_to_inr, 86.0);
        assert!(store.state().custom_pricing.is_empty());
        // valid model and zero tokens: a zero-cost calculation is present
        assert_eq!(store.calculation().unwrap().total_cost, 0.0);
    }

    #[test]
    fn setting_tokens_recomputes() {
        let mut store = CalculatorStore::new();
        store.set_selected_model("openai-gpt-4o");
        store.set_input_tokens(1_000_000);
        store.set_output_tokens(500_000);
        let calc = store.calculation().unwrap();
        assert!((calc.input_cost - 2.5).abs() < 1e-9);
        assert!((calc.output_cost - 5.0).abs() < 1e-9);
        assert!((calc.total_cost - 7.5).abs() < 1e-9);
        assert_calculation_consistent(&store);
    }

    #[test]
    fn negative_tokens_clear_calculation() {
        let mut store = CalculatorStore::new();
        store.set_input_tokens(-1);
        assert!(store.calculation().is_none());
        assert_eq!(store.input_tokens(), -1);

        store.set_input_tokens(10);
        store.set_output_tokens(-5);
        assert!(store.calculation().is_none());

        store.set_output_tokens(5);
        assert!(store.calculation().is_some());
        assert_calculation_consistent(&store);
    }

    #[test]
    fn unknown_model_clears_calculation() {
        let mut store = CalculatorStore::new();
        store.set_input_tokens(1000);
        store.set_selected_model("gpt-9000");
        assert_eq!(store.selected_model(), "gpt-9000");
        assert!(store.calculation().is_none());
        assert!(store.selected_model_pricing().is_none());

        store.set_selected_model("claude-3-haiku");
        assert!(store.calculation().is_some());
    }

    #[test]
    fn switching_provider_selects_first_model() {
        let mut store = CalculatorStore::new();
        store.set_selected_provider(Provider::Anthropic);
        assert_eq!(store.selected_provider(), Provider::Anthropic);
        assert_eq!(store.selected_model(), "claude-opus-4");

        store.set_selected_provider(Provider::Azure);
        assert_eq!(store.selected_model(), "azure-gpt-4o");
        assert_calculation_consistent(&store);
    }

    #[test]
    fn switching_to_empty_provider_keeps_model() {
        let mut store = CalculatorStore::with_catalog(NO_AZURE);
        store.set_selected_model("claude-3-haiku");
        store.set_selected_provider(Provider::Azure);
        assert_eq!(store.selected_provider(), Provider::Azure);
        assert_eq!(store.selected_model(), "claude-3-haiku");
        assert!(store.calculation().is_some());
    }

    #[test]
    fn overlay_law() {
        let mut store = CalculatorStore::new();
        store.update_custom_pricing("claude-sonnet-4", input_price(5.0));
        store.set_selected_model("claude-sonnet-4");

        let resolved = store.selected_model_pricing().unwrap();
        let catalog = CATALOG.iter().find(|m| m.id == "claude-sonnet-4").unwrap();
        assert_eq!(resolved.input_price, 5.0);
        assert_eq!(resolved.output_price, catalog.output_price);
        assert_eq!(resolved.name, catalog.name);
        assert_eq!(resolved.category, catalog.category);
        assert_eq!(resolved.provider, catalog.provider);
        assert_eq!(resolved.context_window, catalog.context_window);
        assert_eq!(resolved.description, catalog.description);
        // catalog itself is untouched
        assert_eq!(catalog.input_price, 3.0);
    }

    #[test]
    fn overrides_merge_across_updates() {
        let mut store = CalculatorStore::new();
        store.update_custom_pricing("openai-gpt-4o", input_price(1.0));
        store.update_custom_pricing(
            "openai-gpt-4o",
            PricingOverride {
                input_price: None,
                output_price: Some(4.0),
            },
        );
        store.set_selected_model("openai-gpt-4o");
        let m = store.selected_model_pricing().unwrap();
        assert_eq!(m.input_price, 1.0);
        assert_eq!(m.output_price, 4.0);
    }

    #[test]
    fn override_on_selected_model_recomputes() {
        let mut store = CalculatorStore::new();
        store.set_input_tokens(2_000_000);
        store.update_custom_pricing("openai-gpt-4o-mini", input_price(1.0));
        assert!((store.calculation().unwrap().total_cost - 2.0).abs() < 1e-9);
        assert_calculation_consistent(&store);
    }

    #[test]
    fn override_on_other_model_leaves_calculation() {
        let mut store = CalculatorStore::new();
        store.set_input_tokens(1_000_000);
        let before = store.calculation().copied();
        store.update_custom_pricing("claude-3-opus", input_price(0.0));
        assert_eq!(store.calculation().copied(), before);
        assert!(store.has_custom_pricing("claude-3-opus"));
    }

    #[test]
    fn override_for_unknown_model_is_noop() {
        let mut store = CalculatorStore::new();
        store.update_custom_pricing("gpt-9000", input_price(1.0));
        assert!(!store.has_custom_pricing("gpt-9000"));
        assert!(store.state().custom_pricing.is_empty());
    }

    #[test]
    fn reset_custom_pricing_reverts_and_is_idempotent() {
        let mut store = CalculatorStore::new();
        store.set_input_tokens(1_000_000);
        store.update_custom_pricing("openai-gpt-4o-mini", input_price(9.0));
        assert!((store.calculation().unwrap().input_cost - 9.0).abs() < 1e-9);

        store.reset_custom_pricing("openai-gpt-4o-mini");
        let once = store.state().clone();
        store.reset_custom_pricing("openai-gpt-4o-mini");
        let twice = store.state();

        assert!(once.custom_pricing.is_empty());
        assert_eq!(once.custom_pricing, twice.custom_pricing);
        assert_eq!(once.calculation, twice.calculation);
        assert!((twice.calculation.unwrap().input_cost - 0.15).abs() < 1e-9);
    }

    #[test]
    fn all_models_overlays_in_catalog_order() {
        let mut store = CalculatorStore::new();
        store.update_custom_pricing("azure-gpt-4-32k", input_price(1.0));
        let all = store.all_models();
        assert_eq!(all.len(), CATALOG.len());
        assert_eq!(all[0].id, CATALOG[0].id);
        let last = all.last().unwrap();
        assert_eq!(last.id, CATALOG[CATALOG.len() - 1].id);
        let overridden = all.iter().find(|m| m.id == "azure-gpt-4-32k").unwrap();
        assert_eq!(overridden.input_price, 1.0);
    }

    #[test]
    fn models_by_provider_filters() {
        let store = CalculatorStore::new();
        let anthropic = store.models_by_provider(Provider::Anthropic);
        assert_eq!(anthropic.len(), 8);
        assert_eq!(anthropic[0].id, "claude-opus-4");
        assert!(anthropic.iter().all(|m| m.provider == Provider::Anthropic));
    }

    #[test]
    fn exchange_rate_stamps_last_updated() {
        let mut store = CalculatorStore::new();
        let before = store.exchange_rates().last_updated;
        store.set_exchange_rate(83.25);
        let rates = store.exchange_rates();
        assert_eq!(rates.usd_to_inr, 83.25);
        assert!(rates.last_updated >= before);

        store.reset_exchange_rate();
        assert_eq!(store.exchange_rates().usd_to_inr, 86.0);
    }

    #[test]
    fn non_positive_rate_is_stored_as_given() {
        let mut store = CalculatorStore::new();
        store.set_exchange_rate(0.0);
        assert_eq!(store.exchange_rates().usd_to_inr, 0.0);
    }

    #[test]
    fn display_amount_follows_currency() {
        let mut store = CalculatorStore::new();
        assert_eq!(store.display_amount(7.5), 7.5);
        store.set_currency(Currency::Inr);
        assert!((store.display_amount(7.5) - 645.0).abs() < 1e-9);
        store.set_exchange_rate(80.0);
        assert_eq!(store.display_amount(2.0), 160.0);
    }

    #[test]
    fn currency_change_keeps_usd_calculation() {
        let mut store = CalculatorStore::new();
        store.set_input_tokens(1_000_000);
        let usd = store.calculation().copied();
        store.set_currency(Currency::Inr);
        assert_eq!(store.calculation().copied(), usd);
    }

    #[test]
    fn compare_input_clamps_negative_tokens() {
        let mut store = CalculatorStore::new();
        store.set_input_tokens(-5);
        store.set_output_tokens(2_000);
        store.set_currency(Currency::Inr);
        let input = store.compare_input();
        assert_eq!(input.input_tokens, 0);
        assert_eq!(input.output_tokens, 2_000);
        assert_eq!(input.currency, Currency::Inr);
        assert_eq!(input.usd_to_inr, 86.0);
    }
}
