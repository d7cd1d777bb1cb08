use tracing::debug;

use crate::cli::{Cli, Commands, validate_price};
use crate::config::Config;
use crate::core::CalculatorStore;
use crate::currency::validate_rate;
use crate::error::AppError;
use crate::output::{
    DisplayOptions, output_breakdown_json, output_comparison_json, output_currencies_json,
    output_models_json, output_provider_comparison_json, print_breakdown, print_comparison,
    print_currencies, print_models, print_provider_comparison,
};
use crate::pricing::{PricingOverride, Provider};

fn print_json(json: &str) {
    println!("{json}");
}

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) store: &'a CalculatorStore,
    pub(crate) options: DisplayOptions,
    /// `-p` as given on the command line, before config defaults are merged
    pub(crate) explicit_provider: Option<Provider>,
}

fn token_count(tokens: u64) -> Result<i64, AppError> {
    i64::try_from(tokens).map_err(|_| AppError::InvalidTokenCount {
        input: tokens.to_string(),
    })
}

/// Build the calculator from config and flags. Later steps win: config
/// overrides, then currency and rate, then provider, model, ad-hoc prices and tokens.
pub(crate) fn build_store(cli: &Cli, config: &Config) -> Result<CalculatorStore, AppError> {
    let mut store = CalculatorStore::new();

    for (model_id, price) in &config.pricing {
        if let Some(p) = price.input_price {
            validate_price(p)?;
        }
        if let Some(p) = price.output_price {
            validate_price(p)?;
        }
        store.update_custom_pricing(model_id, *price);
    }
    for model_id in &cli.reset_pricing {
        store.reset_custom_pricing(model_id);
    }

    if let Some(currency) = cli.currency {
        store.set_currency(currency);
    }
    if cli.default_rate {
        store.reset_exchange_rate();
    } else if let Some(rate) = cli.rate {
        store.set_exchange_rate(validate_rate(rate)?);
    }

    if let Some(provider) = cli.provider {
        store.set_selected_provider(provider);
    }
    if let Some(model) = &cli.model {
        store.set_selected_model(model);
    }

    let ad_hoc = PricingOverride {
        input_price: cli.input_price,
        output_price: cli.output_price,
    };
    if !ad_hoc.is_empty() {
        let model_id = store.selected_model().to_string();
        store.update_custom_pricing(&model_id, ad_hoc);
    }

    if let Some(input) = cli.input {
        store.set_input_tokens(token_count(input)?);
    }
    if let Some(output) = cli.output {
        store.set_output_tokens(token_count(output)?);
    }

    debug!(state = ?store.state(), "calculator ready");
    Ok(store)
}

fn handle_calc(ctx: &CommandContext<'_>) {
    if ctx.cli.json {
        print_json(&output_breakdown_json(ctx.store));
    } else {
        print_breakdown(ctx.store, ctx.options);
    }
}

fn handle_compare(ctx: &CommandContext<'_>) {
    let models = ctx.store.all_models();
    let input = ctx.store.compare_input();
    if ctx.cli.json {
        print_json(&output_comparison_json(&models, input));
    } else {
        print_comparison(&models, input, ctx.store.selected_model(), ctx.options);
    }
}

fn handle_providers(only: &[Provider], ctx: &CommandContext<'_>) {
    let providers = Commands::provider_filter(only);
    let models = ctx.store.all_models();
    let input = ctx.store.compare_input();
    if ctx.cli.json {
        print_json(&output_provider_comparison_json(&models, &providers, input));
    } else {
        print_provider_comparison(&models, &providers, input, ctx.options);
    }
}

/// Only an explicit `-p` narrows the listing; a configured provider does not.
fn handle_models(ctx: &CommandContext<'_>) {
    if ctx.cli.json {
        print_json(&output_models_json(ctx.store, ctx.explicit_provider));
    } else {
        print_models(ctx.store, ctx.explicit_provider, ctx.options);
    }
}

fn handle_currencies(ctx: &CommandContext<'_>) {
    let currency = ctx.store.currency();
    let rates = ctx.store.exchange_rates();
    if ctx.cli.json {
        print_json(&output_currencies_json(currency, rates));
    } else {
        print_currencies(currency, rates, ctx.options);
    }
}

/// Dispatch a subcommand; no subcommand means `calc`
pub(crate) fn handle_command(command: Option<&Commands>, ctx: &CommandContext<'_>) {
    match command {
        None | Some(Commands::Calc) => handle_calc(ctx),
        Some(Commands::Compare) => handle_compare(ctx),
        Some(Commands::Providers { only }) => handle_providers(only, ctx),
        Some(Commands::Models) => handle_models(ctx),
        Some(Commands::Currencies) => handle_currencies(ctx),
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::currency::Currency;
    use clap::Parser;

    fn store_for(args: &[&str], config_toml: &str) -> Result<CalculatorStore, AppError> {
        let config: Config = toml::from_str(config_toml).unwrap();
        let cli = Cli::parse_from(args).with_config(&config);
        build_store(&cli, &config)
    }

    #[test]
    fn defaults_without_flags() {
        let store = store_for(&["aicost"], "").unwrap();
        assert_eq!(store.selected_model(), "openai-gpt-4o-mini");
        assert_eq!(store.currency(), Currency::Usd);
        assert_eq!(store.calculation().unwrap().total_cost, 0.0);
    }

    #[test]
    fn flags_drive_the_calculation() {
        let store = store_for(
            &["aicost", "-m", "openai-gpt-4o", "-i", "1M", "-o", "500K", "--currency", "inr"],
            "",
        )
        .unwrap();
        let calc = store.calculation().unwrap();
        assert!((calc.total_cost - 7.5).abs() < 1e-9);
        assert!((store.display_amount(calc.total_cost) - 645.0).abs() < 1e-9);
    }

    #[test]
    fn provider_then_model() {
        let store = store_for(&["aicost", "-p", "anthropic"], "").unwrap();
        assert_eq!(store.selected_model(), "claude-opus-4");
        let store = store_for(&["aicost", "-p", "anthropic", "-m", "claude-3-haiku"], "").unwrap();
        assert_eq!(store.selected_model(), "claude-3-haiku");
        assert_eq!(store.selected_provider(), Provider::Anthropic);
    }

    #[test]
    fn cli_provider_replaces_configured_model() {
        let config = "provider = \"openai\"\nmodel = \"openai-gpt-4o\"\n";
        let store = store_for(&["aicost", "-p", "anthropic"], config).unwrap();
        assert_eq!(store.selected_provider(), Provider::Anthropic);
        assert_eq!(store.selected_model(), "claude-opus-4");

        let store = store_for(&["aicost", "-m", "claude-3-haiku"], config).unwrap();
        assert_eq!(store.selected_model(), "claude-3-haiku");

        let store = store_for(&["aicost"], config).unwrap();
        assert_eq!(store.selected_model(), "openai-gpt-4o");
    }

    #[test]
    fn model_only_config_is_ignored_with_cli_provider() {
        let store = store_for(&["aicost", "-p", "azure"], "model = \"claude-3-haiku\"\n").unwrap();
        assert_eq!(store.selected_model(), "azure-gpt-4o");
    }

    #[test]
    fn token_count_rejects_values_above_i64_max() {
        assert_eq!(token_count(1_000).unwrap(), 1_000);
        assert_eq!(token_count(i64::MAX as u64).unwrap(), i64::MAX);
        let err = token_count(u64::MAX).unwrap_err();
        assert!(matches!(err, AppError::InvalidTokenCount { .. }));
    }

    #[test]
    fn ad_hoc_prices_merge_onto_config_override() {
        let store = store_for(
            &["aicost", "-m", "openai-gpt-4o", "--output-price", "4", "-i", "1M", "-o", "1M"],
            "[pricing.\"openai-gpt-4o\"]\ninput_price = 1.0\n",
        )
        .unwrap();
        let model = store.selected_model_pricing().unwrap();
        assert_eq!(model.input_price, 1.0);
        assert_eq!(model.output_price, 4.0);
        assert!((store.calculation().unwrap().total_cost - 5.0).abs() < 1e-9);
    }

    #[test]
    fn reset_pricing_drops_config_override() {
        let store = store_for(
            &["aicost", "-m", "openai-gpt-4o", "--reset-pricing", "openai-gpt-4o"],
            "[pricing.\"openai-gpt-4o\"]\ninput_price = 1.0\n",
        )
        .unwrap();
        assert!(!store.has_custom_pricing("openai-gpt-4o"));
        assert_eq!(store.selected_model_pricing().unwrap().input_price, 2.5);
    }

    #[test]
    fn config_rate_is_validated() {
        let err = store_for(&["aicost"], "usd_to_inr = 0.0").unwrap_err();
        assert!(matches!(err, AppError::InvalidExchangeRate { .. }));
        let store = store_for(&["aicost", "--default-rate"], "usd_to_inr = 0.0").unwrap();
        assert_eq!(store.exchange_rates().usd_to_inr, 86.0);
    }

    #[test]
    fn negative_config_price_is_rejected() {
        let err = store_for(&["aicost"], "[pricing.\"claude-3-haiku\"]\ninput_price = -1.0\n")
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidPrice { .. }));
    }
}
