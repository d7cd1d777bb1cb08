use comfy_table::Color;

use crate::core::CalculatorStore;
use crate::output::format::{
    DisplayOptions, color_if, create_styled_table, format_context_window, format_unit_price,
    header_cell, right_cell, styled_cell,
};
use crate::pricing::{ModelPricing, Provider};

fn listed_models(store: &CalculatorStore, provider: Option<Provider>) -> Vec<ModelPricing> {
    match provider {
        Some(p) => store.models_by_provider(p),
        None => store.all_models(),
    }
}

/// Catalog listing with effective (override-aware) prices
pub(crate) fn print_models(
    store: &CalculatorStore,
    provider: Option<Provider>,
    options: DisplayOptions,
) {
    let models = listed_models(store, provider);
    if models.is_empty() {
        println!("No models found.");
        return;
    }

    let c = options.use_color;
    let green = color_if(c, Color::Green);
    let yellow = color_if(c, Color::Yellow);
    let dim = color_if(c, Color::DarkGrey);

    let mut table = create_styled_table();
    let mut header = vec![header_cell("Model ID", c), header_cell("Name", c)];
    if provider.is_none() {
        header.push(header_cell("Provider", c));
    }
    header.push(header_cell("Input /1M", c));
    header.push(header_cell("Output /1M", c));
    if !options.compact {
        header.push(header_cell("Context", c));
        header.push(header_cell("Category", c));
    }
    table.set_header(header);

    for model in &models {
        let selected = model.id == store.selected_model();
        let custom = store.has_custom_pricing(model.id);
        let price_color = if custom { yellow } else { None };

        let mut id = model.id.to_string();
        if selected {
            id.push_str(" ◀");
        }
        let mut row = vec![
            styled_cell(&id, if selected { green } else { None }, selected),
            styled_cell(model.name, None, false),
        ];
        if provider.is_none() {
            row.push(styled_cell(model.provider.display_name(), dim, false));
        }
        row.push(right_cell(&format_unit_price(model.input_price), price_color, custom));
        row.push(right_cell(&format_unit_price(model.output_price), price_color, custom));
        if !options.compact {
            row.push(right_cell(&format_context_window(model.context_window), None, false));
            row.push(styled_cell(model.category, dim, false));
        }
        table.add_row(row);
    }

    let title = provider.map_or("All providers", Provider::display_name);
    println!("\n  Models: {title}\n");
    println!("{table}");
    println!("\n  Prices are USD per 1M tokens. ◀ selected model");
    if models.iter().any(|m| store.has_custom_pricing(m.id)) {
        println!("  Highlighted prices are custom overrides.");
    }
    println!();
}

pub(crate) fn output_models_json(store: &CalculatorStore, provider: Option<Provider>) -> String {
    let output: Vec<serde_json::Value> = listed_models(store, provider)
        .iter()
        .map(|model| {
            serde_json::json!({
                "id": model.id,
                "name": model.name,
                "provider": model.provider,
                "category": model.category,
                "input_price": model.input_price,
                "output_price": model.output_price,
                "context_window": model.context_window,
                "description": model.description,
                "custom_pricing": store.has_custom_pricing(model.id),
                "selected": model.id == store.selected_model(),
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize JSON output: {e}");
        "[]".to_string()
    })
}
