use comfy_table::{Cell, Color};

use crate::core::{CompareInput, ModelComparison, ModelCost};
use crate::output::format::{
    DisplayOptions, color_if, cost_json_value, create_styled_table, format_context_window,
    format_cost, format_tokens, format_unit_price, header_cell, right_cell, styled_cell,
};
use crate::pricing::ModelPricing;

fn ratio_text(comparison: &ModelComparison, cost: &ModelCost) -> String {
    match comparison.ratio_vs_cheapest(cost) {
        Some(ratio) => format!("{ratio:.1}x"),
        None => "N/A".to_string(),
    }
}

pub(crate) fn print_comparison(
    models: &[ModelPricing],
    input: CompareInput,
    selected_model: &str,
    options: DisplayOptions,
) {
    let Some(comparison) = ModelComparison::build(models, input) else {
        println!("Enter token counts with --input/--output to compare models.");
        return;
    };

    let c = options.use_color;
    let cyan = color_if(c, Color::Cyan);
    let green = color_if(c, Color::Green);
    let yellow = color_if(c, Color::Yellow);
    let currency = input.currency;

    let mut table = create_styled_table();
    let mut header = vec![header_cell("Model", c)];
    if !options.compact {
        header.push(header_cell("Input /1M", c));
        header.push(header_cell("Output /1M", c));
        header.push(header_cell("Context", c));
    }
    header.push(header_cell("Total Cost", c));
    header.push(header_cell("vs Cheapest", c));
    let columns = header.len();
    table.set_header(header);

    for group in &comparison.groups {
        let best_name = group.best().map_or("", |b| b.model.name);
        let mut group_row = vec![styled_cell(
            &format!("{} (Best: {})", group.provider.display_name(), best_name),
            cyan,
            true,
        )];
        group_row.extend((1..columns).map(|_| Cell::new("")));
        table.add_row(group_row);

        for (idx, cost) in group.models.iter().enumerate() {
            let mut name = format!("  {}", cost.model.name);
            if comparison.is_overall_best(cost) {
                name.push_str(" ★ Best");
            } else if idx == 0 {
                name.push_str(" ✓");
            }
            if cost.model.id == selected_model {
                name.push_str(" ◀");
            }
            let name_color = if comparison.is_overall_best(cost) {
                green
            } else {
                None
            };

            let mut row = vec![styled_cell(&name, name_color, idx == 0)];
            if !options.compact {
                row.push(right_cell(&format_unit_price(cost.model.input_price), None, false));
                row.push(right_cell(&format_unit_price(cost.model.output_price), None, false));
                row.push(right_cell(
                    &format_context_window(cost.model.context_window),
                    None,
                    false,
                ));
            }
            row.push(right_cell(&format_cost(cost.total_cost, currency), green, false));
            row.push(right_cell(&ratio_text(&comparison, cost), yellow, false));
            table.add_row(row);
        }
    }

    println!(
        "\n  Model Comparison ({} input + {} output tokens)\n",
        format_tokens(input.input_tokens),
        format_tokens(input.output_tokens)
    );
    println!("{table}");

    let cheapest = comparison.cheapest();
    let priciest = comparison.most_expensive();
    println!(
        "\n  Cheapest:       {} ({}) {}",
        cheapest.model.name,
        cheapest.model.provider.display_name(),
        format_cost(cheapest.total_cost, currency)
    );
    println!(
        "  Most expensive: {} ({}) {} ({})",
        priciest.model.name,
        priciest.model.provider.display_name(),
        format_cost(priciest.total_cost, currency),
        ratio_text(&comparison, priciest)
    );
    println!("\n  {} models compared\n", comparison.ranked.len());
}

fn model_cost_json(comparison: &ModelComparison, cost: &ModelCost) -> serde_json::Value {
    serde_json::json!({
        "model": cost.model.id,
        "name": cost.model.name,
        "provider": cost.model.provider,
        "input_price": cost.model.input_price,
        "output_price": cost.model.output_price,
        "input_cost": cost_json_value(cost.input_cost),
        "output_cost": cost_json_value(cost.output_cost),
        "total_cost": cost_json_value(cost.total_cost),
        "ratio_vs_cheapest": comparison.ratio_vs_cheapest(cost),
        "best_overall": comparison.is_overall_best(cost),
    })
}

/// Ranked model costs, cheapest first. `[]` when there is nothing to compare.
pub(crate) fn output_comparison_json(models: &[ModelPricing], input: CompareInput) -> String {
    let output: Vec<serde_json::Value> = match ModelComparison::build(models, input) {
        Some(comparison) => comparison
            .ranked
            .iter()
            .map(|cost| model_cost_json(&comparison, cost))
            .collect(),
        None => Vec::new(),
    };

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize JSON output: {e}");
        "[]".to_string()
    })
}
