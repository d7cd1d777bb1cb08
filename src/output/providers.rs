use comfy_table::Color;

use crate::core::{CompareInput, ProviderSummary, compare_providers};
use crate::output::format::{
    DisplayOptions, color_if, cost_json_value, create_styled_table, format_cost, format_tokens,
    header_cell, right_cell, styled_cell,
};
use crate::pricing::{ModelPricing, Provider};

pub(crate) fn print_provider_comparison(
    models: &[ModelPricing],
    providers: &[Provider],
    input: CompareInput,
    options: DisplayOptions,
) {
    let summaries = compare_providers(models, providers, input);
    if summaries.is_empty() {
        if input.has_tokens() {
            println!("No models found for the selected providers.");
        } else {
            println!("Enter token counts with --input/--output to compare providers.");
        }
        return;
    }

    let c = options.use_color;
    let green = color_if(c, Color::Green);
    let cyan = color_if(c, Color::Cyan);
    let currency = input.currency;

    let mut table = create_styled_table();
    let mut header = vec![header_cell("#", c), header_cell("Provider", c)];
    header.push(header_cell("Cheapest Model", c));
    header.push(header_cell("Cost", c));
    if !options.compact {
        header.push(header_cell("Most Expensive", c));
        header.push(header_cell("Models", c));
    }
    table.set_header(header);

    for (rank, summary) in summaries.iter().enumerate() {
        let best = rank == 0;
        let mut provider_name = summary.provider.name.to_string();
        if best {
            provider_name.push_str(" ★");
        }
        let mut row = vec![
            right_cell(&(rank + 1).to_string(), None, false),
            styled_cell(&provider_name, if best { green } else { cyan }, best),
            styled_cell(summary.cheapest.model.name, None, false),
            right_cell(&format_cost(summary.cheapest.total_cost, currency), green, best),
        ];
        if !options.compact {
            let priciest = summary
                .models
                .last()
                .map_or_else(String::new, |m| format_cost(m.total_cost, currency));
            row.push(right_cell(&priciest, None, false));
            row.push(right_cell(&summary.total_models.to_string(), None, false));
        }
        table.add_row(row);
    }

    println!(
        "\n  Provider Comparison ({} input + {} output tokens)\n",
        format_tokens(input.input_tokens),
        format_tokens(input.output_tokens)
    );
    println!("{table}");
    if let Some(winner) = summaries.first() {
        println!(
            "\n  Best value: {} with {} at {}\n",
            winner.provider.name,
            winner.cheapest.model.name,
            format_cost(winner.cheapest.total_cost, currency)
        );
    }
}

fn summary_json(rank: usize, summary: &ProviderSummary) -> serde_json::Value {
    serde_json::json!({
        "rank": rank + 1,
        "provider": summary.provider,
        "cheapest_model": summary.cheapest.model.id,
        "cheapest_model_name": summary.cheapest.model.name,
        "total_cost": cost_json_value(summary.cheapest.total_cost),
        "total_models": summary.total_models,
    })
}

pub(crate) fn output_provider_comparison_json(
    models: &[ModelPricing],
    providers: &[Provider],
    input: CompareInput,
) -> String {
    let output: Vec<serde_json::Value> = compare_providers(models, providers, input)
        .iter()
        .enumerate()
        .map(|(rank, summary)| summary_json(rank, summary))
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize JSON output: {e}");
        "[]".to_string()
    })
}
