use comfy_table::{Cell, Color};

use crate::core::CalculatorStore;
use crate::currency::Currency;
use crate::output::format::{
    DisplayOptions, color_if, cost_json_value, create_styled_table, format_cost, format_number,
    format_tokens, format_unit_price, header_cell, right_cell, styled_cell,
};
use crate::pricing::{CostCalculation, calculate_percentage};

/// Converted amounts for one calculation
struct Converted {
    input: f64,
    output: f64,
    total: f64,
}

fn convert(store: &CalculatorStore, calc: &CostCalculation) -> Converted {
    Converted {
        input: store.display_amount(calc.input_cost),
        output: store.display_amount(calc.output_cost),
        total: store.display_amount(calc.total_cost),
    }
}

fn print_no_calculation(store: &CalculatorStore) {
    if store.selected_model_pricing().is_none() {
        println!(
            "Unknown model \"{}\". Run `aicost models` to list available models.",
            store.selected_model()
        );
    } else {
        println!(
            "Invalid token counts (input {}, output {}). Token counts must be non-negative.",
            store.input_tokens(),
            store.output_tokens()
        );
    }
}

pub(crate) fn print_breakdown(store: &CalculatorStore, options: DisplayOptions) {
    let Some(calc) = store.calculation() else {
        print_no_calculation(store);
        return;
    };
    if calc.total_tokens() == 0 {
        println!("Enter token counts with --input/--output to see a cost breakdown.");
        return;
    }

    let currency = store.currency();
    let amounts = convert(store, calc);
    let input_share = calculate_percentage(calc.input_cost, calc.total_cost);
    let output_share = calculate_percentage(calc.output_cost, calc.total_cost);
    let total_share = calculate_percentage(calc.total_cost, calc.total_cost);

    let c = options.use_color;
    let cyan = color_if(c, Color::Cyan);
    let green = color_if(c, Color::Green);

    let mut table = create_styled_table();
    if options.compact {
        table.set_header(vec![
            header_cell("Item", c),
            header_cell("Tokens", c),
            header_cell("Cost", c),
        ]);
    } else {
        table.set_header(vec![
            header_cell("Item", c),
            header_cell("Tokens", c),
            header_cell("Price /1M", c),
            header_cell("Cost", c),
            header_cell("Share", c),
        ]);
    }

    let rows = [
        ("Input", calc.input_tokens, calc.model.input_price, amounts.input, input_share),
        ("Output", calc.output_tokens, calc.model.output_price, amounts.output, output_share),
    ];
    for (label, tokens, price, cost, share) in rows {
        let mut row = vec![Cell::new(label), right_cell(&format_number(tokens), None, false)];
        if !options.compact {
            row.push(right_cell(&format_unit_price(price), None, false));
        }
        row.push(right_cell(&format_cost(cost, currency), green, false));
        if !options.compact {
            row.push(right_cell(&format!("{share:.1}%"), None, false));
        }
        table.add_row(row);
    }

    let mut total_row = vec![
        styled_cell("TOTAL", cyan, true),
        right_cell(&format_number(calc.total_tokens()), cyan, true),
    ];
    if !options.compact {
        total_row.push(Cell::new(""));
    }
    total_row.push(right_cell(&format_cost(amounts.total, currency), green, true));
    if !options.compact {
        total_row.push(right_cell(&format!("{total_share:.1}%"), cyan, true));
    }
    table.add_row(total_row);

    let custom = if store.has_custom_pricing(calc.model.id) {
        " [custom pricing]"
    } else {
        ""
    };
    println!(
        "\n  Cost Breakdown: {} ({}){}\n",
        calc.model.name,
        calc.model.provider.display_name(),
        custom
    );
    println!("{table}");

    if !options.compact {
        print_formula(store, calc, &amounts);
    }
    println!(
        "\n  Total cost for {} tokens: {}\n",
        format_tokens(calc.total_tokens()),
        format_cost(amounts.total, currency)
    );
}

fn print_formula(store: &CalculatorStore, calc: &CostCalculation, amounts: &Converted) {
    let currency = store.currency();
    println!(
        "\n  Input Cost  = {} ÷ 1,000,000 × {} = {}",
        format_tokens(calc.input_tokens),
        format_unit_price(calc.model.input_price),
        format_cost(amounts.input, currency)
    );
    println!(
        "  Output Cost = {} ÷ 1,000,000 × {} = {}",
        format_tokens(calc.output_tokens),
        format_unit_price(calc.model.output_price),
        format_cost(amounts.output, currency)
    );
    println!(
        "  Total Cost  = {} + {} = {}",
        format_cost(amounts.input, currency),
        format_cost(amounts.output, currency),
        format_cost(amounts.total, currency)
    );
    if currency == Currency::Inr {
        println!(
            "  (Converted from USD at rate: 1 USD = {}{})",
            currency.symbol(),
            store.exchange_rates().usd_to_inr
        );
    }
}

pub(crate) fn output_breakdown_json(store: &CalculatorStore) -> String {
    let currency = store.currency();
    let calculation = store.calculation().map(|calc| {
        let amounts = convert(store, calc);
        serde_json::json!({
            "model": calc.model,
            "custom_pricing": store.has_custom_pricing(calc.model.id),
            "input_tokens": calc.input_tokens,
            "output_tokens": calc.output_tokens,
            "total_tokens": calc.total_tokens(),
            "input_cost_usd": cost_json_value(calc.input_cost),
            "output_cost_usd": cost_json_value(calc.output_cost),
            "total_cost_usd": cost_json_value(calc.total_cost),
            "input_cost": cost_json_value(amounts.input),
            "output_cost": cost_json_value(amounts.output),
            "total_cost": cost_json_value(amounts.total),
            "formatted_total": format_cost(amounts.total, currency),
            "input_percentage": calculate_percentage(calc.input_cost, calc.total_cost),
            "output_percentage": calculate_percentage(calc.output_cost, calc.total_cost),
        })
    });

    let output = serde_json::json!({
        "selected_model": store.selected_model(),
        "provider": store.selected_provider(),
        "currency": currency,
        "usd_to_inr": store.exchange_rates().usd_to_inr,
        "calculation": calculation,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize JSON output: {e}");
        "{}".to_string()
    })
}
