use chrono::Local;
use comfy_table::Color;

use crate::consts::{DATETIME_FORMAT, DEFAULT_USD_TO_INR_RATE};
use crate::currency::{Currency, ExchangeRates};
use crate::output::format::{
    DisplayOptions, color_if, create_styled_table, format_cost, header_cell, right_cell,
    styled_cell,
};

pub(crate) fn print_currencies(active: Currency, rates: ExchangeRates, options: DisplayOptions) {
    let c = options.use_color;
    let green = color_if(c, Color::Green);

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Code", c),
        header_cell("Symbol", c),
        header_cell("Name", c),
        header_cell("1 USD =", c),
    ]);
    for currency in Currency::ALL {
        let info = currency.info();
        let is_active = currency == active;
        let rate = match currency {
            Currency::Usd => 1.0,
            Currency::Inr => rates.usd_to_inr,
        };
        let mut code = info.code.to_string();
        if is_active {
            code.push_str(" ◀");
        }
        table.add_row(vec![
            styled_cell(&code, if is_active { green } else { None }, is_active),
            styled_cell(info.symbol, None, false),
            styled_cell(info.name, None, false),
            right_cell(&format_cost(rate, currency), None, false),
        ]);
    }

    println!("\n  Currencies\n");
    println!("{table}");
    println!(
        "\n  Exchange rate last updated: {}",
        rates
            .last_updated
            .with_timezone(&Local)
            .format(DATETIME_FORMAT)
    );
    if !options.compact && rates.usd_to_inr != DEFAULT_USD_TO_INR_RATE {
        println!(
            "  Default rate is {}; set with --rate or usd_to_inr in config.",
            format_cost(DEFAULT_USD_TO_INR_RATE, Currency::Inr)
        );
    }
    println!();
}

pub(crate) fn output_currencies_json(active: Currency, rates: ExchangeRates) -> String {
    let output = serde_json::json!({
        "active": active,
        "currencies": Currency::ALL.iter().map(|c| c.info()).collect::<Vec<_>>(),
        "usd_to_inr": rates.usd_to_inr,
        "last_updated": rates.last_updated.to_rfc3339(),
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize JSON output: {e}");
        "{}".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn json_lists_currencies_and_rate() {
        let rates = ExchangeRates {
            usd_to_inr: 83.25,
            ..ExchangeRates::default()
        };
        let json: Value =
            serde_json::from_str(&output_currencies_json(Currency::Inr, rates)).unwrap();
        assert_eq!(json["active"], "INR");
        assert_eq!(json["usd_to_inr"].as_f64(), Some(83.25));
        let codes: Vec<&str> = json["currencies"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["code"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["USD", "INR"]);
        assert!(json["last_updated"].as_str().is_some());
    }
}
