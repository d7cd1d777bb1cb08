use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::currency::Currency;

/// Rendering switches shared by every table
#[derive(Debug, Clone, Copy)]
pub(crate) struct DisplayOptions {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
}

/// Format a cost with tiered precision so tiny per-token costs stay visible.
///
/// USD: `<0.01` → 6 decimals, `<1` → 4, otherwise 2.
/// INR: `<1` → 4 decimals, `<100` → 2, otherwise 2 with Indian digit grouping.
pub(crate) fn format_cost(amount: f64, currency: Currency) -> String {
    if amount.is_nan() {
        return "N/A".to_string();
    }
    let symbol = currency.symbol();
    match currency {
        Currency::Usd => {
            if amount < 0.01 {
                format!("{symbol}{amount:.6}")
            } else if amount < 1.0 {
                format!("{symbol}{amount:.4}")
            } else {
                format!("{symbol}{amount:.2}")
            }
        }
        Currency::Inr => {
            if amount < 1.0 {
                format!("{symbol}{amount:.4}")
            } else if amount < 100.0 {
                format!("{symbol}{amount:.2}")
            } else {
                format!("{symbol}{}", group_indian(&format!("{amount:.2}")))
            }
        }
    }
}

/// Insert Indian-style separators into a plain decimal string: the last three
/// integer digits form one group, the rest are grouped in pairs.
fn group_indian(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || int_part.len() <= 3 {
        return plain.to_string();
    }

    let (head, tail) = int_part.split_at(int_part.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = format!("{sign}{},{tail}", groups.join(","));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Short token count: `2.50M`, `1.5K`, `500`
pub(crate) fn format_tokens(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.2}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Full token count with thousands separators
pub(crate) fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Catalog price per million tokens, always in USD
pub(crate) fn format_unit_price(price: f64) -> String {
    format!("${price:.2}")
}

pub(crate) fn format_context_window(context_window: Option<u32>) -> String {
    match context_window {
        Some(cw) => format!("{:.0}K", f64::from(cw) / 1000.0),
        None => "N/A".to_string(),
    }
}

pub(crate) fn cost_json_value(cost: f64) -> serde_json::Value {
    if cost.is_nan() {
        serde_json::Value::Null
    } else {
        serde_json::json!(cost)
    }
}

pub(crate) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(crate) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(crate) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    styled_cell(text, color, bold).set_alignment(CellAlignment::Right)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(crate) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

pub(crate) fn color_if(use_color: bool, color: Color) -> Option<Color> {
    use_color.then_some(color)
}
