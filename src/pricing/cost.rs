use crate::consts::TOKENS_PER_MILLION;

use super::types::{CostCalculation, ModelPricing};

/// Cost of a request in USD from per-million-token prices.
pub(crate) fn calculate_cost(
    input_tokens: u64,
    output_tokens: u64,
    model: &ModelPricing,
) -> CostCalculation {
    let input_cost = input_tokens as f64 / TOKENS_PER_MILLION * model.input_price;
    let output_cost = output_tokens as f64 / TOKENS_PER_MILLION * model.output_price;

    CostCalculation {
        input_tokens,
        output_tokens,
        model: *model,
        input_cost,
        output_cost,
        total_cost: input_cost + output_cost,
    }
}

/// Share of `total` taken by `part`, in percent. 0 when there is no total yet.
pub(crate) fn calculate_percentage(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    part / total * 100.0
}

/// Total ordering for costs with NaN sorted last
pub(crate) fn compare_cost(a: f64, b: f64) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    if a.is_nan() && b.is_nan() {
        Ordering::Equal
    } else if a.is_nan() {
        Ordering::Greater
    } else if b.is_nan() {
        Ordering::Less
    } else {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}
