//! Core module - calculator state and derived comparisons

mod comparison;
mod store;

pub(crate) use comparison::{
    CompareInput, ModelComparison, ModelCost, ProviderSummary, compare_providers,
};
pub(crate) use store::CalculatorStore;
