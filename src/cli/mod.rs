pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::{Cli, validate_price};
pub(crate) use commands::Commands;
