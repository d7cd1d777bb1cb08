mod app;
mod cli;
mod config;
mod consts;
mod core;
mod currency;
mod error;
mod output;
mod pricing;

use clap::Parser;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

use app::{CommandContext, build_store, handle_command};
use cli::Cli;
use config::Config;
use output::DisplayOptions;

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn log_filter(debug: bool) -> EnvFilter {
    let level = if debug { "debug" } else { "warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("aicost={level}")))
}

/// Logs go to stderr so stdout stays clean for tables and JSON.
fn init_tracing(debug: bool) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(log_filter(debug));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
    handle
}

fn main() {
    let cli = Cli::parse();
    // Started before config loading so config problems are logged; `debug = true`
    // in the config raises the level afterwards.
    let log_handle = init_tracing(cli.debug);

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let explicit_provider = cli.provider;
    let cli = cli.with_config(&config);
    if cli.debug
        && let Err(e) = log_handle.reload(log_filter(true))
    {
        tracing::warn!("Failed to enable debug logging: {e}");
    }

    let store = match build_store(&cli, &config) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let ctx = CommandContext {
        cli: &cli,
        store: &store,
        options: DisplayOptions {
            use_color: cli.use_color(),
            compact: cli.compact,
        },
        explicit_provider,
    };
    handle_command(cli.command.as_ref(), &ctx);
}
