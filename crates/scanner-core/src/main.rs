mod app;
mod cli;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cli::{Cli, Commands};
use config::ScanConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let config = ScanConfig::load(cli.model, cli.verbose);

    match cli.command.unwrap_or(Commands::Interactive) {
        // Feature display needs no model.
        Commands::Features { url } => {
            print!("{}", app::format_features(url.trim()));
        }
        Commands::Scan { url } => {
            let engine = app::load_engine(&config)?;
            app::run_scan(&engine, &url, config.verbose);
        }
        Commands::ModelInfo => {
            let engine = app::load_engine(&config)?;
            app::print_model_info(&engine);
        }
        Commands::Interactive => {
            let engine = app::load_engine(&config)?;
            info!(
                model_id = %engine.model_id(),
                model_version = %engine.model_version(),
                path = %config.model_path.display(),
                "model loaded"
            );
            app::run_interactive(&engine, config.verbose)?;
        }
    }

    Ok(())
}
