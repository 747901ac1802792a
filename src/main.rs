//! legible - readability highlighting for markdown documents
//!
//! This is the main entry point. It parses CLI arguments, builds the
//! configuration and delegates to the report or terminal runner.

mod cli;
mod run;

use clap::Parser;
use legible::config::Config;
use legible::user_config;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("LEGIBLE_LOG", "warn")).init();

    // Parse command line arguments
    let cli = cli::Cli::parse();

    // Load configuration
    let mut config = Config::default();
    user_config::configure(&mut config);

    // Apply CLI overrides
    cli.apply_to_config(&mut config);

    // Reject bad settings before touching the terminal
    config.readability_settings()?;

    let documents = run::load_documents(&cli)?;

    match run::detect_mode(&cli) {
        run::OutputMode::Report => run::run_report_mode(&documents, &config)?,
        run::OutputMode::Terminal => run::run_terminal_mode(documents, &config)?,
    }

    Ok(())
}
