//! Typeahead person picker - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Typeahead - search-as-you-type person picker for the terminal
#[derive(Parser, Debug)]
#[command(name = "typeahead")]
#[command(version)]
#[command(about = "Search-as-you-type picker over a list of people")]
pub struct Args {
    /// JSON file with the candidate list (bundled dataset if not provided)
    #[arg(short, long)]
    pub candidates: Option<PathBuf>,

    /// Quiet period in milliseconds before typed text is filtered
    #[arg(long, allow_negative_numbers = true)]
    pub debounce_ms: Option<i64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = typeahead::config::load_config_with_precedence(args.config.clone())?;
        let merged = typeahead::config::merge_config(config_file)?;
        let with_env = typeahead::config::apply_env_overrides(merged)?;
        typeahead::config::apply_cli_overrides(with_env, args.debounce_ms, args.candidates.clone())?
    };

    typeahead::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let candidates = typeahead::source::load_candidates(config.candidates_path.as_deref())?;

    let cli_args = typeahead::view::CliArgs {
        debounce_delay: config.debounce_delay,
        color: typeahead::view::ColorConfig::from_env_and_args(args.no_color),
    };

    typeahead::view::run_with_candidates(candidates, cli_args)?;

    Ok(())
}
