//! Command-line interface for lucky_number.

use clap::Parser;

/// Lucky Number - guess the lucky number before the list runs out
#[derive(Parser, Debug)]
#[command(name = "lucky_number")]
#[command(about = "Console lucky-number guessing game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an optional TOML config file
    #[arg(short, long, default_value = "lucky_number.toml")]
    pub config: std::path::PathBuf,

    /// Seed the number generator for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Calendar year to compute the player's age against (1900-9999)
    #[arg(long, value_parser = clap::value_parser!(i32).range(1900..=9999))]
    pub current_year: Option<i32>,

    /// Skip the welcome text and rules
    #[arg(long)]
    pub no_intro: bool,
}
