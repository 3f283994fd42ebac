//! Lucky Number - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use lucky_number::{Clock, Console, FixedClock, GameSession, SessionConfig, SessionEnd, SystemClock};
use lucky_rules::RngSource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = SessionConfig::load_or_default(&cli.config)?.with_overrides(
        cli.seed,
        cli.current_year,
        cli.no_intro,
    );

    let rng = match config.seed() {
        Some(seed) => {
            info!(seed, "Using seeded number generator");
            StdRng::seed_from_u64(*seed)
        }
        None => StdRng::from_os_rng(),
    };
    let clock: Box<dyn Clock> = match config.current_year() {
        Some(year) => Box::new(FixedClock::new(*year)),
        None => Box::new(SystemClock),
    };

    let mut session = GameSession::new(Console::stdio(), RngSource::new(rng), clock)
        .with_intro(*config.show_intro());

    // Ineligible players and farewells are both ordinary exits.
    match session.run()? {
        SessionEnd::Ineligible { age } => info!(age, "Session ended at the age gate"),
        SessionEnd::Farewell {
            rounds_played,
            rounds_won,
        } => info!(rounds_played, rounds_won, "Session ended by player"),
    }

    Ok(())
}

/// Logs go to stderr so the game transcript on stdout stays clean.
#[instrument]
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
