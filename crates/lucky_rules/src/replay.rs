//! Parsing the "play again?" answer.

use std::str::FromStr;
use tracing::instrument;

/// Player's answer to the replay prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive)]
pub enum ReplayChoice {
    /// Deal a new round for the same player.
    #[strum(serialize = "y")]
    Yes,
    /// Say goodbye and end the session.
    #[strum(serialize = "n")]
    No,
}

/// Error raised while reading the replay answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ReplayError {
    /// The answer was neither `y` nor `n`.
    #[display("Invalid input. Enter 'y' for Yes or 'n' for No.")]
    InvalidReplayChoice,
}

/// Parses a replay answer, ignoring surrounding whitespace and case.
#[instrument]
pub fn parse_replay_choice(raw: &str) -> Result<ReplayChoice, ReplayError> {
    ReplayChoice::from_str(raw.trim()).map_err(|_| ReplayError::InvalidReplayChoice)
}
