//! Age computation and the eligibility gate.

use super::identity::Birthdate;
use tracing::{info, instrument};

/// Minimum age allowed to play.
pub const MINIMUM_AGE: i32 = 18;

/// Result of the eligibility gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Eligibility {
    /// Player may continue; carries the unchanged age.
    #[display("Eligible at age {_0}")]
    Eligible(i32),
    /// Player is too young. The session must end.
    #[display("You must be 18 years or older to play this game.\nExiting the game.")]
    Ineligible(i32),
}

impl Eligibility {
    /// Returns the age the gate was evaluated for.
    pub fn age(&self) -> i32 {
        match self {
            Eligibility::Eligible(age) | Eligibility::Ineligible(age) => *age,
        }
    }

    /// Returns true if the player may play.
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible(_))
    }
}

/// Computes age as the difference between `current_year` and the birth year.
///
/// Month and day are ignored, so a player turning 18 later this year already
/// counts as 18. Saturates instead of overflowing on extreme years.
#[instrument(skip(birthdate), fields(birth_year = birthdate.year()))]
pub fn compute_age(birthdate: &Birthdate, current_year: i32) -> i32 {
    current_year.saturating_sub(birthdate.year() as i32)
}

/// Applies the age gate.
#[instrument]
pub fn check_eligibility(age: i32) -> Eligibility {
    if age >= MINIMUM_AGE {
        Eligibility::Eligible(age)
    } else {
        info!(age, "Player below minimum age");
        Eligibility::Ineligible(age)
    }
}
