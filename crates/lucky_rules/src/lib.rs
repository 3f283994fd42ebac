//! Lucky Rules - pure game logic for the lucky number game
//!
//! Nothing here touches the console. Validators return typed errors whose
//! `Display` text is the message shown to the player, and randomness comes in
//! through [`NumberSource`] so rounds can be replayed deterministically.
//!
//! # Example
//!
//! ```
//! use lucky_rules::{GuessResult, RoundInProgress, ScriptedNumbers};
//!
//! let mut source = ScriptedNumbers::new(vec![12, 48, 90, 3, 77, 51, 60, 29, 8, 55]);
//! let round = RoundInProgress::deal(&mut source);
//! assert_eq!(round.lucky_number(), 55);
//!
//! match round.submit("55") {
//!     GuessResult::Finished(done) => assert!(done.outcome().is_win()),
//!     _ => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod eligibility;
mod identity;
mod pool;
mod replay;
mod round;

pub use eligibility::{Eligibility, MINIMUM_AGE, check_eligibility, compute_age};
pub use identity::{
    Birthdate, IdentityError, MAX_BIRTH_YEAR, MIN_BIRTH_YEAR, PlayerName, validate_birthdate,
    validate_name,
};
pub use pool::{
    LuckyPool, MAX_NUMBER, MIN_NUMBER, MIN_POOL_LEN, NumberSource, POOL_SIZE, PROXIMITY, Prune,
    RngSource, ScriptedNumbers, generate_lucky_number, generate_pool, prune,
};
pub use replay::{ReplayChoice, ReplayError, parse_replay_choice};
pub use round::{GuessError, GuessResult, RoundFinished, RoundInProgress, RoundOutcome};
