//! Phase-specific typestate structs for a guessing round.
//!
//! A round is either in progress (accepting guesses) or finished. A
//! `RoundFinished` always carries its outcome; there is no "maybe over" state.

use super::pool::{
    LuckyPool, NumberSource, POOL_SIZE, Prune, generate_lucky_number, generate_pool, prune,
};
use tracing::{debug, info, instrument};

/// Error for a guess that never reached the lucky-number check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GuessError {
    /// Input was not an integer.
    #[display("Invalid input. Please enter a number.")]
    InvalidGuessFormat,
    /// Integer is not in the current pool.
    #[display("Invalid choice. Pick a number from the list.")]
    GuessNotInPool,
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RoundOutcome {
    /// Lucky number found on try `tries`.
    #[display("Won on try {tries}")]
    Won {
        /// Try counter when the lucky number was guessed.
        tries: u32,
    },
    /// Pool shrank below the minimum before the lucky number was found.
    #[display("Lost on try {tries}")]
    Lost {
        /// Try counter when the pool ran out.
        tries: u32,
    },
}

impl RoundOutcome {
    /// True if the player found the lucky number.
    pub fn is_win(&self) -> bool {
        matches!(self, RoundOutcome::Won { .. })
    }

    /// Try counter at the end of the round.
    pub fn tries(&self) -> u32 {
        match self {
            RoundOutcome::Won { tries } | RoundOutcome::Lost { tries } => *tries,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round accepting guesses.
///
/// For dealt rounds the lucky number is always in the pool: wrong guesses never
/// remove it and pruning keeps everything within range of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInProgress {
    pool: LuckyPool,
    lucky_number: i32,
    tries: u32,
}

impl RoundInProgress {
    /// Deals a fresh round: `POOL_SIZE` random entries plus the lucky number.
    #[instrument(skip(source))]
    pub fn deal(source: &mut impl NumberSource) -> Self {
        let pool = generate_pool(source, POOL_SIZE);
        let (lucky_number, pool) = generate_lucky_number(pool, source);
        info!(pool_len = pool.len(), "Dealt new round");
        Self::with_pool(pool, lucky_number)
    }

    /// Starts a round on a prepared pool with the try counter at 1.
    ///
    /// The lucky number is not required to be in `pool`.
    pub fn with_pool(pool: impl Into<LuckyPool>, lucky_number: i32) -> Self {
        Self {
            pool: pool.into(),
            lucky_number,
            tries: 1,
        }
    }

    /// Current pool.
    pub fn pool(&self) -> &LuckyPool {
        &self.pool
    }

    /// The designated lucky number.
    pub fn lucky_number(&self) -> i32 {
        self.lucky_number
    }

    /// Current try counter.
    pub fn tries(&self) -> u32 {
        self.tries
    }

    /// Parses a raw input line and submits it as a guess.
    ///
    /// Every pass that does not finish the round bumps the try counter, rejected
    /// input included, so a typo counts as a try.
    #[instrument(skip(self), fields(tries = self.tries))]
    pub fn submit(self, raw: &str) -> GuessResult {
        match raw.trim().parse::<i64>() {
            Ok(value) => match i32::try_from(value) {
                Ok(guess) => self.guess(guess),
                Err(_) => self.reject(GuessError::GuessNotInPool),
            },
            Err(_) => self.reject(GuessError::InvalidGuessFormat),
        }
    }

    /// Submits an already parsed guess.
    #[instrument(skip(self), fields(tries = self.tries, pool_len = self.pool.len()))]
    pub fn guess(self, guess: i32) -> GuessResult {
        if !self.pool.contains(guess) {
            return self.reject(GuessError::GuessNotInPool);
        }

        if guess == self.lucky_number {
            let tries = self.tries;
            info!(tries, "Lucky number found");
            return GuessResult::Finished(self.finish(RoundOutcome::Won { tries }));
        }

        let Self {
            pool,
            lucky_number,
            tries,
        } = self;
        match prune(pool, guess, lucky_number) {
            Prune::Narrowed(pool) => {
                debug!(remaining = pool.len(), "Wrong guess, pool narrowed");
                GuessResult::Narrowed {
                    round: Self {
                        pool,
                        lucky_number,
                        tries: tries + 1,
                    },
                    tries,
                }
            }
            Prune::Exhausted(pool) => {
                info!(tries, "Pool exhausted, round lost");
                GuessResult::Finished(RoundFinished {
                    pool,
                    lucky_number,
                    outcome: RoundOutcome::Lost { tries },
                })
            }
        }
    }

    fn reject(mut self, error: GuessError) -> GuessResult {
        debug!(%error, "Guess rejected");
        self.tries += 1;
        GuessResult::Rejected { round: self, error }
    }

    fn finish(self, outcome: RoundOutcome) -> RoundFinished {
        RoundFinished {
            pool: self.pool,
            lucky_number: self.lucky_number,
            outcome,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round over; the outcome is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundFinished {
    pool: LuckyPool,
    lucky_number: i32,
    outcome: RoundOutcome,
}

impl RoundFinished {
    /// How the round ended.
    pub fn outcome(&self) -> &RoundOutcome {
        &self.outcome
    }

    /// Pool at the moment the round ended.
    pub fn pool(&self) -> &LuckyPool {
        &self.pool
    }

    /// The lucky number of the finished round.
    pub fn lucky_number(&self) -> i32 {
        self.lucky_number
    }

    /// Deals a fresh round (consumes finished, returns in-progress).
    #[instrument(skip(self, source))]
    pub fn restart(self, source: &mut impl NumberSource) -> RoundInProgress {
        RoundInProgress::deal(source)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of submitting a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// Input rejected; the round is unchanged apart from the try counter.
    Rejected {
        /// Round to continue with.
        round: RoundInProgress,
        /// Why the input was rejected.
        error: GuessError,
    },
    /// Wrong guess; the pool was narrowed.
    Narrowed {
        /// Round to continue with.
        round: RoundInProgress,
        /// Try counter for the wrong guess, as reported to the player.
        tries: u32,
    },
    /// Round over.
    Finished(RoundFinished),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::ScriptedNumbers;

    fn sample_round() -> RoundInProgress {
        RoundInProgress::with_pool(vec![10, 20, 30, 40, 50], 35)
    }

    #[test]
    fn test_wrong_guess_narrows_pool() {
        let round = RoundInProgress::with_pool(vec![10, 22, 30, 40, 50], 35);
        match round.guess(22) {
            GuessResult::Narrowed { round, tries } => {
                assert_eq!(tries, 1);
                assert_eq!(round.tries(), 2);
                assert_eq!(round.pool().numbers(), &[30, 40]);
            }
            other => panic!("Expected narrowed pool, got {other:?}"),
        }
    }

    #[test]
    fn test_guess_not_in_pool_rejected_and_counted() {
        match sample_round().submit("22") {
            GuessResult::Rejected { round, error } => {
                assert_eq!(error, GuessError::GuessNotInPool);
                assert_eq!(round.tries(), 2);
                assert_eq!(round.pool().len(), 5);
            }
            other => panic!("Expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_rejected() {
        match sample_round().submit("thirty") {
            GuessResult::Rejected { error, .. } => {
                assert_eq!(error, GuessError::InvalidGuessFormat)
            }
            other => panic!("Expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_huge_number_is_not_in_pool() {
        match sample_round().submit("99999999999") {
            GuessResult::Rejected { error, .. } => assert_eq!(error, GuessError::GuessNotInPool),
            other => panic!("Expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_win_reports_current_tries() {
        let round = RoundInProgress::with_pool(vec![10, 35], 35);
        let GuessResult::Rejected { round, .. } = round.submit("x") else {
            panic!("Expected rejection");
        };
        match round.submit(" 35 ") {
            GuessResult::Finished(done) => {
                assert_eq!(done.outcome(), &RoundOutcome::Won { tries: 2 });
            }
            other => panic!("Expected win, got {other:?}"),
        }
    }

    #[test]
    fn test_exhausted_pool_loses() {
        let round = RoundInProgress::with_pool(vec![30, 35, 50], 35);
        match round.guess(30) {
            GuessResult::Finished(done) => {
                assert!(!done.outcome().is_win());
                assert_eq!(done.pool().numbers(), &[35]);
            }
            other => panic!("Expected loss, got {other:?}"),
        }
    }

    #[test]
    fn test_deal_puts_lucky_number_last() {
        let mut source = ScriptedNumbers::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 77]);
        let round = RoundInProgress::deal(&mut source);
        assert_eq!(round.pool().len(), POOL_SIZE + 1);
        assert_eq!(round.lucky_number(), 77);
        assert!(round.pool().contains(77));
        assert_eq!(round.tries(), 1);
    }

    #[test]
    fn test_restart_resets_tries() {
        let mut source = ScriptedNumbers::new(vec![50]);
        let round = RoundInProgress::with_pool(vec![50, 50], 50);
        let GuessResult::Rejected { round, .. } = round.submit("?") else {
            panic!("Expected rejection");
        };
        let GuessResult::Finished(done) = round.guess(50) else {
            panic!("Expected win");
        };
        let fresh = done.restart(&mut source);
        assert_eq!(fresh.tries(), 1);
        assert_eq!(fresh.pool().len(), POOL_SIZE + 1);
    }
}
