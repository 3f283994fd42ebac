//! Candidate pools, the lucky number and the prune rule.

use rand::Rng;
use tracing::{debug, instrument};

/// Number of random entries drawn for a fresh pool (before the lucky number).
pub const POOL_SIZE: usize = 9;

/// Smallest value that can be drawn.
pub const MIN_NUMBER: i32 = 0;

/// Largest value that can be drawn.
pub const MAX_NUMBER: i32 = 100;

/// Entries farther than this from the lucky number are pruned after a miss.
pub const PROXIMITY: i32 = 10;

/// A pruned pool smaller than this ends the round.
pub const MIN_POOL_LEN: usize = 2;

// ─────────────────────────────────────────────────────────────
//  Number sources
// ─────────────────────────────────────────────────────────────

/// Source of uniformly drawn integers.
pub trait NumberSource {
    /// Draws an integer in `low..=high`.
    fn draw(&mut self, low: i32, high: i32) -> i32;
}

/// Number source backed by any `rand` generator.
#[derive(Debug, Clone, derive_new::new)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> NumberSource for RngSource<R> {
    fn draw(&mut self, low: i32, high: i32) -> i32 {
        self.rng.random_range(low..=high)
    }
}

/// Deterministic source that cycles through a fixed sequence.
///
/// Values are clamped into the requested range. An empty sequence always
/// yields `low`.
#[derive(Debug, Clone, derive_new::new)]
pub struct ScriptedNumbers {
    values: Vec<i32>,
    #[new(default)]
    next: usize,
}

impl NumberSource for ScriptedNumbers {
    fn draw(&mut self, low: i32, high: i32) -> i32 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(low, high)
    }
}

// ─────────────────────────────────────────────────────────────
//  Pool
// ─────────────────────────────────────────────────────────────

/// Ordered candidate numbers for a round. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LuckyPool(Vec<i32>);

impl LuckyPool {
    /// Returns the entries in order.
    pub fn numbers(&self) -> &[i32] {
        &self.0
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the pool has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `value` appears at least once.
    pub fn contains(&self, value: i32) -> bool {
        self.0.contains(&value)
    }

    /// Removes the first occurrence of `value`. Returns false if it was absent.
    fn remove_first(&mut self, value: i32) -> bool {
        match self.0.iter().position(|&n| n == value) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }
}

impl From<Vec<i32>> for LuckyPool {
    fn from(numbers: Vec<i32>) -> Self {
        Self(numbers)
    }
}

impl std::fmt::Display for LuckyPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{n}")?;
        }
        write!(f, "]")
    }
}

/// Draws `size` independent numbers in `MIN_NUMBER..=MAX_NUMBER`, with replacement.
#[instrument(skip(source))]
pub fn generate_pool(source: &mut impl NumberSource, size: usize) -> LuckyPool {
    let numbers: Vec<i32> = (0..size)
        .map(|_| source.draw(MIN_NUMBER, MAX_NUMBER))
        .collect();
    debug!(pool = ?numbers, "Generated pool");
    LuckyPool(numbers)
}

/// Draws the lucky number and appends it to the pool.
///
/// The value may duplicate an existing entry; correctness is checked against
/// the designated value, never a position.
#[instrument(skip(pool, source), fields(pool_len = pool.len()))]
pub fn generate_lucky_number(
    mut pool: LuckyPool,
    source: &mut impl NumberSource,
) -> (i32, LuckyPool) {
    let lucky_number = source.draw(MIN_NUMBER, MAX_NUMBER);
    pool.0.push(lucky_number);
    debug!(lucky_number, "Lucky number drawn");
    (lucky_number, pool)
}

// ─────────────────────────────────────────────────────────────
//  Prune rule
// ─────────────────────────────────────────────────────────────

/// Result of pruning the pool after a wrong guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prune {
    /// At least `MIN_POOL_LEN` entries remain; play continues on this pool.
    Narrowed(LuckyPool),
    /// Too few entries remain; the round is lost.
    Exhausted(LuckyPool),
}

/// Applies the prune rule for a wrong `guess`.
///
/// Removes the first occurrence of `guess` (nothing if absent), then keeps only
/// entries within `PROXIMITY` of `lucky_number`.
#[instrument(skip(pool), fields(pool_len = pool.len()))]
pub fn prune(mut pool: LuckyPool, guess: i32, lucky_number: i32) -> Prune {
    if !pool.remove_first(guess) {
        debug!(guess, "Guess not present in pool, nothing removed");
    }

    let filtered: LuckyPool = LuckyPool(
        pool.0
            .into_iter()
            .filter(|n| (n - lucky_number).abs() <= PROXIMITY)
            .collect(),
    );
    debug!(remaining = filtered.len(), "Pool pruned");

    if filtered.len() >= MIN_POOL_LEN {
        Prune::Narrowed(filtered)
    } else {
        Prune::Exhausted(filtered)
    }
}
