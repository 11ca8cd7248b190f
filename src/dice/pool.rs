//! Dice pools: roll a group of dice together and aggregate the results.

use rustc_hash::FxHashMap;

use super::die::{Die, DieFace};

/// Aggregated pool results: symbol counts plus a numeric total under
/// [`VALUE_KEY`].
pub type RollSummary = FxHashMap<String, i64>;

/// Reserved summary key holding the sum of numeric face values.
pub const VALUE_KEY: &str = "value";

/// A group of dice rolled and aggregated together.
///
/// The pool owns its dice; `add_die` moves a die in. Hosts that want the
/// same die template several times add clones.
///
/// ## Usage
///
/// ```
/// use tabletop_kit::dice::{Die, DieOptions, DicePool, VALUE_KEY};
///
/// let d6 = Die::new(DieOptions::default());
/// let mut pool = DicePool::new(vec![d6.clone(), d6]);
///
/// pool.roll_all();
/// let total = pool.sum_results()[VALUE_KEY];
/// assert!((2..=12).contains(&total));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DicePool {
    dice: Vec<Die>,
}

impl DicePool {
    /// Create a pool from an initial set of dice.
    #[must_use]
    pub fn new(dice: Vec<Die>) -> Self {
        Self { dice }
    }

    /// Add a die to the pool.
    pub fn add_die(&mut self, die: Die) {
        self.dice.push(die);
    }

    /// Roll every die and return the resulting faces, in pool order.
    ///
    /// Each die's cached result is replaced as a side effect.
    pub fn roll_all(&mut self) -> Vec<DieFace> {
        self.dice.iter_mut().map(Die::roll).collect()
    }

    /// Read every die's current result without re-rolling.
    ///
    /// A die that has never been rolled performs its lazy first roll.
    pub fn see_results(&mut self) -> Vec<DieFace> {
        self.dice.iter_mut().map(Die::current_result).collect()
    }

    /// Aggregate the current results.
    ///
    /// Every non-empty symbol occurrence increments its count; every
    /// nonzero numeric value accumulates under [`VALUE_KEY`]. Blank faces
    /// (empty symbol, value 0) contribute nothing, so an untouched summary
    /// key is simply absent.
    pub fn sum_results(&mut self) -> RollSummary {
        let mut summary = RollSummary::default();

        for face in self.see_results() {
            for symbol in &face.symbols {
                if !symbol.is_empty() {
                    *summary.entry(symbol.clone()).or_insert(0) += 1;
                }
            }
            if let Some(value) = face.value {
                if value != 0 {
                    *summary.entry(VALUE_KEY.to_string()).or_insert(0) += value;
                }
            }
        }

        summary
    }

    /// Number of dice in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Check whether the pool holds no dice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// The pooled dice.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }
}
