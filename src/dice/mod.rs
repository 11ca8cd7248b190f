//! Dice: configurable-face dice and aggregating pools.
//!
//! ## Key Types
//!
//! - `DieFace`: one roll outcome (symbols, numeric value, color)
//! - `DieOptions`: construction options driving face normalization
//! - `Die`: a die with a cached last result
//! - `DicePool`: rolls a group of dice and aggregates symbol counts and
//!   numeric totals into a `RollSummary`
//!
//! Dice are independent of the deck component.

pub mod die;
pub mod pool;

pub use die::{Die, DieFace, DieOptions};
pub use pool::{DicePool, RollSummary, VALUE_KEY};
