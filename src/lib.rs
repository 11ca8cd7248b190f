//! # tabletop-kit
//!
//! In-memory primitives for tabletop-style games: playing cards with
//! stateful deck management, and dice with configurable faces aggregated
//! into pools. A host application (game engine, UI) owns turn logic,
//! rendering, and persistence; this crate owns the state machines
//! underneath.
//!
//! ## Design Principles
//!
//! 1. **Total operations**: deck and dice operations never fail for empty
//!    piles, unknown ids, or over-draws - they no-op or return short
//!    results instead.
//!
//! 2. **Identity, not copies**: a deck stamps each card with a unique
//!    `StateId` at construction and moves cards between zones by id.
//!    Cards are never re-created or duplicated.
//!
//! 3. **Injectable randomness**: every deck and die owns a `GameRng`,
//!    seedable through its options for deterministic tests, entropy-seeded
//!    by default.
//!
//! ## Modules
//!
//! - `core`: the shared random source
//! - `cards`: passive card configuration records
//! - `deck`: zone partitioning, shuffle, draw, discard, purge, restore
//! - `dice`: dice with normalized face lists and aggregating pools

pub mod cards;
pub mod core;
pub mod deck;
pub mod dice;

// Re-export commonly used types
pub use crate::core::GameRng;

pub use crate::cards::{Card, CardCost, CardStat, StatValue};

pub use crate::deck::{CardState, Deck, DeckOptions, StateId, Zone};

pub use crate::dice::{DicePool, Die, DieFace, DieOptions, RollSummary, VALUE_KEY};
