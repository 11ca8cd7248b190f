//! Deck lifecycle: card identity, zone partitioning, shuffle and draw.
//!
//! ## Key Types
//!
//! - `StateId`: unique per-deck card identity
//! - `CardState`: identity plus host-supplied configuration
//! - `Zone`: the three tracked zones (active, discard, in-play)
//! - `Deck`: the zone partition state machine
//! - `DeckOptions`: construction options

pub mod deck;
pub mod state;

pub use deck::{Deck, DeckOptions};
pub use state::{CardState, StateId, Zone};
