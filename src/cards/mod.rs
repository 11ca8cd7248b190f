//! Card data: passive configuration records supplied by the host.
//!
//! ## Key Types
//!
//! - `Card`: card configuration (title plus optional metadata)
//! - `CardStat`: one displayable stat line
//! - `CardCost`: one cost component
//!
//! Runtime identity and zone membership live in the `deck` module, not here.

pub mod card;

pub use card::{Card, CardCost, CardStat, StatValue};
