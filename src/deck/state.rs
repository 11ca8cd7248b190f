//! Per-deck card identity.
//!
//! A `Deck` stamps every input `Card` with a `StateId` at construction.
//! The id embeds the card's input index and the deck's label, so two decks
//! in the same process never collide even when built from identical card
//! lists. Ids are stable for the deck's lifetime and never reused, not
//! even after a purge.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Unique identifier for a card instance within one deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateId(pub String);

impl StateId {
    /// Stamp an id from a card's input index and its deck's label.
    #[must_use]
    pub fn stamp(index: usize, deck_label: &str) -> Self {
        Self(format!("card-{index}-{deck_label}"))
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card instance owned by a deck: identity plus configuration.
///
/// Created once at `Deck` construction and moved between zones by id;
/// never re-created. The configuration is carried verbatim from the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardState {
    /// Unique identity within the owning deck.
    pub state_id: StateId,

    /// The host-supplied card configuration.
    pub card: Card,
}

impl CardState {
    /// Create a card state for the card at `index` in deck `deck_label`.
    #[must_use]
    pub fn new(index: usize, deck_label: &str, card: Card) -> Self {
        Self {
            state_id: StateId::stamp(index, deck_label),
            card,
        }
    }
}

/// The three tracked zones of a deck.
///
/// The master roster is not a zone: a roster card in no zone at all has
/// been purged (or not yet placed).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// The ordered draw pile.
    Active,
    /// Spent cards awaiting recycling.
    Discard,
    /// Cards drawn and currently held by the player.
    InPlay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_id_format() {
        let id = StateId::stamp(3, "dungeon");
        assert_eq!(id.as_str(), "card-3-dungeon");
        assert_eq!(format!("{id}"), "card-3-dungeon");
    }

    #[test]
    fn test_state_id_distinct_across_decks() {
        let a = StateId::stamp(0, "deck-a");
        let b = StateId::stamp(0, "deck-b");
        assert_ne!(a, b);
    }

    #[test]
    fn test_card_state_carries_config() {
        let state = CardState::new(0, "test", Card::new("Torch"));
        assert_eq!(state.card.title, "Torch");
        assert_eq!(state.state_id, StateId::stamp(0, "test"));
    }

    #[test]
    fn test_serialization() {
        let state = CardState::new(1, "test", Card::new("Rope"));
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CardState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
