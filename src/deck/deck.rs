//! Deck lifecycle engine.
//!
//! The `Deck` owns the authoritative zone partition of a fixed card
//! roster. It supports:
//! - Unbiased Fisher-Yates shuffling with discard recycling
//! - Drawing with transparent reshuffle-on-empty
//! - Discard, purge, and roster restoration
//! - Zone lookup by state id
//!
//! Every card present in the roster is, at any time, in at most one of
//! {active, discard, in-play}, or in none (purged). Cards move between
//! zones by id; they are never re-created or duplicated.

use rustc_hash::FxHashMap;

use crate::cards::Card;
use crate::core::rng::GameRng;

use super::state::{CardState, StateId, Zone};

/// Construction options for a deck.
#[derive(Clone, Debug, Default)]
pub struct DeckOptions {
    /// Shuffle the active pile immediately after construction.
    pub shuffle: bool,

    /// Reserved for future validation. Stored, not enforced.
    pub min_size: Option<usize>,

    /// Reserved for future validation. Stored, not enforced.
    pub max_size: Option<usize>,

    /// Seed for the deck's random source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

/// A deck of cards partitioned across zones.
///
/// ## Usage
///
/// ```
/// use tabletop_kit::cards::Card;
/// use tabletop_kit::deck::{Deck, DeckOptions};
///
/// let cards = vec![Card::new("Torch"), Card::new("Rope"), Card::new("Map")];
/// let mut deck = Deck::new("supplies", cards, DeckOptions::default());
///
/// let drawn = deck.draw(2);
/// assert_eq!(drawn.len(), 2);
/// assert_eq!(deck.active_size(), 1);
/// assert_eq!(deck.in_play_size(), 2);
///
/// deck.discard(&drawn);
/// assert_eq!(deck.discard_size(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    /// Deck label, embedded in every state id.
    label: String,

    /// Master card store: state_id -> card state.
    cards: FxHashMap<StateId, CardState>,

    /// Roster ids in input order, fixed at construction. Used by restore.
    roster: Vec<StateId>,

    /// Ordered draw pile. Front (index 0) is the next draw.
    active: Vec<StateId>,

    /// Spent cards.
    discard_pile: Vec<StateId>,

    /// Cards currently drawn and held.
    in_play: Vec<StateId>,

    /// Membership index: state_id -> zone. A roster id absent from this
    /// map is purged (or not yet placed).
    locations: FxHashMap<StateId, Zone>,

    min_size: Option<usize>,
    max_size: Option<usize>,

    rng: GameRng,
}

impl Deck {
    /// Create a deck from host-supplied card configurations.
    ///
    /// Each card is stamped with a `StateId` embedding its input index and
    /// the deck label, then placed into the active pile in input order.
    /// If `options.shuffle` is set, the active pile is shuffled before
    /// returning.
    #[must_use]
    pub fn new(label: impl Into<String>, cards: Vec<Card>, options: DeckOptions) -> Self {
        let label = label.into();
        let rng = match options.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut deck = Self {
            label,
            cards: FxHashMap::default(),
            roster: Vec::with_capacity(cards.len()),
            active: Vec::with_capacity(cards.len()),
            discard_pile: Vec::new(),
            in_play: Vec::new(),
            locations: FxHashMap::default(),
            min_size: options.min_size,
            max_size: options.max_size,
            rng,
        };

        for (index, card) in cards.into_iter().enumerate() {
            let state = CardState::new(index, &deck.label, card);
            let id = state.state_id.clone();
            deck.roster.push(id.clone());
            deck.active.push(id.clone());
            deck.locations.insert(id.clone(), Zone::Active);
            deck.cards.insert(id, state);
        }

        if options.shuffle {
            deck.shuffle(false);
        }

        deck
    }

    /// Shuffle the active pile.
    ///
    /// When `include_discard` is set, or the active pile is currently
    /// empty, the discard pile is first drained into the working set -
    /// this is the recycle policy `draw` relies on. The permutation is
    /// unbiased: every ordering of the shuffled set is equally likely.
    /// Other zones are unaffected.
    pub fn shuffle(&mut self, include_discard: bool) {
        if include_discard || self.active.is_empty() {
            for id in self.discard_pile.drain(..) {
                self.locations.insert(id.clone(), Zone::Active);
                self.active.push(id);
            }
        }

        self.rng.shuffle(&mut self.active);
    }

    /// Draw up to `count` cards from the front of the active pile.
    ///
    /// Drawn cards move to the in-play zone and are returned in draw
    /// order. When the active pile runs dry mid-draw, the discard pile is
    /// recycled transparently via `shuffle(true)`. When both piles are
    /// exhausted the result is simply short - never an error. `draw(0)`
    /// returns an empty vec.
    pub fn draw(&mut self, count: usize) -> Vec<CardState> {
        let mut drawn = Vec::with_capacity(count.min(self.roster.len()));

        for _ in 0..count {
            if self.active.is_empty() {
                self.shuffle(true);
            }
            if self.active.is_empty() {
                // Both piles exhausted: short result.
                break;
            }

            let id = self.active.remove(0);
            self.locations.insert(id.clone(), Zone::InPlay);
            self.in_play.push(id.clone());
            if let Some(card) = self.cards.get(&id) {
                drawn.push(card.clone());
            }
        }

        drawn
    }

    /// Move the given cards to the discard pile.
    ///
    /// Each card is first purged from whichever zone currently holds it,
    /// so discarding is idempotent with respect to the card's prior zone.
    /// Ids this deck never issued are ignored.
    pub fn discard(&mut self, cards: &[CardState]) {
        self.purge_list(cards);

        for card in cards {
            if self.cards.contains_key(&card.state_id) {
                self.locations.insert(card.state_id.clone(), Zone::Discard);
                self.discard_pile.push(card.state_id.clone());
            }
        }
    }

    /// Remove the card with the given id from all tracked zones.
    ///
    /// The sole destructive operation: a purged card is absent from every
    /// zone until `restore_card_list` reinstates it. An unknown id is a
    /// no-op, not an error.
    pub fn purge(&mut self, id: &StateId) {
        match self.locations.remove(id) {
            Some(Zone::Active) => self.active.retain(|c| c != id),
            Some(Zone::Discard) => self.discard_pile.retain(|c| c != id),
            Some(Zone::InPlay) => self.in_play.retain(|c| c != id),
            None => {}
        }
    }

    /// Purge each card in the given sequence by id.
    pub fn purge_list(&mut self, cards: &[CardState]) {
        for card in cards {
            self.purge(&card.state_id);
        }
    }

    /// Return every missing roster card to the active pile.
    ///
    /// A roster card in no tracked zone (purged, typically) is appended to
    /// the active pile, in roster order. Cards already in a zone are left
    /// untouched, so calling this twice is the same as calling it once.
    pub fn restore_card_list(&mut self) {
        for id in &self.roster {
            if !self.locations.contains_key(id) {
                self.locations.insert(id.clone(), Zone::Active);
                self.active.push(id.clone());
            }
        }
    }

    /// The deck label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Look up a card state by id.
    #[must_use]
    pub fn card(&self, id: &StateId) -> Option<&CardState> {
        self.cards.get(id)
    }

    /// The zone currently holding the given card, if any.
    #[must_use]
    pub fn zone_of(&self, id: &StateId) -> Option<Zone> {
        self.locations.get(id).copied()
    }

    /// Roster ids in input order.
    #[must_use]
    pub fn roster(&self) -> &[StateId] {
        &self.roster
    }

    /// Active pile ids in draw order (front first).
    #[must_use]
    pub fn active(&self) -> &[StateId] {
        &self.active
    }

    /// Discard pile ids.
    #[must_use]
    pub fn discard_pile(&self) -> &[StateId] {
        &self.discard_pile
    }

    /// In-play ids.
    #[must_use]
    pub fn in_play(&self) -> &[StateId] {
        &self.in_play
    }

    /// Number of cards in the master roster.
    #[must_use]
    pub fn roster_size(&self) -> usize {
        self.roster.len()
    }

    /// Number of cards in the active pile.
    #[must_use]
    pub fn active_size(&self) -> usize {
        self.active.len()
    }

    /// Number of cards in the discard pile.
    #[must_use]
    pub fn discard_size(&self) -> usize {
        self.discard_pile.len()
    }

    /// Number of cards in play.
    #[must_use]
    pub fn in_play_size(&self) -> usize {
        self.in_play.len()
    }

    /// Number of roster cards currently in no zone.
    #[must_use]
    pub fn purged_size(&self) -> usize {
        self.roster.len() - self.locations.len()
    }

    /// Reserved minimum-size option. Not enforced.
    #[must_use]
    pub fn min_size(&self) -> Option<usize> {
        self.min_size
    }

    /// Reserved maximum-size option. Not enforced.
    #[must_use]
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }
}
