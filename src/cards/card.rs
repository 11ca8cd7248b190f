//! Card configuration - passive card data.
//!
//! `Card` holds the display and gameplay metadata a host supplies:
//! title, stats, costs, flavor text, trigger hooks. The toolkit never
//! interprets these fields; it only carries them. Anything stateful
//! (which zone a card is in) lives in the deck component.

use serde::{Deserialize, Serialize};

/// Value of a single card stat.
///
/// Hosts mix numeric and textual stats freely, so both are supported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StatValue {
    /// Numeric stat (attack, shield, movement).
    Int(i64),
    /// Textual stat (a range band, a keyword).
    Text(String),
}

impl From<i64> for StatValue {
    fn from(v: i64) -> Self {
        StatValue::Int(v)
    }
}

impl From<i32> for StatValue {
    fn from(v: i32) -> Self {
        StatValue::Int(v as i64)
    }
}

impl From<&str> for StatValue {
    fn from(v: &str) -> Self {
        StatValue::Text(v.to_string())
    }
}

impl From<String> for StatValue {
    fn from(v: String) -> Self {
        StatValue::Text(v)
    }
}

/// One displayable stat line on a card.
///
/// All fields are optional; hosts fill whatever their layout renders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardStat {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: Option<StatValue>,
    #[serde(default)]
    pub color: Option<String>,
    /// Presentation hook (e.g., a CSS class) passed through untouched.
    #[serde(default)]
    pub class_name: Option<String>,
}

/// One component of a card's cost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardCost {
    /// Amount to pay.
    pub value: i64,
    #[serde(default)]
    pub icon: Option<String>,
    /// Resource suit this cost is paid in, if the game has suits.
    #[serde(default)]
    pub suit: Option<String>,
}

impl CardCost {
    /// Create a suitless cost.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self {
            value,
            icon: None,
            suit: None,
        }
    }

    /// Create a cost paid in a specific suit.
    #[must_use]
    pub fn in_suit(value: i64, suit: impl Into<String>) -> Self {
        Self {
            value,
            icon: None,
            suit: Some(suit.into()),
        }
    }
}

/// Static card configuration.
///
/// A pure value object: only the `title` is required, everything else is
/// optional metadata. The trigger hooks (`on_play` etc.) are opaque strings
/// the host's rules layer resolves; the toolkit never reads them.
///
/// ## Example
///
/// ```
/// use tabletop_kit::cards::{Card, CardCost};
///
/// let card = Card::new("Rusty Dagger")
///     .with_subtitle("Starter Weapon")
///     .with_cost(vec![CardCost::new(1)])
///     .with_tags(vec!["weapon".into(), "starter".into()]);
///
/// assert_eq!(card.title, "Rusty Dagger");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Display title (the only required field).
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Primary stat block (shown prominently).
    #[serde(default)]
    pub primary: Vec<CardStat>,
    /// Secondary stat block.
    #[serde(default)]
    pub secondary: Vec<CardStat>,
    #[serde(default)]
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub suits: Vec<String>,
    #[serde(default)]
    pub cost: Vec<CardCost>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Which printed set/expansion this card belongs to.
    #[serde(default)]
    pub set_identifier: Option<String>,
    /// Persistent traits (e.g., "sentinel").
    #[serde(default)]
    pub traits: Vec<String>,
    /// Trigger hooks, resolved by the host's rules layer.
    #[serde(default)]
    pub on_reveal: Option<String>,
    #[serde(default)]
    pub on_play: Option<String>,
    #[serde(default)]
    pub on_discard: Option<String>,
    #[serde(default)]
    pub on_exhaust: Option<String>,
    /// Hints for image generation/selection tooling.
    #[serde(default)]
    pub image_hints: Vec<String>,
}

impl Card {
    /// Create a card with the given title and no other metadata.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the subtitle (builder pattern).
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the flavor text.
    #[must_use]
    pub fn with_flavor_text(mut self, text: impl Into<String>) -> Self {
        self.flavor_text = Some(text.into());
        self
    }

    /// Set the cost list.
    #[must_use]
    pub fn with_cost(mut self, cost: Vec<CardCost>) -> Self {
        self.cost = cost;
        self
    }

    /// Set the tag list.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the trait list.
    #[must_use]
    pub fn with_traits(mut self, traits: Vec<String>) -> Self {
        self.traits = traits;
        self
    }

    /// Add a stat to the primary block.
    #[must_use]
    pub fn with_primary_stat(mut self, stat: CardStat) -> Self {
        self.primary.push(stat);
        self
    }

    /// Check whether the card carries a tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Total numeric cost across all cost components.
    #[must_use]
    pub fn total_cost(&self) -> i64 {
        self.cost.iter().map(|c| c.value).sum()
    }
}
