//! Single die with a fixed face set.
//!
//! Faces are normalized at construction so a die always has exactly
//! `sides` faces: missing faces are synthesized or padded with blanks,
//! surplus faces are truncated. Rolling caches the last result, and the
//! first read of an unrolled die performs one lazy roll.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::rng::GameRng;

/// One possible outcome of a die roll.
///
/// Symbol lists are short (usually 0-2 entries), so they are stored inline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DieFace {
    /// Display descriptor ("critical hit").
    #[serde(default)]
    pub descriptor: Option<String>,

    /// Symbol tags counted by pool aggregation. Empty strings are ignored.
    #[serde(default)]
    pub symbols: SmallVec<[String; 2]>,

    /// Numeric value summed by pool aggregation.
    #[serde(default)]
    pub value: Option<i64>,

    /// Face color. Falls back to the die's default color when rolled.
    #[serde(default)]
    pub color: Option<String>,
}

impl DieFace {
    /// A face carrying only a numeric value.
    #[must_use]
    pub fn numeric(value: i64) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// A face carrying only symbols.
    #[must_use]
    pub fn symbolic<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// The blank face used to pad short face lists: value 0, one empty
    /// symbol.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            value: Some(0),
            symbols: smallvec![String::new()],
            ..Self::default()
        }
    }
}

/// Construction options for a die.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DieOptions {
    /// Number of faces. Drives normalization. Must be at least 1.
    pub sides: usize,

    /// Explicit face definitions. Padded or truncated to `sides`.
    #[serde(default)]
    pub faces: Vec<DieFace>,

    /// Fallback color applied to rolled faces that specify none.
    pub default_color: String,

    /// Display label. No behavioral effect.
    #[serde(default)]
    pub label: String,

    /// Seed for the die's random source. `None` seeds from OS entropy.
    #[serde(skip)]
    pub seed: Option<u64>,
}

impl Default for DieOptions {
    fn default() -> Self {
        Self {
            sides: 6,
            faces: Vec::new(),
            default_color: "red".to_string(),
            label: String::new(),
            seed: None,
        }
    }
}

/// A die with a fixed, normalized face list and a cached last result.
///
/// ## Usage
///
/// ```
/// use tabletop_kit::dice::{Die, DieOptions};
///
/// let mut d6 = Die::new(DieOptions::default());
/// let face = d6.roll();
/// assert!((1..=6).contains(&face.value.unwrap()));
/// ```
#[derive(Clone, Debug)]
pub struct Die {
    sides: usize,
    faces: Vec<DieFace>,
    default_color: String,
    label: String,
    current: Option<DieFace>,
    rng: GameRng,
}

impl Die {
    /// Create a die with a normalized face list.
    ///
    /// Normalization: no faces supplied synthesizes values `1..=sides`;
    /// fewer faces than sides pads with blanks; more faces than sides
    /// truncates.
    ///
    /// Panics if `options.sides` is 0 - a die with no faces has no valid
    /// roll outcome.
    #[must_use]
    pub fn new(options: DieOptions) -> Self {
        assert!(options.sides > 0, "Die must have at least one side");

        let rng = match options.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        Self {
            faces: Self::normalize_faces(options.sides, options.faces),
            sides: options.sides,
            default_color: options.default_color,
            label: options.label,
            current: None,
            rng,
        }
    }

    fn normalize_faces(sides: usize, mut faces: Vec<DieFace>) -> Vec<DieFace> {
        if faces.is_empty() {
            return (1..=sides as i64).map(DieFace::numeric).collect();
        }

        while faces.len() < sides {
            faces.push(DieFace::blank());
        }
        faces.truncate(sides);
        faces
    }

    /// Roll the die: pick one face uniformly at random.
    ///
    /// The returned face has the die's default color applied when the face
    /// itself specifies none. The result is cached as the current result.
    pub fn roll(&mut self) -> DieFace {
        let index = self.rng.gen_range_usize(0..self.faces.len());
        let mut face = self.faces[index].clone();
        if face.color.is_none() {
            face.color = Some(self.default_color.clone());
        }

        self.current = Some(face.clone());
        face
    }

    /// The cached last result, rolling once lazily if never rolled.
    ///
    /// This is not a re-roll: repeated calls return the same face until
    /// the next explicit `roll`.
    pub fn current_result(&mut self) -> DieFace {
        match &self.current {
            Some(face) => face.clone(),
            None => self.roll(),
        }
    }

    /// Number of faces.
    #[must_use]
    pub fn sides(&self) -> usize {
        self.sides
    }

    /// The normalized face list.
    #[must_use]
    pub fn faces(&self) -> &[DieFace] {
        &self.faces
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Fallback color for faces that specify none.
    #[must_use]
    pub fn default_color(&self) -> &str {
        &self.default_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(options: DieOptions) -> Die {
        Die::new(DieOptions {
            seed: Some(42),
            ..options
        })
    }

    #[test]
    fn test_synthesized_faces() {
        let die = seeded(DieOptions::default());

        assert_eq!(die.sides(), 6);
        assert_eq!(die.faces().len(), 6);
        for (i, face) in die.faces().iter().enumerate() {
            assert_eq!(face.value, Some(i as i64 + 1));
        }
    }

    #[test]
    fn test_short_face_list_padded_with_blanks() {
        let die = seeded(DieOptions {
            sides: 6,
            faces: vec![DieFace::numeric(1)],
            ..DieOptions::default()
        });

        assert_eq!(die.faces().len(), 6);
        assert_eq!(die.faces()[0], DieFace::numeric(1));
        for face in &die.faces()[1..] {
            assert_eq!(face, &DieFace::blank());
        }
    }

    #[test]
    fn test_long_face_list_truncated() {
        let die = seeded(DieOptions {
            sides: 2,
            faces: (1..=5).map(DieFace::numeric).collect(),
            ..DieOptions::default()
        });

        assert_eq!(die.faces().len(), 2);
        assert_eq!(die.faces()[1], DieFace::numeric(2));
    }

    #[test]
    #[should_panic(expected = "at least one side")]
    fn test_zero_sides_rejected() {
        let _ = Die::new(DieOptions {
            sides: 0,
            ..DieOptions::default()
        });
    }

    #[test]
    fn test_roll_applies_default_color() {
        let mut die = seeded(DieOptions {
            sides: 1,
            faces: vec![DieFace::numeric(4)],
            default_color: "blue".to_string(),
            ..DieOptions::default()
        });

        let face = die.roll();
        assert_eq!(face.value, Some(4));
        assert_eq!(face.color.as_deref(), Some("blue"));
    }

    #[test]
    fn test_roll_keeps_explicit_face_color() {
        let mut die = seeded(DieOptions {
            sides: 1,
            faces: vec![DieFace {
                color: Some("gold".to_string()),
                ..DieFace::numeric(1)
            }],
            default_color: "red".to_string(),
            ..DieOptions::default()
        });

        assert_eq!(die.roll().color.as_deref(), Some("gold"));
    }

    #[test]
    fn test_current_result_lazy_roll() {
        let mut die = seeded(DieOptions::default());

        // First read rolls once, later reads return the cached face
        let first = die.current_result();
        assert_eq!(die.current_result(), first);
        assert_eq!(die.current_result(), first);
    }

    #[test]
    fn test_roll_replaces_cached_result() {
        let mut die = seeded(DieOptions::default());

        let results: Vec<_> = (0..50).map(|_| die.roll().value).collect();
        assert_eq!(die.current_result().value, results[49]);

        // 50 d6 rolls landing on one value has vanishing probability
        assert!(results.iter().any(|v| v != &results[0]));
    }

    #[test]
    fn test_rolls_stay_in_range() {
        let mut die = seeded(DieOptions::default());

        for _ in 0..100 {
            let value = die.roll().value.unwrap();
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    fn test_face_serialization() {
        let face = DieFace {
            descriptor: Some("skull".to_string()),
            symbols: smallvec!["skull".to_string()],
            value: None,
            color: None,
        };

        let json = serde_json::to_string(&face).unwrap();
        let deserialized: DieFace = serde_json::from_str(&json).unwrap();
        assert_eq!(face, deserialized);
    }
}
