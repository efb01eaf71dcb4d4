//! Table configuration.
//!
//! A `TableConfig` fixes everything a session needs at startup:
//! - `seed`: RNG seed for center-pile jitter
//! - `jitter`: maximum absolute offset of a played card
//! - `card_size`: frame the renderer lays cards out in
//! - `opening`: cards dealt to the center pile and the hand
//!
//! Configurations can be built in code with the `with_*` methods or parsed
//! from JSON. Missing JSON fields fall back to the defaults.
//!
//! ```
//! use uno_table::core::TableConfig;
//!
//! let config = TableConfig::from_json(r#"{ "seed": 7, "jitter": 10.0 }"#).unwrap();
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.opening.hand.len(), 8);
//! ```

use serde::{Deserialize, Serialize};

use super::geometry::Size;
use crate::cards::face::CARD_SIZE;
use crate::cards::{CardColor, CardSpec};
use crate::error::{Result, TableError};

/// Default maximum offset of a card on the center pile.
pub const DEFAULT_JITTER: f64 = 15.0;

/// Largest accepted jitter radius, in points.
pub const MAX_JITTER: f64 = 1e6;

/// Cards placed on the table before any interaction.
///
/// Order is display order: later cards are drawn on top. When a
/// configuration gives an `opening` object, a side it leaves out is empty;
/// only a missing `opening` as a whole falls back to [`OpeningDeal::default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningDeal {
    #[serde(default)]
    pub center: Vec<CardSpec>,
    #[serde(default)]
    pub hand: Vec<CardSpec>,
}

impl OpeningDeal {
    /// An empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            center: Vec::new(),
            hand: Vec::new(),
        }
    }

    /// Total cards dealt.
    #[must_use]
    pub fn len(&self) -> usize {
        self.center.len() + self.hand.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for OpeningDeal {
    /// A red 2 face up in the center and eight 2s in hand.
    fn default() -> Self {
        use CardColor::{Blue, Green, Red, Yellow};

        Self {
            center: vec![CardSpec::new(2, Red)],
            hand: [Blue, Yellow, Red, Green, Blue, Yellow, Blue, Blue]
                .into_iter()
                .map(|color| CardSpec::new(2, color))
                .collect(),
        }
    }
}

/// Complete table configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Seed for the jitter RNG.
    pub seed: u64,

    /// Played cards land with an offset uniform in `[-jitter, jitter]` on each axis.
    pub jitter: f64,

    /// Card frame size.
    pub card_size: Size,

    /// Initial hand and center pile.
    pub opening: OpeningDeal,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            jitter: DEFAULT_JITTER,
            card_size: CARD_SIZE,
            opening: OpeningDeal::default(),
        }
    }
}

impl TableConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the jitter radius.
    #[must_use]
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Set the card frame size.
    #[must_use]
    pub fn with_card_size(mut self, size: Size) -> Self {
        self.card_size = size;
        self
    }

    /// Replace the opening deal.
    #[must_use]
    pub fn with_opening(mut self, opening: OpeningDeal) -> Self {
        self.opening = opening;
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=MAX_JITTER).contains(&self.jitter) {
            return Err(TableError::InvalidConfig(format!(
                "jitter must be within 0..={MAX_JITTER}, got {}",
                self.jitter
            )));
        }

        let Size { width, height } = self.card_size;
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(TableError::InvalidConfig(format!(
                "card size must be positive, got {width}x{height}"
            )));
        }

        Ok(())
    }
}
