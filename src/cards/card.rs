//! Card values.
//!
//! `CardModel` is immutable. Moving a card to the center pile produces a new
//! value via [`CardModel::played_with_offset`]: same id, number and color, new
//! offset.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;
use crate::core::geometry::Vector;

/// Suit color of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Red,
    Blue,
    Yellow,
    Green,
}

impl CardColor {
    /// All suit colors, in table order.
    pub const ALL: [CardColor; 4] = [Self::Red, Self::Blue, Self::Yellow, Self::Green];

    /// Lowercase name, as used in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

impl std::fmt::Display for CardColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Face of a card without identity. Used for deals and configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSpec {
    pub number: i32,
    pub color: CardColor,
}

impl CardSpec {
    #[must_use]
    pub const fn new(number: i32, color: CardColor) -> Self {
        Self { number, color }
    }
}

/// One card instance on the table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardModel {
    id: CardId,
    number: i32,
    color: CardColor,
    offset: Vector,
}

impl CardModel {
    /// Create a card with no visual offset.
    #[must_use]
    pub const fn new(id: CardId, number: i32, color: CardColor) -> Self {
        Self {
            id,
            number,
            color,
            offset: Vector::ZERO,
        }
    }

    /// Create a card from a face spec.
    #[must_use]
    pub const fn from_spec(id: CardId, spec: CardSpec) -> Self {
        Self::new(id, spec.number, spec.color)
    }

    /// Copy of this card with the given offset.
    #[must_use]
    pub fn with_offset(mut self, offset: Vector) -> Self {
        self.offset = offset;
        self
    }

    /// The card as it lands on the center pile.
    ///
    /// Identity and face are preserved; only the offset changes.
    #[must_use]
    pub fn played_with_offset(&self, offset: Vector) -> Self {
        self.with_offset(offset)
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn number(&self) -> i32 {
        self.number
    }

    #[must_use]
    pub const fn color(&self) -> CardColor {
        self.color
    }

    /// Resting visual offset (center-pile jitter).
    #[must_use]
    pub const fn offset(&self) -> Vector {
        self.offset
    }

    #[must_use]
    pub const fn spec(&self) -> CardSpec {
        CardSpec::new(self.number, self.color)
    }
}

impl std::fmt::Display for CardModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.color, self.number, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_zero_offset() {
        let card = CardModel::new(CardId(1), 7, CardColor::Red);
        assert_eq!(card.offset(), Vector::ZERO);
        assert_eq!(card.spec(), CardSpec::new(7, CardColor::Red));
    }

    #[test]
    fn test_played_preserves_identity() {
        let card = CardModel::new(CardId(1), 7, CardColor::Red);
        let played = card.played_with_offset(Vector::new(3.0, -9.5));

        assert_eq!(played.id(), card.id());
        assert_eq!(played.number(), 7);
        assert_eq!(played.color(), CardColor::Red);
        assert_eq!(played.offset(), Vector::new(3.0, -9.5));
        // Original value is untouched.
        assert_eq!(card.offset(), Vector::ZERO);
    }

    #[test]
    fn test_display() {
        let card = CardModel::new(CardId(4), 2, CardColor::Blue);
        assert_eq!(card.to_string(), "blue 2 (Card(4))");
    }

    #[test]
    fn test_color_serde_lowercase() {
        let json = serde_json::to_string(&CardColor::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");

        let spec: CardSpec = serde_json::from_str(r#"{"number":3,"color":"green"}"#).unwrap();
        assert_eq!(spec, CardSpec::new(3, CardColor::Green));
    }
}
