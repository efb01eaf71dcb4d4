//! Card face description.
//!
//! A pure function of number and color describing what a renderer should
//! draw. Nothing here holds state or talks to a drawing API.

use serde::{Deserialize, Serialize};

use super::card::{CardColor, CardModel};
use crate::core::geometry::{Size, Vector};

/// Standard card frame, in points.
pub const CARD_SIZE: Size = Size::new(190.0, 300.0);

/// Offset of the black drop shadow behind every number label.
pub const LABEL_SHADOW_OFFSET: Vector = Vector::new(-1.0, 2.0);

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Self = Self(255, 255, 255);
    pub const BLACK: Self = Self(0, 0, 0);
}

impl From<CardColor> for Rgb {
    fn from(color: CardColor) -> Self {
        match color {
            CardColor::Red => Rgb(255, 59, 48),
            CardColor::Blue => Rgb(0, 122, 255),
            CardColor::Yellow => Rgb(255, 204, 0),
            CardColor::Green => Rgb(52, 199, 89),
        }
    }
}

/// Where a number label sits on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelSlot {
    TopLeading,
    Center,
    BottomTrailing,
}

/// Font size class of a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelSize {
    /// Corner index, "large title" sized.
    Corner,
    /// The big center numeral.
    Center,
}

/// A shadowed bold number label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub slot: LabelSlot,
    pub size: LabelSize,
    pub foreground: Rgb,
    pub shadow: Rgb,
    pub shadow_offset: Vector,
}

/// Everything needed to draw one card face.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardFace {
    pub size: Size,
    pub fill: Rgb,
    pub border: Rgb,
    pub border_width: f64,
    pub corner_radius: f64,
    /// Center ellipse stroke, rotated by `ellipse_rotation_deg`.
    pub ellipse_stroke: Rgb,
    pub ellipse_stroke_width: f64,
    pub ellipse_rotation_deg: f64,
    pub shadow_radius: f64,
    pub labels: Vec<Label>,
}

impl CardFace {
    /// Describe the face for `number` on a `color` card in the standard frame.
    #[must_use]
    pub fn for_card(number: i32, color: CardColor) -> Self {
        Self::for_card_sized(number, color, CARD_SIZE)
    }

    /// Same as [`CardFace::for_card`] in a frame of `size`.
    #[must_use]
    pub fn for_card_sized(number: i32, color: CardColor, size: Size) -> Self {
        let text = number.to_string();
        let label = |slot, size| Label {
            text: text.clone(),
            slot,
            size,
            foreground: Rgb::WHITE,
            shadow: Rgb::BLACK,
            shadow_offset: LABEL_SHADOW_OFFSET,
        };

        Self {
            size,
            fill: color.into(),
            border: Rgb::WHITE,
            border_width: 8.0,
            corner_radius: 10.0,
            ellipse_stroke: Rgb::WHITE,
            ellipse_stroke_width: 10.0,
            ellipse_rotation_deg: -40.0,
            shadow_radius: 2.0,
            labels: vec![
                label(LabelSlot::TopLeading, LabelSize::Corner),
                label(LabelSlot::Center, LabelSize::Center),
                label(LabelSlot::BottomTrailing, LabelSize::Corner),
            ],
        }
    }

    /// Label in the given slot.
    #[must_use]
    pub fn label(&self, slot: LabelSlot) -> Option<&Label> {
        self.labels.iter().find(|l| l.slot == slot)
    }
}

impl From<&CardModel> for CardFace {
    fn from(card: &CardModel) -> Self {
        Self::for_card(card.number(), card.color())
    }
}
