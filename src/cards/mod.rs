//! Cards: values and face descriptions.
//!
//! - `CardModel`: immutable card instance (id, number, color, offset)
//! - `CardSpec`: number and color without identity
//! - `CardFace`: what a renderer draws for a card

pub mod card;
pub mod face;

pub use card::{CardColor, CardModel, CardSpec};
pub use face::{CardFace, Label, LabelSize, LabelSlot, Rgb, CARD_SIZE};
