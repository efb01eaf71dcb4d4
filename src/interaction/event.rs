//! Input events from the rendering/gesture layer.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;
use crate::core::geometry::{Point, Rect, Vector};

/// One event delivered to a table session.
///
/// Events arrive serialized on a single logical thread; each one is fully
/// processed before the next.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TableEvent {
    /// The pointer started dragging a hand card.
    DragStart { card: CardId },
    /// The pointer moved; `translation` is measured from the drag start.
    DragUpdate { card: CardId, translation: Vector },
    /// The pointer was released at `position` (global coordinates).
    DragEnd { card: CardId, position: Point },
    /// The center pile's frame is known (or has changed).
    GeometryReady { rect: Rect },
}

impl TableEvent {
    /// Card the event refers to, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match *self {
            Self::DragStart { card }
            | Self::DragUpdate { card, .. }
            | Self::DragEnd { card, .. } => Some(card),
            Self::GeometryReady { .. } => None,
        }
    }
}
