//! Per-gesture drag state.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;
use crate::core::geometry::Vector;

/// Which card, if any, is being dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    Idle,
    Dragging(CardId),
}

/// Transient state of the current drag gesture.
///
/// `Default` is the idle state: no active card, zero translation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    pub active_card: Option<CardId>,
    pub translation: Vector,
}

impl DragState {
    /// Fresh state for a gesture on `card`.
    #[must_use]
    pub fn started(card: CardId) -> Self {
        Self {
            active_card: Some(card),
            translation: Vector::ZERO,
        }
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match self.active_card {
            Some(card) => DragPhase::Dragging(card),
            None => DragPhase::Idle,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active_card.is_none()
    }

    /// True if `card` is the card being dragged.
    #[must_use]
    pub fn is_active(&self, card: CardId) -> bool {
        self.active_card == Some(card)
    }

    /// Back to idle.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state = DragState::default();
        assert!(state.is_idle());
        assert_eq!(state.phase(), DragPhase::Idle);
        assert_eq!(state.translation, Vector::ZERO);
    }

    #[test]
    fn test_started_and_clear() {
        let mut state = DragState::started(CardId(4));
        assert_eq!(state.phase(), DragPhase::Dragging(CardId(4)));
        assert!(state.is_active(CardId(4)));
        assert!(!state.is_active(CardId(5)));

        state.translation = Vector::new(10.0, 20.0);
        state.clear();
        assert_eq!(state, DragState::default());
    }
}
