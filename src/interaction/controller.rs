//! Drag-to-play state machine.
//!
//! ## States
//!
//! - `Idle`: nothing is being dragged
//! - `Dragging(card)`: one card follows the pointer
//!
//! `on_drag_start` enters `Dragging` (replacing any drag in progress),
//! `on_drag_update` moves the card, `on_drag_end` returns to `Idle` and, if
//! the pointer was released inside the drop zone, moves the card from the
//! hand to the center pile with a fresh random offset.
//!
//! Updates and ends naming any card other than the active one are stale and
//! ignored without touching any state.
//!
//! ```
//! use uno_table::cards::{CardColor, CardModel};
//! use uno_table::core::{CardId, Point, Rect, Size, TableRng, Vector};
//! use uno_table::interaction::{DragInteractionController, DragOutcome, DropZoneTracker};
//! use uno_table::zones::{CenterPileStore, HandStore};
//!
//! let a = CardModel::new(CardId(0), 7, CardColor::Red);
//! let mut hand = HandStore::from_cards([a]).unwrap();
//! let mut center = CenterPileStore::new();
//! let zone = DropZoneTracker::with_rect(Rect::new(Point::ORIGIN, Size::new(100.0, 100.0)));
//! let mut controller = DragInteractionController::new(TableRng::new(1), 15.0);
//!
//! controller.on_drag_start(a.id());
//! controller.on_drag_update(a.id(), Vector::new(20.0, -30.0));
//! let outcome = controller.on_drag_end(a.id(), Point::new(50.0, 50.0), &zone, &mut hand, &mut center);
//!
//! assert!(matches!(outcome, DragOutcome::Played(_)));
//! assert!(hand.is_empty());
//! assert_eq!(center.top().unwrap().id(), a.id());
//! ```

use tracing::{debug, trace, warn};

use super::drag::{DragPhase, DragState};
use super::drop_zone::DropZoneTracker;
use crate::cards::CardModel;
use crate::core::config::TableConfig;
use crate::core::entity::CardId;
use crate::core::geometry::{Point, Vector};
use crate::core::rng::TableRng;
use crate::zones::{CenterPileStore, HandStore};

/// Result of a drag-end event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    /// The card was released in the drop zone and now sits on the center pile.
    Played(CardModel),
    /// Released outside the drop zone; the card stays in hand.
    Missed,
    /// Stale event, or the active card could not be moved. Nothing changed.
    Ignored,
}

impl DragOutcome {
    #[must_use]
    pub fn is_played(&self) -> bool {
        matches!(self, Self::Played(_))
    }
}

/// Turns pointer-drag events into hand → center pile moves.
#[derive(Clone, Debug)]
pub struct DragInteractionController {
    state: DragState,
    rng: TableRng,
    jitter: f64,
}

impl DragInteractionController {
    /// Create an idle controller. Played cards get offsets in `[-jitter, jitter]`.
    #[must_use]
    pub fn new(rng: TableRng, jitter: f64) -> Self {
        Self {
            state: DragState::default(),
            rng,
            jitter,
        }
    }

    /// Create an idle controller seeded from `config`.
    #[must_use]
    pub fn from_config(config: &TableConfig) -> Self {
        Self::new(TableRng::new(config.seed), config.jitter)
    }

    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn jitter(&self) -> f64 {
        self.jitter
    }

    /// Begin dragging `card`.
    ///
    /// A drag already in progress is abandoned; its card stays where it was.
    pub fn on_drag_start(&mut self, card: CardId) {
        if let Some(previous) = self.state.active_card {
            if previous != card {
                debug!(%previous, %card, "drag replaced before release");
            }
        }
        trace!(%card, "drag started");
        self.state = DragState::started(card);
    }

    /// Record the pointer translation for the active card.
    ///
    /// Returns false (and changes nothing) if `card` is not the active card.
    pub fn on_drag_update(&mut self, card: CardId, translation: Vector) -> bool {
        if !self.state.is_active(card) {
            trace!(%card, "ignoring stale drag update");
            return false;
        }
        self.state.translation = translation;
        true
    }

    /// Release the active card at `position`.
    ///
    /// On a hit a copy of the card with a fresh offset is appended to
    /// `center` and the card is then removed from `hand`. Drag state is cleared whether or not
    /// the card was played. Stale events change nothing.
    pub fn on_drag_end(
        &mut self,
        card: CardId,
        position: Point,
        zone: &DropZoneTracker,
        hand: &mut HandStore,
        center: &mut CenterPileStore,
    ) -> DragOutcome {
        if !self.state.is_active(card) {
            trace!(%card, "ignoring stale drag end");
            return DragOutcome::Ignored;
        }
        self.state.clear();

        if !zone.contains(position) {
            debug!(%card, x = position.x, y = position.y, "released outside drop zone");
            return DragOutcome::Missed;
        }

        let Some(&held) = hand.get(card) else {
            warn!(%card, "dropped card is not in hand");
            return DragOutcome::Ignored;
        };

        // Append before removing: a rejected append leaves both stores untouched.
        let played = held.played_with_offset(self.rng.jitter(self.jitter));
        if let Err(err) = center.append(played) {
            warn!(%card, %err, "center pile rejected played card");
            return DragOutcome::Ignored;
        }
        let removed = hand.remove(card);
        debug_assert!(removed.is_some());

        debug!(
            %card,
            number = played.number(),
            color = %played.color(),
            dx = played.offset().dx,
            dy = played.offset().dy,
            "card played to center pile"
        );
        DragOutcome::Played(played)
    }

    /// Offset at which the renderer should draw `card` in the hand.
    ///
    /// The drag translation for the active card, zero for every other card.
    #[must_use]
    pub fn visual_offset(&self, card: CardId) -> Vector {
        if self.state.is_active(card) {
            self.state.translation
        } else {
            Vector::ZERO
        }
    }
}
