//! Table session: owns the stores and routes input events.
//!
//! A `TableSession` is the single writer of the hand and the center pile.
//! The rendering layer feeds it `TableEvent`s and reads back snapshots and
//! per-card drag offsets.
//!
//! ```
//! use uno_table::core::{Point, Rect, Size, TableConfig};
//! use uno_table::interaction::TableEvent;
//! use uno_table::TableSession;
//!
//! let mut session = TableSession::new(TableConfig::default()).unwrap();
//! session.handle(TableEvent::GeometryReady {
//!     rect: Rect::new(Point::new(100.0, 200.0), Size::new(190.0, 300.0)),
//! });
//!
//! let card = session.hand().iter().next().unwrap().id();
//! session.handle(TableEvent::DragStart { card });
//! session.handle(TableEvent::DragEnd { card, position: Point::new(150.0, 300.0) });
//!
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.hand.len(), 7);
//! assert_eq!(snapshot.center.len(), 2);
//! ```

use im::Vector as ImVector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{CardFace, CardModel};
use crate::core::config::TableConfig;
use crate::core::entity::{CardId, CardIdAllocator};
use crate::core::geometry::Vector;
use crate::error::Result;
use crate::interaction::{DragInteractionController, DragOutcome, DropZoneTracker, TableEvent};
use crate::zones::{CenterPileStore, HandStore, ListenerId, ZoneChange};

/// Read-only view of both stores at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub hand: ImVector<CardModel>,
    pub center: ImVector<CardModel>,
}

impl TableSnapshot {
    /// Total cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.center.len()
    }

    /// Compact binary encoding for handing to another thread or process.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// One local player's view of the table.
#[derive(Debug)]
pub struct TableSession {
    config: TableConfig,
    ids: CardIdAllocator,
    hand: HandStore,
    center: CenterPileStore,
    zone: DropZoneTracker,
    controller: DragInteractionController,
}

impl TableSession {
    /// Validate `config` and lay out its opening deal.
    pub fn new(config: TableConfig) -> Result<Self> {
        config.validate()?;

        let mut ids = CardIdAllocator::new();
        let center = CenterPileStore::from_cards(
            config
                .opening
                .center
                .iter()
                .map(|&spec| CardModel::from_spec(ids.alloc(), spec)),
        )?;
        let hand = HandStore::from_cards(
            config
                .opening
                .hand
                .iter()
                .map(|&spec| CardModel::from_spec(ids.alloc(), spec)),
        )?;

        debug!(
            seed = config.seed,
            hand = hand.len(),
            center = center.len(),
            "table session created"
        );

        Ok(Self {
            controller: DragInteractionController::from_config(&config),
            config,
            ids,
            hand,
            center,
            zone: DropZoneTracker::new(),
        })
    }

    /// Process one input event.
    ///
    /// Returns the outcome for `DragEnd`, `None` for every other event.
    pub fn handle(&mut self, event: TableEvent) -> Option<DragOutcome> {
        match event {
            TableEvent::DragStart { card } => {
                self.controller.on_drag_start(card);
                None
            }
            TableEvent::DragUpdate { card, translation } => {
                self.controller.on_drag_update(card, translation);
                None
            }
            TableEvent::DragEnd { card, position } => Some(self.controller.on_drag_end(
                card,
                position,
                &self.zone,
                &mut self.hand,
                &mut self.center,
            )),
            TableEvent::GeometryReady { rect } => {
                self.zone.update(rect);
                None
            }
        }
    }

    /// Process events in order, returning the outcomes of the drag ends.
    pub fn handle_all(&mut self, events: impl IntoIterator<Item = TableEvent>) -> Vec<DragOutcome> {
        events.into_iter().filter_map(|e| self.handle(e)).collect()
    }

    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            hand: self.hand.snapshot(),
            center: self.center.snapshot(),
        }
    }

    /// Drag offset to apply when drawing `card`: the translation for the
    /// card being dragged, zero otherwise.
    #[must_use]
    pub fn visual_offset(&self, card: CardId) -> Vector {
        self.controller.visual_offset(card)
    }

    /// Face to draw for `card`, sized to the configured card frame.
    ///
    /// Looks in the hand first, then the center pile.
    #[must_use]
    pub fn face(&self, card: CardId) -> Option<CardFace> {
        let model = self.hand.get(card).or_else(|| self.center.get(card))?;
        Some(CardFace::for_card_sized(
            model.number(),
            model.color(),
            self.config.card_size,
        ))
    }

    #[must_use]
    pub fn hand(&self) -> &HandStore {
        &self.hand
    }

    #[must_use]
    pub fn center(&self) -> &CenterPileStore {
        &self.center
    }

    #[must_use]
    pub fn drop_zone(&self) -> &DropZoneTracker {
        &self.zone
    }

    #[must_use]
    pub fn controller(&self) -> &DragInteractionController {
        &self.controller
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Next id the session would hand out.
    #[must_use]
    pub fn next_card_id(&self) -> CardId {
        self.ids.peek()
    }

    /// Subscribe to hand mutations.
    pub fn on_hand_change(&mut self, listener: impl FnMut(&ZoneChange) + 'static) -> ListenerId {
        self.hand.on_change(listener)
    }

    /// Subscribe to center pile mutations.
    pub fn on_center_change(&mut self, listener: impl FnMut(&ZoneChange) + 'static) -> ListenerId {
        self.center.on_change(listener)
    }

    pub fn remove_hand_listener(&mut self, id: ListenerId) -> bool {
        self.hand.remove_listener(id)
    }

    pub fn remove_center_listener(&mut self, id: ListenerId) -> bool {
        self.center.remove_listener(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardColor, CardSpec};
    use crate::core::config::OpeningDeal;
    use crate::core::geometry::{Point, Rect, Size};
    use crate::error::TableError;

    fn zone_event() -> TableEvent {
        TableEvent::GeometryReady {
            rect: Rect::new(Point::ORIGIN, Size::new(100.0, 100.0)),
        }
    }

    #[test]
    fn test_opening_deal_ids() {
        let session = TableSession::new(TableConfig::default()).unwrap();

        assert_eq!(session.center().len(), 1);
        assert_eq!(session.hand().len(), 8);
        // Center is dealt first.
        assert_eq!(session.center().top().unwrap().id(), CardId(0));
        assert_eq!(session.hand().iter().next().unwrap().id(), CardId(1));
        assert_eq!(session.next_card_id(), CardId(9));
        assert!(!session.drop_zone().is_ready());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = TableSession::new(TableConfig::new().with_jitter(-1.0)).unwrap_err();
        assert!(matches!(err, TableError::InvalidConfig(_)));
    }

    #[test]
    fn test_huge_jitter_rejected() {
        let err = TableSession::new(TableConfig::new().with_jitter(1e308)).unwrap_err();
        assert!(matches!(err, TableError::InvalidConfig(_)));
    }

    #[test]
    fn test_face_uses_configured_card_size() {
        let frame = Size::new(95.0, 150.0);
        let session = TableSession::new(TableConfig::new().with_card_size(frame)).unwrap();

        let center_face = session.face(CardId(0)).unwrap();
        assert_eq!(center_face.size, frame);
        assert_eq!(center_face, CardFace::for_card_sized(2, CardColor::Red, frame));
        assert_eq!(session.face(CardId(1)).unwrap().size, frame);
        assert!(session.face(CardId(99)).is_none());
    }

    #[test]
    fn test_handle_returns_outcome_only_for_end() {
        let mut session = TableSession::new(TableConfig::default()).unwrap();
        let card = CardId(1);

        assert_eq!(session.handle(zone_event()), None);
        assert_eq!(session.handle(TableEvent::DragStart { card }), None);
        assert_eq!(
            session.handle(TableEvent::DragUpdate { card, translation: Vector::new(1.0, 2.0) }),
            None
        );
        assert_eq!(session.visual_offset(card), Vector::new(1.0, 2.0));

        let outcome = session.handle(TableEvent::DragEnd { card, position: Point::new(10.0, 10.0) });
        assert!(outcome.unwrap().is_played());
        assert_eq!(session.visual_offset(card), Vector::ZERO);
    }

    #[test]
    fn test_snapshot_encode_decode() {
        let opening = OpeningDeal {
            center: vec![],
            hand: vec![CardSpec::new(7, CardColor::Red), CardSpec::new(3, CardColor::Blue)],
        };
        let mut session = TableSession::new(TableConfig::new().with_opening(opening)).unwrap();
        session.handle_all([
            zone_event(),
            TableEvent::DragStart { card: CardId(0) },
            TableEvent::DragEnd { card: CardId(0), position: Point::new(50.0, 50.0) },
        ]);

        let snapshot = session.snapshot();
        let bytes = snapshot.encode().unwrap();
        assert_eq!(TableSnapshot::decode(&bytes).unwrap(), snapshot);
        assert_eq!(snapshot.card_count(), 2);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            TableSnapshot::decode(&[0xff, 0xff, 0xff]),
            Err(TableError::Snapshot(_))
        ));
    }
}
