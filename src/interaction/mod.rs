//! Pointer interaction: drag state, drop zone and the drag-to-play controller.
//!
//! ## Key Types
//!
//! - `DragInteractionController`: Idle/Dragging state machine
//! - `DropZoneTracker`: current play-target rectangle
//! - `DragState`: active card and translation of the current gesture
//! - `TableEvent`: input events from the gesture layer

pub mod drag;
pub mod drop_zone;
pub mod controller;
pub mod event;

pub use drag::{DragPhase, DragState};
pub use drop_zone::DropZoneTracker;
pub use controller::{DragInteractionController, DragOutcome};
pub use event::TableEvent;
