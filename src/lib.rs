//! # uno-table
//!
//! Interaction core for a digital Uno table: a hand, a center pile, a drop
//! zone and the drag-to-play gesture that moves cards between them.
//!
//! ## Design Principles
//!
//! 1. **Renderer-Agnostic**: No drawing or layout. The rendering layer feeds
//!    in pointer events and geometry, and reads back snapshots.
//!
//! 2. **Single Writer**: A `TableSession` is the only thing that mutates its
//!    stores. Events are processed one at a time, synchronously.
//!
//! 3. **Reproducible**: Random placement on the center pile comes from a
//!    seeded RNG, so a seed plus an event log replays exactly.
//!
//! ## Modules
//!
//! - `core`: Card ids, geometry, RNG, configuration
//! - `cards`: Card values and face descriptions
//! - `zones`: Hand and center pile stores with change listeners
//! - `interaction`: Drag state machine and drop zone
//! - `session`: Event routing and snapshots

pub mod core;
pub mod cards;
pub mod zones;
pub mod interaction;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    CardId, CardIdAllocator,
    Point, Rect, Size, Vector,
    TableRng,
    OpeningDeal, TableConfig,
};

pub use crate::cards::{CardColor, CardFace, CardModel, CardSpec};

pub use crate::zones::{CenterPileStore, HandStore, ListenerId, ZoneChange};

pub use crate::interaction::{
    DragInteractionController, DragOutcome, DragPhase, DragState,
    DropZoneTracker, TableEvent,
};

pub use crate::session::{TableSession, TableSnapshot};

pub use crate::error::{Result, TableError};
