//! Core table types: card ids, geometry, RNG, configuration.

pub mod entity;
pub mod geometry;
pub mod rng;
pub mod config;

pub use entity::{CardId, CardIdAllocator};
pub use geometry::{Point, Rect, Size, Vector};
pub use rng::TableRng;
pub use config::{OpeningDeal, TableConfig, DEFAULT_JITTER, MAX_JITTER};
