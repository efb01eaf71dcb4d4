//! Card zones on the table.
//!
//! ## Key Types
//!
//! - `HandStore`: the local player's cards, removal-on-play
//! - `CenterPileStore`: played cards, append-only
//! - `ZoneChange`: what listeners receive on every mutation

mod store;
pub mod hand;
pub mod pile;

pub use hand::HandStore;
pub use pile::CenterPileStore;
pub use store::{ListenerId, ZoneChange};
