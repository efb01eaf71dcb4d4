//! Error types.
//!
//! Drag events never fail: stale or mismatched events are ignored by the
//! controller. Errors only arise when building a table (bad configuration,
//! duplicate card ids) or when encoding snapshots.

use thiserror::Error;

use crate::core::entity::CardId;

/// Errors raised while configuring or snapshotting a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// A card with this id is already present in the store.
    #[error("card {0} is already present")]
    DuplicateCard(CardId),

    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Result alias for fallible table operations.
pub type Result<T> = std::result::Result<T, TableError>;
