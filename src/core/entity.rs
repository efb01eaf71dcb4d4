//! Card identification.
//!
//! Every card instance on the table has a unique `CardId`. Ids are handed out
//! by a `CardIdAllocator`, which never reuses a value. A card keeps its id when
//! it moves from the hand to the center pile.
//!
//! ```
//! use uno_table::core::CardIdAllocator;
//!
//! let mut ids = CardIdAllocator::new();
//! let a = ids.alloc();
//! let b = ids.alloc();
//! assert_ne!(a, b);
//! assert_eq!(ids.allocated(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Opaque identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Monotonic allocator for `CardId`s.
///
/// One allocator per session. Ids start at 0 and increase by one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh id.
    ///
    /// Panics if the id space is exhausted.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next = self
            .next
            .checked_add(1)
            .expect("card id space exhausted");
        id
    }

    /// Peek at the next id without allocating it.
    #[must_use]
    pub const fn peek(&self) -> CardId {
        CardId(self.next)
    }

    /// Number of ids allocated so far.
    #[must_use]
    pub const fn allocated(&self) -> u32 {
        self.next
    }
}
