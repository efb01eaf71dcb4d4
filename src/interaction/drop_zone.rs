//! Drop zone tracking.
//!
//! The renderer reports the center pile's frame (in global coordinates)
//! once it has been laid out, and again whenever it moves. Until the first
//! report there is no drop zone and nothing can be played.

use tracing::debug;

use crate::core::geometry::{Point, Rect};

/// Current play-target rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DropZoneTracker {
    rect: Option<Rect>,
}

impl DropZoneTracker {
    /// A tracker with no geometry yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracker that already knows its rectangle.
    #[must_use]
    pub fn with_rect(rect: Rect) -> Self {
        Self { rect: Some(rect) }
    }

    /// Record new geometry from the rendering layer.
    pub fn update(&mut self, rect: Rect) {
        debug!(
            min_x = rect.min_x(),
            min_y = rect.min_y(),
            max_x = rect.max_x(),
            max_y = rect.max_y(),
            "drop zone geometry updated"
        );
        self.rect = Some(rect);
    }

    /// The current rectangle, if reported.
    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.rect.is_some()
    }

    /// Whether `point` lies in the drop zone, edges included.
    ///
    /// Always false before geometry has been reported.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.rect.is_some_and(|rect| rect.contains(point))
    }
}
