//! Pointer tracking and proximity influence.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use crate::consts::MAX_INFLUENCE_DISTANCE;
use crate::geom::Point;

/// The most recent pointer position in viewport coordinates.
///
/// Only the latest sample matters; moves between two frames are overwritten,
/// never queued.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    position: Point,
}

impl PointerState {
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    /// Proximity of `point` to the pointer, in `[0, 1]`.
    #[must_use]
    pub fn influence(&self, point: Point) -> f64 {
        influence(point.distance_to(self.position))
    }
}

/// Linear falloff: 1 at distance 0, 0 at [`MAX_INFLUENCE_DISTANCE`] and beyond.
#[must_use]
pub fn influence(distance: f64) -> f64 {
    (1.0 - distance / MAX_INFLUENCE_DISTANCE).max(0.0)
}
