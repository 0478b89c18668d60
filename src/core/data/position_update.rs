use crate::core::data::circle::CircleId;
use crate::core::data::point::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where a circle is now and how far it travelled since the previous update.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub position: Point,
    pub delta: Point,
}

impl PositionUpdate {
    #[must_use]
    pub const fn new(position: Point, delta: Point) -> Self {
        Self { position, delta }
    }

    #[must_use]
    pub const fn stationary(position: Point) -> Self {
        Self {
            position,
            delta: Point { x: 0.0, y: 0.0 },
        }
    }
}

/// One `move` result: every circle the worker knows about, keyed by id.
pub type PositionUpdates = HashMap<CircleId, PositionUpdate>;
