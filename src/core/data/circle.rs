use crate::core::data::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned circle identity. Serialized as a bare string on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CircleId(String);

impl CircleId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CircleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CircleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CircleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&CircleId> for CircleId {
    fn from(value: &CircleId) -> Self {
        value.clone()
    }
}

impl From<&Circle> for CircleId {
    fn from(circle: &Circle) -> Self {
        circle.id.clone()
    }
}

/// A circle as handed over to the background computation. Once added, the
/// worker owns its state; the controller keeps no copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub id: CircleId,
    pub radius: f64,
    pub position: Point,
}

impl Circle {
    #[must_use]
    pub fn new(id: impl Into<CircleId>, radius: f64, position: Point) -> Self {
        Self {
            id: id.into(),
            radius,
            position,
        }
    }
}
