use crate::core::data::PositionUpdates;
use serde::{Deserialize, Serialize};

/// Lifecycle notifications. Only `Move` actually comes from the worker;
/// `MoveStart` and `MoveEnd` are raised locally by the loop controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message", rename_all = "lowercase")]
pub enum Event {
    MoveStart,
    Move(PositionUpdates),
    MoveEnd,
}

impl Event {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MoveStart => "movestart",
            Self::Move(_) => "move",
            Self::MoveEnd => "moveend",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::{CircleId, Point, PositionUpdate};

    #[test]
    fn test_synthetic_events_are_bare_tags() {
        assert_eq!(
            serde_json::to_string(&Event::MoveStart).unwrap(),
            r#"{"type":"movestart"}"#
        );
        assert_eq!(
            serde_json::to_string(&Event::MoveEnd).unwrap(),
            r#"{"type":"moveend"}"#
        );
    }

    #[test]
    fn test_move_payload_is_keyed_by_circle_id() {
        let mut updates = PositionUpdates::new();
        updates.insert(
            CircleId::new("a"),
            PositionUpdate::new(Point::new(1.0, 2.0), Point::new(0.5, -0.5)),
        );

        let value = serde_json::to_value(Event::Move(updates)).unwrap();

        assert_eq!(value["type"], "move");
        assert_eq!(value["message"]["a"]["delta"]["y"], -0.5);
        assert_eq!(Event::Move(PositionUpdates::new()).kind(), "move");
    }
}
