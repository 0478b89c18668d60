use crate::core::data::{Bounds, Circle, CircleId, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusChange {
    pub id: CircleId,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragTarget {
    pub id: CircleId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragMove {
    pub id: CircleId,
    pub position: Point,
}

/// Controller to worker instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message", rename_all = "lowercase")]
pub enum Command {
    AddCircles(Vec<Circle>),
    RemoveCircle(CircleId),
    Radius(RadiusChange),
    Bounds(Bounds),
    Target(Point),
    CenteringPasses(u32),
    CollisionPasses(u32),
    Damping(f64),
    Update,
    DragStart(DragTarget),
    Drag(DragMove),
    DragEnd(DragTarget),
}

impl Command {
    /// The `type` tag this command carries on the wire.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddCircles(_) => "addcircles",
            Self::RemoveCircle(_) => "removecircle",
            Self::Radius(_) => "radius",
            Self::Bounds(_) => "bounds",
            Self::Target(_) => "target",
            Self::CenteringPasses(_) => "centeringpasses",
            Self::CollisionPasses(_) => "collisionpasses",
            Self::Damping(_) => "damping",
            Self::Update => "update",
            Self::DragStart(_) => "dragstart",
            Self::Drag(_) => "drag",
            Self::DragEnd(_) => "dragend",
        }
    }

    /// Commands that change the packing and therefore restart the loop.
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::AddCircles(_)
                | Self::RemoveCircle(_)
                | Self::Radius(_)
                | Self::Bounds(_)
                | Self::Target(_)
                | Self::DragStart(_)
                | Self::Drag(_)
                | Self::DragEnd(_)
        )
    }
}
