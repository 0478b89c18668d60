pub mod bounds;
pub mod circle;
pub mod point;
pub mod position_update;

pub use bounds::Bounds;
pub use circle::{Circle, CircleId};
pub use point::Point;
pub use position_update::{PositionUpdate, PositionUpdates};
