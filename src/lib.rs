mod controllers;
mod core;
mod protocol;
mod worker;

pub use controllers::packer::{
    CirclePacker, ControllerError, ControllerState, FrameHandle, FrameScheduler, Listeners,
    LoopState, ManualFrameScheduler, PackerConfig,
};
pub use crate::core::data::{Bounds, Circle, CircleId, Point, PositionUpdate, PositionUpdates};
pub use crate::core::motion::{MOVEMENT_THRESHOLD, has_moved};
pub use crate::core::validation::{filter_valid_circles, is_bounds_valid, is_circle_valid};
pub use protocol::{
    CodecError, Command, DragMove, DragTarget, Event, Message, RadiusChange, WireFrame, decode,
    encode, encode_command, encode_event,
};
pub use worker::{
    InlineTransport, PackingEngine, ThreadedTransport, WorkerError, WorkerHost, WorkerProxy,
    WorkerTransport,
};
