//! Wire protocol between the controller and the background packing worker.

pub mod codec;
pub mod command;
pub mod errors;
pub mod event;
pub mod message;

pub use codec::{WireFrame, decode, encode, encode_command, encode_event};
pub use command::{Command, DragMove, DragTarget, RadiusChange};
pub use errors::CodecError;
pub use event::Event;
pub use message::Message;
