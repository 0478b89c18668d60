//! Packing controller: the animation-loop state machine around a background
//! packing worker.
//!
//! # Architecture
//!
//! - **Input**: host calls on [`CirclePacker`] and ticks from a [`FrameScheduler`]
//! - **Output**: [`Listeners`] callbacks (`movestart`, `move`, `moveend`)
//! - **Boundary**: commands and results cross through a `WorkerProxy`

mod config;
mod controller;
mod errors;
mod listeners;
pub mod ports;
pub mod scheduling;
mod state;
#[cfg(test)]
mod test_support;

pub use config::PackerConfig;
pub use controller::CirclePacker;
pub use errors::ControllerError;
pub use listeners::Listeners;
pub use ports::{FrameHandle, FrameScheduler};
pub use scheduling::ManualFrameScheduler;
pub use state::{ControllerState, LoopState};
