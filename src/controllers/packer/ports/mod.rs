//! Port definitions for the packing controller.

pub mod frame_scheduler;

pub use frame_scheduler::{FrameHandle, FrameScheduler};
