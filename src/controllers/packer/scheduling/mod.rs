pub mod manual;

pub use manual::ManualFrameScheduler;
