pub mod detector;

pub use detector::{MOVEMENT_THRESHOLD, has_moved};
