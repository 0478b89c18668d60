use crate::core::data::{PositionUpdate, PositionUpdates};
use rayon::prelude::*;

/// Per-axis displacement a circle must exceed to count as moving.
pub const MOVEMENT_THRESHOLD: f64 = 0.005;

/// Batches at least this large are scanned on the rayon pool.
pub const PARALLEL_SCAN_MIN_UPDATES: usize = 2048;

/// Convergence test for one `move` result.
///
/// A circle is moving only when both `|delta.x|` and `|delta.y|` are strictly
/// greater than [`MOVEMENT_THRESHOLD`]. Motion along a single axis does not
/// count. An empty batch has not moved.
#[must_use]
pub fn has_moved(updates: &PositionUpdates) -> bool {
    if updates.len() >= PARALLEL_SCAN_MIN_UPDATES {
        updates.par_iter().any(|(_, update)| is_moving(update))
    } else {
        updates.values().any(is_moving)
    }
}

#[inline]
#[must_use]
pub fn is_moving(update: &PositionUpdate) -> bool {
    update.delta.x.abs() > MOVEMENT_THRESHOLD && update.delta.y.abs() > MOVEMENT_THRESHOLD
}
