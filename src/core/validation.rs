//! Input guards applied before anything crosses the worker boundary.
//!
//! Both checks mirror the host-facing contract: they only reject data the
//! worker could not interpret at all. Range checks such as positive bounds
//! belong to the packing engine.

use crate::core::data::{Bounds, Circle};

/// A circle is forwarded only with a non-empty id, a truthy radius and a
/// numeric position.
///
/// The radius test is truthiness, not positivity: `0.0` and `NaN` are
/// rejected, and so are the infinities, which have no JSON form. Any other
/// value (negative included) passes.
#[must_use]
pub fn is_circle_valid(circle: &Circle) -> bool {
    !circle.id.is_empty() && is_truthy(circle.radius) && circle.position.is_numeric()
}

/// Bounds only need finite dimensions here.
#[must_use]
pub fn is_bounds_valid(bounds: &Bounds) -> bool {
    bounds.width.is_finite() && bounds.height.is_finite()
}

/// Keeps the valid members of a batch in their original order.
#[must_use]
pub fn filter_valid_circles(circles: &[Circle]) -> Vec<Circle> {
    circles
        .iter()
        .filter(|circle| is_circle_valid(circle))
        .cloned()
        .collect()
}

fn is_truthy(value: f64) -> bool {
    value != 0.0 && value.is_finite()
}
