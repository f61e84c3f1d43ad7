//! Bezier outlines for 2D primitives

use glam::DVec2;

use crate::consts::KAPPA;

/// Points in a circle outline: one start point plus four cubic segments
pub const CIRCLE_POINTS: usize = 13;

/// Closed four-segment bezier approximation of a circle
///
/// Starts at `(x, y - r)` and walks through `(x + r, y)`, `(x, y + r)` and
/// `(x - r, y)` back to the start. Each segment is (handle, handle, anchor).
pub fn circle_outline(center: DVec2, radius: f64) -> [DVec2; CIRCLE_POINTS] {
    let DVec2 { x, y } = center;
    let s = radius;
    let k = KAPPA * s;

    [
        DVec2::new(x, y - s),
        // Top to right
        DVec2::new(x + k, y - s),
        DVec2::new(x + s, y - k),
        DVec2::new(x + s, y),
        // Right to bottom
        DVec2::new(x + s, y + k),
        DVec2::new(x + k, y + s),
        DVec2::new(x, y + s),
        // Bottom to left
        DVec2::new(x - k, y + s),
        DVec2::new(x - s, y + k),
        DVec2::new(x - s, y),
        // Left to top
        DVec2::new(x - s, y - k),
        DVec2::new(x - k, y - s),
        DVec2::new(x, y - s),
    ]
}
