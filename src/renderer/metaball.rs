//! Metaball necks between pairs of circles
//!
//! Two circles close enough to each other are joined by a closed bezier
//! outline: two anchors on each circle, four handles, and a pinch point on
//! the second circle where the two halves of the outline meet.
//!
//! The shape is decided by three angles per side:
//! - the overlap half-angle `u` (law of cosines, zero when the circles are
//!   apart),
//! - the tangent spread `max_spread` between the outer tangent and the line
//!   of centers,
//! - a fixed interpolation `BLEND_SPREAD` between the two.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::consts::{BLEND_HANDLE_SIZE, BLEND_REACH, BLEND_SPREAD};
use crate::{angle, distance, point_at};

/// Points in a blend outline
pub const BLEND_POINTS: usize = 10;

/// Whether circles with these radii, `d` apart, produce a blend outline
///
/// The reach test is deliberately asymmetric: only `radius1` is scaled.
pub fn is_blend_eligible(d: f64, radius0: f64, radius1: f64) -> bool {
    if radius0 == 0.0 || radius1 == 0.0 {
        return false;
    }
    if d > radius0 + radius1 * BLEND_REACH {
        return false;
    }
    // One circle swallows the other: no seam to draw. Also covers d == 0
    // for equal radii.
    if d <= (radius0 - radius1).abs() {
        return false;
    }
    d > 0.0
}

/// `acos` that tolerates rounding just outside [-1, 1]
#[inline]
fn acos_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

/// Closed outline fusing circle 0 into circle 1
///
/// Returns `[p0, h0, h2, p2, edge, edge, p3, h3, h1, p1]`, or `None` when the
/// pair is not eligible. The duplicated `edge` forces both halves of the
/// curve through the same point on circle 1.
pub fn blend_outline(
    point0: DVec2,
    radius0: f64,
    point1: DVec2,
    radius1: f64,
) -> Option<[DVec2; BLEND_POINTS]> {
    let d = distance(point0, point1);
    if !is_blend_eligible(d, radius0, radius1) {
        return None;
    }

    let v = BLEND_SPREAD;
    let (r0, r1) = (radius0, radius1);

    let (u0, u1) = if d < r0 + r1 {
        (
            acos_clamped((r0 * r0 + d * d - r1 * r1) / (2.0 * r0 * d)),
            acos_clamped((r1 * r1 + d * d - r0 * r0) / (2.0 * r1 * d)),
        )
    } else {
        (0.0, 0.0)
    };

    let angle_between = angle(point1, point0);
    let max_spread = acos_clamped((r0 - r1) / d);

    let angle0 = angle_between + u0 + (max_spread - u0) * v;
    let angle1 = angle_between - u0 - (max_spread - u0) * v;
    let angle2 = angle_between + PI - u1 - (PI - u1 - max_spread) * v;
    let angle3 = angle_between - PI + u1 + (PI - u1 - max_spread) * v;

    let p0 = point_at(point0, angle0, r0);
    let p1 = point_at(point0, angle1, r0);
    let p2 = point_at(point1, angle2, r1);
    let p3 = point_at(point1, angle3, r1);

    // Handle length: capped by the handle size, the anchor gap and the
    // center gap, each relative to the combined radius
    let mut d2 = (v * BLEND_HANDLE_SIZE).min(distance(p0, p2) / (r0 + r1));
    d2 *= (d * 2.0 / (r0 + r1)).min(1.0);

    let hr0 = r0 * d2;
    let hr1 = r1 * d2;

    let h0 = point_at(p0, angle0 - FRAC_PI_2, hr0);
    let h1 = point_at(p1, angle1 + FRAC_PI_2, hr0);
    let h2 = point_at(p2, angle2 + FRAC_PI_2, hr1);
    let h3 = point_at(p3, angle3 - FRAC_PI_2, hr1);

    let edge = point_at(point1, angle(point1, point0), r1);

    Some([p0, h0, h2, p2, edge, edge, p3, h3, h1, p1])
}
