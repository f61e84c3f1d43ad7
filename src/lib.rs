//! Metaballs - bouncing circles fused by bezier outlines
//!
//! Core modules:
//! - `sim`: Deterministic bounce simulation (bodies, boundary, step)
//! - `renderer`: Bezier outline generation and jgraph emission
//! - `frame`: Per-frame sequencing of simulation and drawing
//! - `persistence`: One file per frame, written atomically
//! - `settings`: Run configuration (JSON + CLI overrides)

pub mod error;
pub mod frame;
pub mod persistence;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{MetaballsError, Result};
pub use frame::{Frame, FrameDriver};
pub use settings::Settings;

use glam::DVec2;

/// Drawing and simulation constants
pub mod consts {
    /// Bezier handle ratio for approximating a quarter circle
    /// (see spencermortensen.com/articles/bezier-circle)
    pub const KAPPA: f64 = 0.551_915_024_493_510_570_743_562_7;

    /// Reference simulation bounds: min x, max x, min y, max y
    pub const BOUNDARY_MIN_X: f64 = -915.0;
    pub const BOUNDARY_MAX_X: f64 = 1912.0;
    pub const BOUNDARY_MIN_Y: f64 = -1331.0;
    pub const BOUNDARY_MAX_Y: f64 = 2333.0;

    /// Drawn range of both graph axes. Independent of the boundary.
    pub const SCALE: f64 = 1000.0;

    /// Bodies in a default scene
    pub const BODY_COUNT: usize = 6;
    /// Frames rendered when none are requested
    pub const DEFAULT_FRAMES: u32 = 50;

    /// Blend interpolation between tangent spread and overlap spread
    pub const BLEND_SPREAD: f64 = 0.5;
    /// Upper bound on blend handle length (scaled by `BLEND_SPREAD`)
    pub const BLEND_HANDLE_SIZE: f64 = 2.4;
    /// Blend reach: circles fuse while `d <= r0 + BLEND_REACH * r1`
    pub const BLEND_REACH: f64 = 2.5;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(p0: DVec2, p1: DVec2) -> f64 {
    (p0 - p1).length()
}

/// Direction of the vector from `p1` to `p0`, in (-π, π]
///
/// Coincident points yield `atan2(0, 0) == 0`.
#[inline]
pub fn angle(p0: DVec2, p1: DVec2) -> f64 {
    (p0.y - p1.y).atan2(p0.x - p1.x)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Point at `radius` from `center` in direction `angle`
#[inline]
pub fn point_at(center: DVec2, angle: f64, radius: f64) -> DVec2 {
    center + polar_to_cartesian(radius, angle)
}
