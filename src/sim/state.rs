//! Scene state and core simulation types
//!
//! Everything needed to replay a run lives here: the seed, the boundary and
//! the bodies. Same seed, same bodies.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned rectangle the bodies bounce inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Boundary {
    fn default() -> Self {
        Self {
            min_x: BOUNDARY_MIN_X,
            max_x: BOUNDARY_MAX_X,
            min_y: BOUNDARY_MIN_Y,
            max_y: BOUNDARY_MAX_Y,
        }
    }
}

impl Boundary {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Random point in the middle 20%..80% of each axis, on whole-percent steps
    pub fn spawn_point(&self, rng: &mut Pcg32) -> DVec2 {
        // Spans truncate to whole units before scaling
        let x_span = self.width().trunc();
        let y_span = self.height().trunc();
        let x_pct = f64::from(rng.random_range(20..80_i32));
        let y_pct = f64::from(rng.random_range(20..80_i32));
        DVec2::new(
            x_pct * x_span / 100.0 + self.min_x,
            y_pct * y_span / 100.0 + self.min_y,
        )
    }
}

/// One simulated circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: DVec2,
    /// Fixed for the body's lifetime
    pub radius: f64,
    pub vel: DVec2,
}

impl Body {
    pub fn new(pos: DVec2, radius: f64, vel: DVec2) -> Self {
        Self {
            pos,
            radius: radius.max(0.0),
            vel,
        }
    }
}

/// Random starting velocity, whole units in x [-50, 50), y [-60, 60)
pub fn spawn_velocity(rng: &mut Pcg32) -> DVec2 {
    let x = f64::from(rng.random_range(-50..50_i32));
    let y = f64::from(rng.random_range(-60..60_i32));
    DVec2::new(x, y)
}

/// Random radius: large spread for even bodies, narrow band for odd ones
pub fn spawn_radius(rng: &mut Pcg32, index: usize) -> f64 {
    if index % 2 == 0 {
        f64::from(rng.random_range(50..450_i32))
    } else {
        f64::from(rng.random_range(150..200_i32))
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Run seed for reproducibility
    pub rng_state: RngState,
    /// Walls the bodies bounce off
    pub boundary: Boundary,
    /// Bodies in emission order
    pub bodies: Vec<Body>,
    /// Simulation steps taken so far
    pub time_ticks: u64,
}

impl Scene {
    /// Seed a scene of `body_count` bodies inside `boundary`
    ///
    /// Draw order is all positions, then all velocities, then all radii.
    pub fn new(seed: u64, boundary: Boundary, body_count: usize) -> Self {
        let rng_state = RngState::new(seed);
        let mut rng = rng_state.to_rng();

        let positions: Vec<DVec2> = (0..body_count)
            .map(|_| boundary.spawn_point(&mut rng))
            .collect();
        let velocities: Vec<DVec2> = (0..body_count).map(|_| spawn_velocity(&mut rng)).collect();
        let radii: Vec<f64> = (0..body_count).map(|i| spawn_radius(&mut rng, i)).collect();

        let bodies = positions
            .into_iter()
            .zip(velocities)
            .zip(radii)
            .map(|((pos, vel), radius)| Body::new(pos, radius, vel))
            .collect();

        Self::from_bodies(rng_state, boundary, bodies)
    }

    /// Build a scene from explicit bodies (tests, replays)
    pub fn from_bodies(rng_state: RngState, boundary: Boundary, bodies: Vec<Body>) -> Self {
        Self {
            rng_state,
            boundary,
            bodies,
            time_ticks: 0,
        }
    }

    /// Unordered pairs `(i, j)` with `i < j`, lexicographic
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.bodies.len();
        (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
    }
}
