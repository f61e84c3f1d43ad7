//! Deterministic simulation module
//!
//! Bodies bounce off the walls of an axis-aligned boundary. This module must
//! stay pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (by body index)
//! - No rendering or I/O dependencies

pub mod state;
pub mod tick;

pub use state::{Body, Boundary, RngState, Scene};
pub use tick::{bounce, tick};
