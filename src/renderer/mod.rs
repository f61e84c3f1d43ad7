//! Drawing module
//!
//! Geometry generators produce `DrawCommand` values; `jgraph` turns them into
//! plot scripts. Nothing here reads rendered output back.

pub mod command;
pub mod jgraph;
pub mod metaball;
pub mod shapes;

pub use command::{Color, DrawCommand};
pub use jgraph::{Jgraph, render_frame, write_frame};
pub use metaball::{BLEND_POINTS, blend_outline, is_blend_eligible};
pub use shapes::{CIRCLE_POINTS, circle_outline};
