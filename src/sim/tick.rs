//! Fixed step bounce simulation
//!
//! One tick reflects each body off the walls it has crossed, then moves it by
//! its (possibly flipped) velocity. There is no timestep: velocity is
//! displacement per tick.

use super::state::{Body, Boundary, Scene};

/// Reflect `body` off `boundary` and advance it one tick
///
/// Min and max checks on an axis are independent. A body past both walls of
/// one axis flips twice and keeps its original direction.
pub fn bounce(body: &mut Body, boundary: &Boundary) {
    let r = body.radius;

    if body.pos.x + r > boundary.max_x {
        body.vel.x = -body.vel.x;
    }
    if body.pos.x - r < boundary.min_x {
        body.vel.x = -body.vel.x;
    }
    if body.pos.y + r > boundary.max_y {
        body.vel.y = -body.vel.y;
    }
    if body.pos.y - r < boundary.min_y {
        body.vel.y = -body.vel.y;
    }

    body.pos += body.vel;
}

/// Advance every body in the scene by one tick
pub fn tick(scene: &mut Scene) {
    let boundary = scene.boundary;
    for body in scene.bodies.iter_mut() {
        bounce(body, &boundary);
    }
    scene.time_ticks += 1;

    if log::log_enabled!(log::Level::Trace) {
        for (i, body) in scene.bodies.iter().enumerate() {
            log::trace!(
                "tick {} body {}: pos=({:.3}, {:.3}) vel=({}, {}) r={}",
                scene.time_ticks,
                i,
                body.pos.x,
                body.pos.y,
                body.vel.x,
                body.vel.y,
                body.radius
            );
        }
    }
}
