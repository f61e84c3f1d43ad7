//! Frame driver
//!
//! Each frame steps the simulation once, then draws every body as a circle
//! followed by a blend for every unordered pair `(i, j)`, `i < j`, in
//! lexicographic order. Frames depend on the previous frame's state, so they
//! are produced strictly in sequence.

use crate::error::Result;
use crate::persistence::FrameStore;
use crate::renderer::{Color, DrawCommand};
use crate::settings::Settings;
use crate::sim::{Scene, tick};

/// Drawing commands for one simulation state
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Zero-based frame number
    pub index: u32,
    /// Drawn range of both graph axes
    pub scale: f64,
    /// Circles first, then blends
    pub commands: Vec<DrawCommand>,
    /// Pairs tested for blending, emitted or not
    pub blend_checks: usize,
}

impl Frame {
    pub fn circle_count(&self) -> usize {
        self.commands.iter().filter(|c| !c.is_blend()).count()
    }

    pub fn blend_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_blend()).count()
    }
}

/// Draw the scene as it stands, without stepping it
pub fn draw_scene(scene: &Scene, index: u32, scale: f64, color: Color) -> Frame {
    let bodies = &scene.bodies;
    let mut commands = Vec::with_capacity(bodies.len() * (bodies.len() + 1) / 2);

    for body in bodies {
        commands.push(DrawCommand::circle(body.pos, body.radius, color));
    }

    let mut blend_checks = 0;
    for (i, j) in scene.pairs() {
        blend_checks += 1;
        let (a, b) = (&bodies[i], &bodies[j]);
        if let Some(cmd) = DrawCommand::blend(a.pos, a.radius, b.pos, b.radius, color) {
            commands.push(cmd);
        }
    }

    Frame {
        index,
        scale,
        commands,
        blend_checks,
    }
}

/// Steps a scene and yields one frame per step
#[derive(Debug, Clone)]
pub struct FrameDriver {
    scene: Scene,
    scale: f64,
    color: Color,
    frames: u32,
    next_index: u32,
}

impl FrameDriver {
    pub fn new(scene: Scene, scale: f64, color: Color, frames: u32) -> Self {
        Self {
            scene,
            scale,
            color,
            frames,
            next_index: 0,
        }
    }

    /// Seed a fresh scene from settings
    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        let scene = Scene::new(seed, settings.boundary, settings.body_count);
        Self::new(scene, settings.scale, settings.color, settings.frames)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Frames left to produce
    pub fn remaining(&self) -> u32 {
        self.frames.saturating_sub(self.next_index)
    }

    /// Step the simulation once and draw the result
    pub fn advance(&mut self) -> Frame {
        tick(&mut self.scene);
        let frame = draw_scene(&self.scene, self.next_index, self.scale, self.color);
        self.next_index += 1;
        log::debug!(
            "frame {}: {} circles, {}/{} blends",
            frame.index,
            frame.circle_count(),
            frame.blend_count(),
            frame.blend_checks
        );
        frame
    }
}

impl Iterator for FrameDriver {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.next_index >= self.frames {
            return None;
        }
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for FrameDriver {}

/// Totals for a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u32,
    pub circles: usize,
    pub blends: usize,
}

/// Render every frame of a run into `store`
///
/// Stops at the first failed write; frames already written stay complete.
pub fn render_run(settings: &Settings, seed: u64, store: &FrameStore) -> Result<RunSummary> {
    settings.validate()?;

    let mut summary = RunSummary {
        seed,
        frames: 0,
        circles: 0,
        blends: 0,
    };
    for frame in FrameDriver::from_settings(settings, seed) {
        store.write(&frame)?;
        summary.frames += 1;
        summary.circles += frame.circle_count();
        summary.blends += frame.blend_count();
    }

    log::info!(
        "Rendered {} frames ({} circles, {} blends) with seed {}",
        summary.frames,
        summary.circles,
        summary.blends,
        seed
    );
    Ok(summary)
}
