//! Run settings
//!
//! Loaded from an optional JSON file, then overridden from the command line.
//! Missing fields fall back to the reference run: 50 frames, 6 bodies, the
//! reference boundary and a 1000-unit canvas.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::consts::{BODY_COUNT, DEFAULT_FRAMES, SCALE};
use crate::error::{MetaballsError, Result};
use crate::renderer::Color;
use crate::sim::Boundary;

/// Everything that shapes a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frames to render
    pub frames: u32,
    /// RNG seed; a time-derived one is used when absent
    pub seed: Option<u64>,
    /// Bodies in the scene
    pub body_count: usize,
    /// Walls the bodies bounce off
    pub boundary: Boundary,
    /// Drawn range of both graph axes
    pub scale: f64,
    /// Fill color for circles and blends
    pub color: Color,
    /// Directory receiving `frameNNNNN.jgr` files
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            seed: None,
            body_count: BODY_COUNT,
            boundary: Boundary::default(),
            scale: SCALE,
            color: Color::BLACK,
            output_dir: PathBuf::from("jgrs"),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| MetaballsError::io(path, e))?;
        let settings = serde_json::from_str(&json).map_err(|source| MetaballsError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| MetaballsError::io(path, e))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Pretty JSON representation
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(MetaballsError::Serialize)
    }

    /// Reject settings that cannot describe a run
    pub fn validate(&self) -> Result<()> {
        if self.frames == 0 {
            return Err(MetaballsError::InvalidSettings(
                "frame count must be positive".into(),
            ));
        }
        if self.body_count == 0 {
            return Err(MetaballsError::InvalidSettings(
                "body count must be positive".into(),
            ));
        }
        let b = &self.boundary;
        let finite = [b.min_x, b.max_x, b.min_y, b.max_y]
            .iter()
            .all(|v| v.is_finite());
        if !finite || b.min_x >= b.max_x || b.min_y >= b.max_y {
            return Err(MetaballsError::InvalidSettings(format!(
                "boundary must be a non-empty rectangle, got x {}..{} y {}..{}",
                b.min_x, b.max_x, b.min_y, b.max_y
            )));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(MetaballsError::InvalidSettings(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        Ok(())
    }

    /// Configured seed, or one derived from the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(time_seed)
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()))
        .unwrap_or(0)
}
