//! Drawing commands handed to the external renderer
//!
//! Commands are plain values: built fresh each frame, serialized, dropped.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::metaball::{BLEND_POINTS, blend_outline};
use super::shapes::{CIRCLE_POINTS, circle_outline};

/// Fill color, passed through to the renderer untouched
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// A filled closed bezier polygon request
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Full circle: start point, then four (handle, handle, anchor) groups
    Circle {
        center: DVec2,
        radius: f64,
        color: Color,
        points: [DVec2; CIRCLE_POINTS],
    },
    /// Fused neck between two circles, pinched at `points[4] == points[5]`
    Blend {
        centers: [DVec2; 2],
        radii: [f64; 2],
        color: Color,
        points: [DVec2; BLEND_POINTS],
    },
}

impl DrawCommand {
    pub fn circle(center: DVec2, radius: f64, color: Color) -> Self {
        DrawCommand::Circle {
            center,
            radius,
            color,
            points: circle_outline(center, radius),
        }
    }

    /// `None` when the two circles should not visually fuse
    pub fn blend(
        center0: DVec2,
        radius0: f64,
        center1: DVec2,
        radius1: f64,
        color: Color,
    ) -> Option<Self> {
        let points = blend_outline(center0, radius0, center1, radius1)?;
        Some(DrawCommand::Blend {
            centers: [center0, center1],
            radii: [radius0, radius1],
            color,
            points,
        })
    }

    pub fn color(&self) -> Color {
        match self {
            DrawCommand::Circle { color, .. } | DrawCommand::Blend { color, .. } => *color,
        }
    }

    pub fn points(&self) -> &[DVec2] {
        match self {
            DrawCommand::Circle { points, .. } => points,
            DrawCommand::Blend { points, .. } => points,
        }
    }

    pub fn is_blend(&self) -> bool {
        matches!(self, DrawCommand::Blend { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_command_carries_inputs() {
        let cmd = DrawCommand::circle(DVec2::new(1.0, 2.0), 3.0, Color::new(0.1, 0.2, 0.3));
        assert!(!cmd.is_blend());
        assert_eq!(cmd.color(), Color::new(0.1, 0.2, 0.3));
        assert_eq!(cmd.points().len(), CIRCLE_POINTS);
        assert_eq!(cmd.points()[0], DVec2::new(1.0, -1.0));
    }

    #[test]
    fn test_blend_command_none_when_ineligible() {
        let far = DrawCommand::blend(DVec2::ZERO, 10.0, DVec2::new(1000.0, 0.0), 10.0, Color::BLACK);
        assert!(far.is_none());

        let near = DrawCommand::blend(DVec2::ZERO, 100.0, DVec2::new(150.0, 0.0), 100.0, Color::BLACK)
            .expect("eligible pair");
        assert!(near.is_blend());
        assert_eq!(near.points().len(), BLEND_POINTS);
        match near {
            DrawCommand::Blend { centers, radii, .. } => {
                assert_eq!(centers, [DVec2::ZERO, DVec2::new(150.0, 0.0)]);
                assert_eq!(radii, [100.0, 100.0]);
            }
            DrawCommand::Circle { .. } => panic!("expected blend"),
        }
    }
}
