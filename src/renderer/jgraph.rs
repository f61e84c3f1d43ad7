//! jgraph plot-script emission
//!
//! Each frame becomes one self-contained script: a `newgraph` whose axes span
//! `0..scale` without being drawn, followed by one filled bezier polygon per
//! command. Numbers print with six decimals.

use std::fmt;
use std::io;

use glam::DVec2;

use super::command::{Color, DrawCommand};
use crate::frame::Frame;

/// Display adapter that renders a frame as a jgraph script
pub struct Jgraph<'a>(pub &'a Frame);

impl fmt::Display for Jgraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = self.0;
        writeln!(f, "newgraph")?;
        writeln!(f, "xaxis min 0 max {:.6} nodraw", frame.scale)?;
        writeln!(f, "yaxis min 0 max {:.6} nodraw", frame.scale)?;
        for command in &frame.commands {
            write_command(f, command)?;
        }
        Ok(())
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, color: Color) -> fmt::Result {
    writeln!(
        f,
        "newline bezier poly pcfill {:.6} {:.6} {:.6} pts",
        color.r, color.g, color.b
    )
}

#[inline]
fn write_point(f: &mut fmt::Formatter<'_>, p: DVec2) -> fmt::Result {
    write!(f, "{:.6} {:.6}", p.x, p.y)
}

fn write_command(f: &mut fmt::Formatter<'_>, command: &DrawCommand) -> fmt::Result {
    write_header(f, command.color())?;
    match command {
        DrawCommand::Circle { points, .. } => {
            // Start point alone, then one segment per line
            write_point(f, points[0])?;
            writeln!(f)?;
            for segment in points[1..].chunks(3) {
                for (i, p) in segment.iter().enumerate() {
                    if i > 0 {
                        write!(f, "   ")?;
                    }
                    write_point(f, *p)?;
                }
                writeln!(f)?;
            }
        }
        DrawCommand::Blend { points, .. } => {
            for p in points {
                write_point(f, *p)?;
                writeln!(f)?;
            }
        }
    }
    Ok(())
}

/// Render a frame to a jgraph script in memory
pub fn render_frame(frame: &Frame) -> String {
    Jgraph(frame).to_string()
}

/// Stream a frame as a jgraph script
pub fn write_frame<W: io::Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    write!(out, "{}", Jgraph(frame))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with(commands: Vec<DrawCommand>) -> Frame {
        Frame {
            index: 0,
            scale: 1000.0,
            commands,
            blend_checks: 0,
        }
    }

    #[test]
    fn test_empty_frame_header() {
        let text = render_frame(&frame_with(Vec::new()));
        assert_eq!(
            text,
            "newgraph\nxaxis min 0 max 1000.000000 nodraw\nyaxis min 0 max 1000.000000 nodraw\n"
        );
    }

    #[test]
    fn test_circle_layout() {
        let cmd = DrawCommand::circle(DVec2::new(0.0, 0.0), 1.0, Color::new(0.5, 0.0, 1.0));
        let text = render_frame(&frame_with(vec![cmd]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3 + 1 + 5);
        assert_eq!(lines[3], "newline bezier poly pcfill 0.500000 0.000000 1.000000 pts");
        assert_eq!(lines[4], "0.000000 -1.000000");
        assert_eq!(
            lines[5],
            "0.551915 -1.000000   1.000000 -0.551915   1.000000 0.000000"
        );
        assert_eq!(
            lines[8],
            "-1.000000 -0.551915   -0.551915 -1.000000   0.000000 -1.000000"
        );
    }

    #[test]
    fn test_blend_layout() {
        let cmd = DrawCommand::blend(
            DVec2::ZERO,
            100.0,
            DVec2::new(150.0, 0.0),
            100.0,
            Color::BLACK,
        )
        .expect("eligible pair");
        let text = render_frame(&frame_with(vec![cmd]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3 + 1 + 10);
        assert_eq!(lines[3], "newline bezier poly pcfill 0.000000 0.000000 0.000000 pts");
        // Pinch point twice in a row
        assert_eq!(lines[8], "250.000000 0.000000");
        assert_eq!(lines[8], lines[9]);
    }

    #[test]
    fn test_write_frame_matches_render() {
        let frame = frame_with(vec![DrawCommand::circle(
            DVec2::new(12.5, -7.25),
            40.0,
            Color::BLACK,
        )]);
        let mut buf = Vec::new();
        write_frame(&mut buf, &frame).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_frame(&frame));
    }
}
