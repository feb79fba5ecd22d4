//! Mapping between user coordinates and the drawing surface.
//!
//! User coordinates have their origin in the middle of the canvas with y
//! pointing up, screen coordinates start at the top left with y pointing down.
//! Curves are evaluated on the mapped (screen) control points.
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::control_points::ControlPointSequence;
use crate::point::ControlPoint;
use crate::NativeFloat;

/// Default spacing of the background grid in pixels.
pub const CELL_SIZE: NativeFloat = 15.75;

/// Vertical offset of the drawn horizontal axis relative to the canvas center.
pub const AXIS_OFFSET: NativeFloat = 5.0;

/// Upper bound for the number of background grid lines.
pub const MAX_GRID_LINES: usize = 10_000;

/// A straight line between two screen positions.
pub type Segment = [(NativeFloat, NativeFloat); 2];

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub cell_size: NativeFloat,
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas {
            width: 630,
            height: 630,
            cell_size: CELL_SIZE,
        }
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Canvas {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn center(&self) -> ControlPoint {
        ControlPoint::new(
            NativeFloat::from(self.width) / 2.0,
            NativeFloat::from(self.height) / 2.0,
        )
    }

    pub fn to_screen(&self, p: ControlPoint) -> ControlPoint {
        ControlPoint::new(p.x, -p.y) + self.center()
    }

    pub fn to_user(&self, p: ControlPoint) -> ControlPoint {
        let d = p - self.center();
        ControlPoint::new(d.x, -d.y)
    }

    /// Control values per axis in screen coordinates.
    pub fn screen_axes(&self, points: &ControlPointSequence) -> (Vec<NativeFloat>, Vec<NativeFloat>) {
        points.axes_with(|p| self.to_screen(p))
    }

    /// Grid lines every `cell_size` pixels starting at 0, followed by the two axes.
    /// A grid denser than `MAX_GRID_LINES` is left out, the axes are still drawn.
    pub fn grid_lines(&self) -> Vec<Segment> {
        let w = NativeFloat::from(self.width);
        let h = NativeFloat::from(self.height);
        let mut lines = Vec::new();
        let count = (h / self.cell_size).floor() + (w / self.cell_size).floor() + 2.0;
        if self.cell_size > 0.0 && count > MAX_GRID_LINES as NativeFloat {
            warn!(
                cell_size = self.cell_size,
                max = MAX_GRID_LINES,
                "grid too dense, drawing the axes only"
            );
        } else if self.cell_size > 0.0 {
            lines.extend(
                steps(self.cell_size, h)
                    .map(|y| [(0.0, y), (w, y)])
                    .chain(steps(self.cell_size, w).map(|x| [(x, 0.0), (x, h)])),
            );
        }
        let center = self.center();
        lines.push([(center.x, 0.0), (center.x, h)]);
        lines.push([(0.0, center.y + AXIS_OFFSET), (w, center.y + AXIS_OFFSET)]);
        lines
    }
}

/// 0, step, 2 * step, ... up to and including `limit`.
fn steps(step: NativeFloat, limit: NativeFloat) -> impl Iterator<Item = NativeFloat> {
    (0u32..)
        .map(move |i| NativeFloat::from(i) * step)
        .take_while(move |v| *v <= limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn screen_mapping_round_trips() {
        let canvas = Canvas::new(800, 600);
        let p = ControlPoint::new(-120.0, 75.5);
        let s = canvas.to_screen(p);
        assert_eq!(s, ControlPoint::new(280.0, 224.5));
        let back = canvas.to_user(s);
        assert!((back - p).x.abs() < EPSILON && (back - p).y.abs() < EPSILON);
        assert_eq!(canvas.to_screen(ControlPoint::default()), canvas.center());
    }

    #[test]
    fn grid_covers_the_canvas() {
        let canvas = Canvas::default();
        let lines = canvas.grid_lines();
        // 630 / 15.75 = 40 cells, so 41 lines per direction plus both axes
        assert_eq!(lines.len(), 41 + 41 + 2);
        let horizontal_axis = lines[lines.len() - 1];
        assert_eq!(horizontal_axis[0].1, 320.0);
        let vertical_axis = lines[lines.len() - 2];
        assert_eq!(vertical_axis[0].0, 315.0);
    }

    #[test]
    fn dense_grid_keeps_only_the_axes() {
        let canvas = Canvas {
            cell_size: 0.0001,
            ..Default::default()
        };
        assert_eq!(canvas.grid_lines().len(), 2);
        let canvas = Canvas {
            cell_size: 0.0,
            ..Default::default()
        };
        assert_eq!(canvas.grid_lines().len(), 2);
        // 6301 lines per direction
        let canvas = Canvas {
            cell_size: 0.1,
            ..Default::default()
        };
        assert_eq!(canvas.grid_lines().len(), 2);
    }

    #[test]
    fn screen_axes_flip_y() {
        let canvas = Canvas::new(400, 400);
        let points = ControlPointSequence::from_points([
            ControlPoint::new(0.0, 100.0),
            ControlPoint::new(50.0, -100.0),
        ])
        .unwrap();
        let (xs, ys) = canvas.screen_axes(&points);
        assert_eq!(xs, vec![200.0, 250.0]);
        assert_eq!(ys, vec![100.0, 300.0]);
    }
}
