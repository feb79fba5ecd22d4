//! Drawing of the grid, the control polygon and the curve with plotters.
//!
//! Everything is drawn in screen pixels directly onto the drawing area,
//! control points are mapped through the `Canvas` first.
use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::config::OutputFormat;
use crate::control_points::ControlPointSequence;
use crate::error::{Error, Result};
use crate::sampler::{EvaluationMethod, Samples};
use crate::NativeFloat;

const POLYGON_COLOR: RGBColor = BLUE;
const POLYGON_POINT_COLOR: RGBColor = RED;
const PARAMETRIC_COLOR: RGBColor = BLACK;
const MATRIX_COLOR: RGBColor = GREEN;
const MATRIX_POINT_COLOR: RGBColor = RGBColor(255, 165, 0);
const POINT_RADIUS: i32 = 3;
const LINE_WIDTH: u32 = 2;

/// What gets drawn: the editor state at the time of drawing.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub canvas: Canvas,
    pub points: &'a ControlPointSequence,
    pub method: EvaluationMethod,
}

impl<'a> Scene<'a> {
    pub fn new(canvas: Canvas, points: &'a ControlPointSequence, method: EvaluationMethod) -> Self {
        Scene {
            canvas,
            points,
            method,
        }
    }
}

fn render_error<E>(e: DrawingAreaErrorKind<E>) -> Error
where
    E: std::error::Error + Send + Sync,
{
    Error::Render(e.to_string())
}

/// Round a screen position to backend pixels.
fn pixel((x, y): (NativeFloat, NativeFloat)) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn polyline<I>(points: I) -> Vec<(i32, i32)>
where
    I: IntoIterator<Item = (NativeFloat, NativeFloat)>,
{
    points
        .into_iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(pixel)
        .collect()
}

/// Clear the area and draw the whole scene onto it.
pub fn draw<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, scene: &Scene<'_>) -> Result<()> {
    area.fill(&WHITE).map_err(render_error)?;
    draw_grid(area, &scene.canvas)?;

    let (xs, ys) = scene.canvas.screen_axes(scene.points);
    draw_control_polygon(area, &xs, &ys)?;

    if scene.points.can_draw_curve() {
        draw_curve(area, scene.method, &xs, &ys)?;
    } else {
        debug!(points = scene.points.len(), "no curve to draw");
    }
    Ok(())
}

fn draw_grid<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, canvas: &Canvas) -> Result<()> {
    let style = BLACK.mix(0.25).stroke_width(1);
    for [a, b] in canvas.grid_lines() {
        area.draw(&PathElement::new(vec![pixel(a), pixel(b)], style))
            .map_err(render_error)?;
    }
    Ok(())
}

fn draw_points<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    xs: &[NativeFloat],
    ys: &[NativeFloat],
    color: RGBColor,
) -> Result<()> {
    for center in polyline(xs.iter().copied().zip(ys.iter().copied())) {
        area.draw(&Circle::new(center, POINT_RADIUS, color.filled()))
            .map_err(render_error)?;
    }
    Ok(())
}

/// The characteristic polygon: control points joined in order.
fn draw_control_polygon<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    xs: &[NativeFloat],
    ys: &[NativeFloat],
) -> Result<()> {
    draw_points(area, xs, ys, POLYGON_POINT_COLOR)?;
    let path = polyline(xs.iter().copied().zip(ys.iter().copied()));
    if path.len() > 1 {
        area.draw(&PathElement::new(
            path,
            POLYGON_COLOR.stroke_width(LINE_WIDTH),
        ))
        .map_err(render_error)?;
    }
    Ok(())
}

fn draw_curve<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    method: EvaluationMethod,
    xs: &[NativeFloat],
    ys: &[NativeFloat],
) -> Result<()> {
    let samples = Samples::new(method, xs, ys);
    match method {
        EvaluationMethod::Parametric => {
            // the parametric samples start after t = 0, the path starts at the first control point
            let start = (xs[0], ys[0]);
            let path = polyline(core::iter::once(start).chain(samples));
            area.draw(&PathElement::new(
                path,
                PARAMETRIC_COLOR.stroke_width(LINE_WIDTH),
            ))
            .map_err(render_error)?;
        }
        EvaluationMethod::Matrix => {
            let path = polyline(samples);
            area.draw(&PathElement::new(path, MATRIX_COLOR.stroke_width(LINE_WIDTH)))
                .map_err(render_error)?;
            draw_points(area, xs, ys, MATRIX_POINT_COLOR)?;
        }
    }
    Ok(())
}

/// Render the scene into an image file of the canvas size.
pub fn render_to_file(path: &Path, format: OutputFormat, scene: &Scene<'_>) -> Result<()> {
    let size = (scene.canvas.width, scene.canvas.height);
    match format {
        OutputFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw(&root, scene)?;
            root.present().map_err(render_error)?;
        }
        OutputFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw(&root, scene)?;
            root.present().map_err(render_error)?;
        }
    }
    info!(path = %path.display(), method = %scene.method, "rendered curve");
    Ok(())
}

/// Render the scene into an SVG document held in memory.
pub fn render_svg_string(scene: &Scene<'_>) -> Result<String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (scene.canvas.width, scene.canvas.height))
            .into_drawing_area();
        draw(&root, scene)?;
        root.present().map_err(render_error)?;
    }
    Ok(buffer)
}
