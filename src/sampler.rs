//! Sampling of curves into polylines and coordinate tables.
//!
//! The parameter is always derived from an integer index (t = i / STEP_COUNT or
//! t = i * step) so that sample counts and the inclusive upper bound do not drift.
use core::fmt;
use core::str::FromStr;

use num_traits::Float;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bernstein::{eval_axis, eval_point};
use crate::binomial::scalar;
use crate::error::Error;
use crate::matrix::eval_matrix;

/// Number of parameter steps over [0, 1] used to sample a polyline.
pub const STEP_COUNT: usize = 1000;
/// Samples produced by the parametric method, t = 0.001..=1.
pub const PARAMETRIC_SAMPLES: usize = STEP_COUNT;
/// Samples produced by the matrix method, t = 0..=1.
pub const MATRIX_SAMPLES: usize = STEP_COUNT + 1;
/// Upper bound for the number of rows of a coordinate table.
pub const MAX_TABLE_ROWS: usize = 1_000_000;

/// The formulation used to evaluate a curve for drawing.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMethod {
    /// Direct Bernstein sum per axis
    #[default]
    Parametric,
    /// Basis matrix weighted by the Bernstein basis
    Matrix,
}

impl fmt::Display for EvaluationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationMethod::Parametric => write!(f, "parametric"),
            EvaluationMethod::Matrix => write!(f, "matrix"),
        }
    }
}

impl FromStr for EvaluationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parametric" => Ok(EvaluationMethod::Parametric),
            "matrix" => Ok(EvaluationMethod::Matrix),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}

/// Lazily evaluated polyline of a curve.
/// A clone continues from the current position, `Samples::new()` starts over.
#[derive(Debug, Clone)]
pub struct Samples<'a, F> {
    method: EvaluationMethod,
    xs: &'a [F],
    ys: &'a [F],
    /// next step index to evaluate
    index: usize,
    /// one past the last step index
    end: usize,
}

impl<'a, F> Samples<'a, F>
where
    F: Float + Default,
{
    /// Create the sample sequence for the given control coordinates.
    /// Fewer than two control points have no curve, the sequence is empty.
    pub fn new(method: EvaluationMethod, xs: &'a [F], ys: &'a [F]) -> Self {
        let start = match method {
            EvaluationMethod::Parametric => 1,
            EvaluationMethod::Matrix => 0,
        };
        let end = if xs.len() < 2 || ys.len() < 2 {
            debug!(
                points = xs.len().min(ys.len()),
                "not enough control points for a curve"
            );
            start
        } else {
            STEP_COUNT + 1
        };
        Samples {
            method,
            xs,
            ys,
            index: start,
            end,
        }
    }

    pub fn method(&self) -> EvaluationMethod {
        self.method
    }
}

impl<F> Iterator for Samples<'_, F>
where
    F: Float + Default,
{
    type Item = (F, F);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.end {
            return None;
        }
        let t = scalar::<F, _>(self.index) / scalar(STEP_COUNT);
        self.index += 1;
        Some(match self.method {
            EvaluationMethod::Parametric => eval_point(t, self.xs, self.ys),
            EvaluationMethod::Matrix => eval_matrix(t, self.xs, self.ys),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.index;
        (remaining, Some(remaining))
    }
}

impl<F> ExactSizeIterator for Samples<'_, F> where F: Float + Default {}

/// Polyline of the curve evaluated with the Bernstein sum at t = 0.001, 0.002, ..., 1.
pub fn sample_parametric<F>(xs: &[F], ys: &[F]) -> Vec<(F, F)>
where
    F: Float + Default,
{
    Samples::new(EvaluationMethod::Parametric, xs, ys).collect()
}

/// Polyline of the curve evaluated with the basis matrix at t = 0, 0.001, ..., 1.
pub fn sample_matrix<F>(xs: &[F], ys: &[F]) -> Vec<(F, F)>
where
    F: Float + Default,
{
    Samples::new(EvaluationMethod::Matrix, xs, ys).collect()
}

/// Polyline of the curve for the chosen `method`.
pub fn sample<F>(method: EvaluationMethod, xs: &[F], ys: &[F]) -> Vec<(F, F)>
where
    F: Float + Default,
{
    Samples::new(method, xs, ys).collect()
}

/// One row of the coordinate table.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct TableRow<F> {
    pub t: F,
    pub x: F,
    pub y: F,
}

/// Evaluate the curve with the Bernstein sum at t = 0, step, 2*step, ...
/// for ceil(range / step) + 1 rows.
///
/// Returns an empty table if `step` or `range` is not a finite positive number,
/// if the table would exceed `MAX_TABLE_ROWS` or if there are no control points.
pub fn sample_table<F>(xs: &[F], ys: &[F], step: F, range: F) -> Vec<TableRow<F>>
where
    F: Float + Default,
{
    let valid = |v: F| v.is_finite() && v > F::zero();
    if !valid(step) || !valid(range) {
        debug!("rejecting table sampling parameters");
        return Vec::new();
    }
    if xs.is_empty() || ys.is_empty() {
        return Vec::new();
    }
    let count = match (range / step).ceil().to_usize() {
        Some(steps) if steps < MAX_TABLE_ROWS => steps + 1,
        _ => {
            warn!(max = MAX_TABLE_ROWS, "coordinate table too large, nothing sampled");
            return Vec::new();
        }
    };

    (0..count)
        .map(|i| {
            let t = scalar::<F, _>(i) * step;
            TableRow {
                t,
                x: eval_axis(t, xs),
                y: eval_axis(t, ys),
            }
        })
        .collect()
}
