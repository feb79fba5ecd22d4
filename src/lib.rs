//! Bernstein-polynomial Bezier curves for small, user-edited sets of 2D control points.
//!
//! The core evaluates a curve of arbitrary degree n = control_points.len() - 1
//! either by the direct parametric Bernstein sum or by the cubic basis-matrix
//! formulation, and samples it into polylines or (t, x, y) tables.
//! Around the core sit an editable control point model, a canvas mapping,
//! a plotters based renderer and the file exports.
//!
//! ```
//! use bezier_sketch::{sample_parametric, sampler::PARAMETRIC_SAMPLES};
//!
//! let xs = [0.0, 100.0];
//! let ys = [0.0, 0.0];
//! let line = sample_parametric(&xs, &ys);
//! assert_eq!(line.len(), PARAMETRIC_SAMPLES);
//! ```

pub mod bernstein;
pub mod binomial;
pub mod canvas;
pub mod config;
pub mod control_points;
pub mod error;
pub mod logging;
pub mod matrix;
pub mod point;
pub mod render;
pub mod sampler;
pub mod session;
pub mod table;

/// Scalar used by the collaborator layer (canvas, editor, exports).
/// The core evaluators are generic over any `num_traits::Float`.
pub type NativeFloat = f64;

/// Tolerance for comparisons of evaluated curve points.
pub const EPSILON: NativeFloat = 1e-9;

pub use bernstein::{bernstein_weight, eval_axis, eval_point};
pub use binomial::{binomial, binomial_factorial, binomial_row, factorial, BinomialStrategy};
pub use canvas::Canvas;
pub use config::{Config, OutputFormat};
pub use control_points::ControlPointSequence;
pub use error::{Error, Result};
pub use matrix::{eval_matrix, eval_power_basis, matrix_string, BASIS_MATRIX};
pub use point::ControlPoint;
pub use sampler::{
    sample, sample_matrix, sample_parametric, sample_table, EvaluationMethod, Samples, TableRow,
};
pub use session::Session;
