//! Cubic basis-matrix formulation of Bezier curves.
//!
//! The basis matrix M maps the control points of a cubic onto the coefficients
//! of its power basis, so that B(t) = [t³ t² t 1] · M · [p0 p1 p2 p3]ᵀ.
use num_traits::Float;

use crate::binomial::{binomial, scalar};

/// The cubic Bezier basis matrix, row major.
pub const BASIS_MATRIX: [[i8; 4]; 4] = [
    [-1, 3, -3, 1],
    [3, -6, 3, 0],
    [-3, 3, 0, 0],
    [1, 0, 0, 0],
];

/// Evaluate the point at `t` with the basis matrix weighted by the Bernstein basis.
///
/// For every control point index i in 0..=n (n = xs.len() - 1) this accumulates
/// basis_i * xs[i] * M[i][0] into x and basis_i * ys[i] * M[i][1] into y, where
/// basis_i = C(n, i) * (1-t)^(n-i) * t^i. The matrix row is selected by the
/// control point index, so only the first four control points carry a row;
/// any index past the last row contributes nothing. The degree is taken from `xs`,
/// a missing `ys` entry contributes nothing either.
///
/// This is not the textbook cubic evaluation, see `eval_power_basis()` for that.
pub fn eval_matrix<F>(t: F, xs: &[F], ys: &[F]) -> (F, F)
where
    F: Float,
{
    if xs.is_empty() {
        return (F::zero(), F::zero());
    }
    let n = xs.len() - 1;
    let n_u32 = u32::try_from(n).unwrap_or(u32::MAX);
    let one_t = F::one() - t;

    let mut result_x = F::zero();
    let mut result_y = F::zero();
    for (i, (x, row)) in xs.iter().zip(BASIS_MATRIX.iter()).enumerate() {
        let basis =
            binomial::<F>(n_u32, i as i64) * one_t.powi((n - i) as i32) * t.powi(i as i32);
        result_x = result_x + basis * *x * scalar(row[0]);
        if let Some(y) = ys.get(i) {
            result_y = result_y + basis * *y * scalar(row[1]);
        }
    }
    (result_x, result_y)
}

/// Evaluate one axis of a cubic at `t` in the power basis: [t³ t² t 1] · M · p.
pub fn eval_power_basis<F>(t: F, p: &[F; 4]) -> F
where
    F: Float,
{
    let mut coefficients = [F::zero(); 4];
    for (coefficient, row) in coefficients.iter_mut().zip(BASIS_MATRIX.iter()) {
        *coefficient = row
            .iter()
            .zip(p.iter())
            .fold(F::zero(), |acc, (m, p)| acc + scalar::<F, _>(*m) * *p);
    }
    // horner scheme over the power basis coefficients, highest power first
    coefficients
        .iter()
        .fold(F::zero(), |acc, coefficient| acc * t + *coefficient)
}

/// The basis matrix as plain text, one row per line with tab separated entries.
pub fn matrix_string() -> String {
    BASIS_MATRIX
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
