//! Bernstein basis polynomials and the direct parametric evaluation of Bezier curves.
use num_traits::Float;

use crate::binomial::{binomial, binomial_row};

/// Evaluates the Bernstein basis polynomial b(i, n, t) = C(n, i) * t^i * (1-t)^(n-i).
/// An index `i` outside of 0..=n yields zero.
pub fn bernstein_weight<F: Float>(i: i64, n: u32, t: F) -> F {
    if i < 0 || i > i64::from(n) {
        return F::zero();
    }
    let one_t = F::one() - t;
    // i <= n <= u32::MAX fits an i32 for any degree we can hold in memory
    binomial::<F>(n, i) * t.powi(i as i32) * one_t.powi((i64::from(n) - i) as i32)
}

/// Evaluate one coordinate axis of a Bezier curve at `t` as the weighted sum
/// of the scalar control values `control[0..=n]` with their Bernstein weights.
/// The degree is n = control.len() - 1.
///
/// `t` is not restricted to [0, 1], values outside extrapolate the polynomial.
/// A single control value is a constant curve, an empty slice evaluates to zero.
/// NaN control values or a NaN `t` propagate into the result.
pub fn eval_axis<F>(t: F, control: &[F]) -> F
where
    F: Float + Default,
{
    if control.is_empty() {
        return F::zero();
    }
    let n = control.len() - 1;
    let n_u32 = u32::try_from(n).unwrap_or(u32::MAX);
    let one_t = F::one() - t;

    match binomial_row::<F>(n_u32) {
        Some(row) => control
            .iter()
            .zip(row.iter())
            .enumerate()
            .fold(F::zero(), |acc, (i, (p, c))| {
                acc + *c * one_t.powi((n - i) as i32) * t.powi(i as i32) * *p
            }),
        // too many points for a cached row, fall back to one coefficient per term
        None => control.iter().enumerate().fold(F::zero(), |acc, (i, p)| {
            acc + binomial::<F>(n_u32, i as i64)
                * one_t.powi((n - i) as i32)
                * t.powi(i as i32)
                * *p
        }),
    }
}

/// Evaluate the 2D curve point at `t` as two independent axis evaluations.
pub fn eval_point<F>(t: F, xs: &[F], ys: &[F]) -> (F, F)
where
    F: Float + Default,
{
    (eval_axis(t, xs), eval_axis(t, ys))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn partition_of_unity() {
        let nsteps = 1000;
        for n in 0..=10u32 {
            for t in 0..=nsteps {
                let t = t as f64 / nsteps as f64;
                let sum: f64 = (0..=i64::from(n)).map(|i| bernstein_weight(i, n, t)).sum();
                assert!((sum - 1.0).abs() < EPSILON, "n={} t={} sum={}", n, t, sum);
            }
        }
    }

    #[test]
    fn weight_outside_index_range_is_zero() {
        assert_eq!(bernstein_weight(-1, 3, 0.0f64), 0.0);
        assert_eq!(bernstein_weight(4, 3, 0.5f64), 0.0);
        assert_eq!(bernstein_weight(0, 0, 0.7f64), 1.0);
    }

    #[test]
    fn eval_endpoints() {
        let p = [0f64, 1.77, 1.1, -1.0, 4.3, 3.0, 3.2, -4.0];
        for len in 1..=p.len() {
            let control = &p[..len];
            assert!((eval_axis(0.0, control) - control[0]).abs() < EPSILON);
            assert!((eval_axis(1.0, control) - control[len - 1]).abs() < EPSILON);
        }
    }

    #[test]
    fn single_point_is_constant() {
        for t in [-3.0f64, 0.0, 0.25, 1.0, 7.5] {
            assert_eq!(eval_axis(t, &[42.0]), 42.0);
        }
        assert_eq!(eval_axis::<f64>(0.5, &[]), 0.0);
    }

    #[test]
    fn cubic_matches_closed_form() {
        let p = [0f64, 2.9, 4.3, 3.2];
        let nsteps = 1000;
        for t in 0..=nsteps {
            let t = t as f64 / nsteps as f64;
            let s = 1.0 - t;
            let expected =
                s * s * s * p[0] + 3.0 * s * s * t * p[1] + 3.0 * s * t * t * p[2] + t * t * t * p[3];
            assert!((eval_axis(t, &p) - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn extrapolation_and_nan() {
        // linear curve keeps extrapolating along its line
        assert!((eval_axis(2.0f64, &[0.0, 100.0]) - 200.0).abs() < EPSILON);
        assert!((eval_axis(-0.5f64, &[0.0, 100.0]) + 50.0).abs() < EPSILON);
        assert!(eval_axis(0.5f64, &[0.0, f64::NAN, 1.0]).is_nan());
        assert!(eval_axis(f64::NAN, &[0.0, 1.0]).is_nan());
    }

    #[test]
    fn long_sequences_fall_back_to_single_coefficients() {
        // 40 points exceed the cached row capacity, a constant curve stays constant
        let control = [5.0f64; 40];
        assert!((eval_axis(0.3, &control) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn point_pairs_axes() {
        let (x, y) = eval_point(0.5f64, &[0.0, 100.0], &[0.0, 0.0]);
        assert!((x - 50.0).abs() < EPSILON);
        assert_eq!(y, 0.0);
    }
}
