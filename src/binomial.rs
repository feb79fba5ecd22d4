//! Binomial coefficients C(n, k) for Bernstein weighting.
//!
//! Two interchangeable implementations are provided:
//! - `binomial()` multiplicative recurrence, used by the evaluators
//! - `binomial_factorial()` factorial ratio n!/(k!(n-k)!), kept as a reference for small n
//!
//! Both return zero for an index k outside of 0..=n, so an out of range term
//! contributes nothing to a Bernstein sum. A negative `n` cannot be expressed.
use num_traits::{Float, ToPrimitive};
use tinyvec::ArrayVec;

/// Capacity of a row of Pascal's triangle returned by `binomial_row()`.
/// Rows up to degree `MAX_ROW - 1` fit.
pub const MAX_ROW: usize = 32;

/// Convert a primitive number into the scalar type `F`.
/// Every primitive integer is representable (possibly rounded) by a float,
/// the NaN fallback only exists to keep the conversion total.
#[inline]
pub(crate) fn scalar<F: Float, V: ToPrimitive>(value: V) -> F {
    F::from(value).unwrap_or_else(F::nan)
}

/// Binomial coefficient C(n, k) via the multiplicative recurrence
/// C(n, i) = C(n, i-1) * (n - i + 1) / i.
/// Multiplying before dividing keeps every intermediate value an integer,
/// which is exact as long as the coefficients fit the mantissa.
pub fn binomial<F: Float>(n: u32, k: i64) -> F {
    if k < 0 || k > i64::from(n) {
        return F::zero();
    }
    let mut result = F::one();
    for i in 1..=k {
        result = result * scalar::<F, _>(i64::from(n) - i + 1) / scalar(i);
    }
    result
}

/// Binomial coefficient C(n, k) as the factorial ratio n!/(k!(n-k)!).
/// Overflows to infinity (and then NaN) much earlier than `binomial()`.
pub fn binomial_factorial<F: Float>(n: u32, k: i64) -> F {
    if k < 0 || k > i64::from(n) {
        return F::zero();
    }
    // k is within 0..=n here, so both casts are lossless
    let k = k as u32;
    factorial::<F>(n) / (factorial::<F>(k) * factorial::<F>(n - k))
}

/// n! computed iteratively; 0! = 1! = 1.
pub fn factorial<F: Float>(n: u32) -> F {
    (2..=n).fold(F::one(), |acc, i| acc * scalar(i))
}

/// Selects which implementation computes the coefficients.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum BinomialStrategy {
    /// Iterative multiplicative recurrence (preferred)
    #[default]
    Multiplicative,
    /// Factorial ratio, only suitable for small n
    Factorial,
}

impl BinomialStrategy {
    pub fn coefficient<F: Float>(&self, n: u32, k: i64) -> F {
        match self {
            BinomialStrategy::Multiplicative => binomial(n, k),
            BinomialStrategy::Factorial => binomial_factorial(n, k),
        }
    }
}

/// Returns the full row C(n, 0..=n) of Pascal's triangle, or None if
/// the row does not fit into the fixed capacity `MAX_ROW`.
pub fn binomial_row<F>(n: u32) -> Option<ArrayVec<[F; MAX_ROW]>>
where
    F: Float + Default,
{
    let len = n as usize + 1;
    if len > MAX_ROW {
        return None;
    }
    let mut row: ArrayVec<[F; MAX_ROW]> = ArrayVec::new();
    let mut c = F::one();
    row.push(c);
    for i in 1..len {
        c = c * scalar::<F, _>(n as usize - i + 1) / scalar(i);
        row.push(c);
    }
    Some(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn out_of_range_index_is_zero() {
        for n in 0..=10u32 {
            assert_eq!(binomial::<f64>(n, -1), 0.0);
            assert_eq!(binomial::<f64>(n, i64::from(n) + 1), 0.0);
            assert_eq!(binomial_factorial::<f64>(n, -3), 0.0);
            assert_eq!(binomial_factorial::<f64>(n, i64::from(n) + 2), 0.0);
        }
    }

    #[test]
    fn edges_are_one_and_symmetric() {
        for n in 0..=12u32 {
            let n_k = i64::from(n);
            assert_eq!(binomial::<f64>(n, 0), 1.0);
            assert_eq!(binomial::<f64>(n, n_k), 1.0);
            for k in 0..=n_k {
                assert_eq!(binomial::<f64>(n, k), binomial::<f64>(n, n_k - k));
            }
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(binomial::<f64>(4, 2), 6.0);
        assert_eq!(binomial::<f64>(5, 2), 10.0);
        assert_eq!(binomial::<f64>(7, 3), 35.0);
        assert_eq!(binomial::<f64>(10, 5), 252.0);
        assert_eq!(binomial::<f32>(6, 3), 20.0);
    }

    #[test]
    fn strategies_agree_for_small_degrees() {
        for n in 0..=10u32 {
            for k in -1..=i64::from(n) + 1 {
                let a: f64 = BinomialStrategy::Multiplicative.coefficient(n, k);
                let b: f64 = BinomialStrategy::Factorial.coefficient(n, k);
                assert_eq!(a, b, "C({}, {})", n, k);
            }
        }
        assert_eq!(BinomialStrategy::default(), BinomialStrategy::Multiplicative);
    }

    #[test]
    fn factorial_values() {
        assert_eq!(factorial::<f64>(0), 1.0);
        assert_eq!(factorial::<f64>(1), 1.0);
        assert_eq!(factorial::<f64>(5), 120.0);
        assert_eq!(factorial::<f64>(10), 3_628_800.0);
    }

    #[test]
    fn multiplicative_survives_where_factorial_overflows() {
        // 171! is larger than f64::MAX
        let fact: f64 = binomial_factorial(200, 2);
        assert!(!fact.is_finite());
        let mult: f64 = binomial(200, 2);
        assert!((mult - 19_900.0).abs() < EPSILON);
    }

    #[test]
    fn row_matches_single_coefficients() {
        let row = binomial_row::<f64>(6).unwrap();
        assert_eq!(row.len(), 7);
        for (k, c) in row.iter().enumerate() {
            assert_eq!(*c, binomial::<f64>(6, k as i64));
        }
        assert_eq!(binomial_row::<f64>(0).unwrap().as_slice(), &[1.0]);
        assert!(binomial_row::<f64>(MAX_ROW as u32 - 1).is_some());
        assert!(binomial_row::<f64>(MAX_ROW as u32).is_none());
    }
}
