//! Exact Lagrange interpolation at x = 0.
//!
//! For points (x_i, y_i) on a degree-(n-1) polynomial, the value at zero is
//!
//! ```text
//! f(0) = Σ_i y_i · Π_{j≠i} (0 - x_j) / (x_i - x_j)
//! ```
//!
//! Everything runs over `BigInt`, so no term ever rounds. Each basis term is
//! formed as one integer product divided by one integer product; for genuine
//! co-polynomial shares that division is always exact, and a non-zero
//! remainder is reported as an error instead of being truncated away.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::ReconstructError;
use crate::share::Point;

/// Outcome of one interpolation pass: the polynomial's value at x = 0 plus
/// the exact contribution of each input point, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolation {
    pub secret: BigInt,
    pub contributions: Vec<BigInt>,
}

/// Evaluates the unique polynomial through `points` at x = 0.
///
/// Requires at least one point and pairwise-distinct x-coordinates. The
/// secret is independent of point order; only the ordering of the reported
/// contributions follows the input.
pub fn interpolate_at_zero(points: &[Point]) -> Result<Interpolation, ReconstructError> {
    if points.is_empty() {
        return Err(ReconstructError::InsufficientPoints {
            needed: 1,
            available: 0,
        });
    }
    for (i, pi) in points.iter().enumerate() {
        for pj in &points[i + 1..] {
            if pi.x == pj.x {
                return Err(ReconstructError::DuplicateAbscissa(pi.x.clone()));
            }
        }
    }

    let mut secret = BigInt::zero();
    let mut contributions = Vec::with_capacity(points.len());

    for (i, pi) in points.iter().enumerate() {
        // numerator = Π_{j≠i} (-x_j), denominator = Π_{j≠i} (x_i - x_j)
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();
        for (j, pj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= -&pj.x;
            denominator *= &pi.x - &pj.x;
        }

        let product = &pi.y * numerator;
        let term = &product / &denominator;
        if !(&product % &denominator).is_zero() {
            return Err(ReconstructError::InexactInterpolation { x: pi.x.clone() });
        }

        secret += &term;
        contributions.push(term);
    }

    Ok(Interpolation {
        secret,
        contributions,
    })
}
