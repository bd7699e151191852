//! Subset selection and cross-verified secret reconstruction.
//!
//! The primary reconstruction uses the first k points by ascending x. When
//! more than k points are available, a second pass over the last k points
//! cross-checks the result. The two subsets may overlap when fewer than 2k
//! points exist; the check is a positional heuristic, not a proof of share
//! consistency. A mismatch is reported as a diagnostic - the primary secret
//! stays authoritative either way.

use num_bigint::BigInt;

use crate::error::ReconstructError;
use crate::lagrange::interpolate_at_zero;
use crate::share::ShareSet;

/// Cross-check of the primary secret against the last-k subset of shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub alternate_secret: BigInt,
    pub matched: bool,
}

/// Full outcome of a reconstruction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    /// The recovered constant term, from the primary (first-k) subset.
    pub secret: BigInt,
    /// Per-point contribution of each primary point, in ascending-x order.
    pub contributions: Vec<BigInt>,
    /// Present only when more points than the threshold were available.
    pub verification: Option<Verification>,
}

/// Reconstructs the secret from a decoded share set.
///
/// Fails with `InsufficientPoints` when fewer than k points survived
/// parsing. Interpolation errors from either subset propagate unchanged.
pub fn reconstruct(shares: &ShareSet) -> Result<Reconstruction, ReconstructError> {
    let k = shares.k;
    let available = shares.points.len();
    if available < k {
        return Err(ReconstructError::InsufficientPoints {
            needed: k,
            available,
        });
    }

    let primary = interpolate_at_zero(&shares.points[..k])?;

    let verification = if available > k {
        let alternate = interpolate_at_zero(&shares.points[available - k..])?;
        let matched = alternate.secret == primary.secret;
        Some(Verification {
            alternate_secret: alternate.secret,
            matched,
        })
    } else {
        None
    };

    Ok(Reconstruction {
        secret: primary.secret,
        contributions: primary.contributions,
        verification,
    })
}
