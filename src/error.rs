//! Error taxonomy for share decoding and secret reconstruction.
//!
//! Malformed individual share entries (an x-key or base that fails to parse)
//! are NOT represented here - the parser skips those and reports them as
//! data. Everything below is fatal to the reconstruction attempt.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors produced while decoding share values or interpolating the secret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconstructError {
    /// The declared base is outside the supported 2..=36 range.
    #[error("base must be between 2 and 36, got {0}")]
    InvalidBase(u32),

    /// A character in the value string is not in the base-36 alphabet.
    #[error("invalid character '{0}' in share value")]
    InvalidDigitCharacter(char),

    /// A digit is valid base-36 but too large for the declared base,
    /// e.g. 'b' (value 11) in a base-10 share.
    #[error("digit {digit} (from '{ch}') is out of range for base {base}")]
    DigitOutOfRange { ch: char, digit: u32, base: u32 },

    /// Two points in one interpolation set share the same x-coordinate,
    /// which would put a zero in a basis denominator.
    #[error("duplicate x-coordinate {0} in interpolation set")]
    DuplicateAbscissa(BigInt),

    /// Fewer usable points than the reconstruction threshold.
    #[error("insufficient points: need {needed} but only have {available}")]
    InsufficientPoints { needed: usize, available: usize },

    /// A Lagrange term did not divide exactly. Genuine co-polynomial shares
    /// always divide exactly, so this means the share data is inconsistent.
    #[error("interpolation term for x = {x} is not exactly divisible; share data is inconsistent")]
    InexactInterpolation { x: BigInt },
}
