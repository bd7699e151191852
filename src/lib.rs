//! Recovery half of a threshold secret-sharing scheme.
//!
//! Given k of n shares of an unknown degree-(k-1) polynomial, with each
//! share's y-value encoded as a digit string in an arbitrary base (2-36),
//! this crate reconstructs the polynomial's constant term at x = 0 using
//! exact Lagrange interpolation over arbitrary-precision integers. When more
//! than k shares are available, the result is cross-checked against a second
//! subset of shares.
//!
//! The core is pure: it consumes an already-parsed [`share::ShareSet`] and
//! returns a structured [`Reconstruction`]. File access and display live in
//! the CLI binary.

pub mod decode;
pub mod error;
pub mod input;
pub mod lagrange;
pub mod reconstruct;
pub mod share;

pub use error::ReconstructError;
pub use reconstruct::{reconstruct, Reconstruction, Verification};
pub use share::{Point, ShareSet};
