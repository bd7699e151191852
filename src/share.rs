//! Share parsing and point-set assembly.
//!
//! A share is one (x, y) sample of the hidden polynomial. The x-coordinate
//! comes from the share's key in the input document; the y-value arrives
//! base-encoded and is decoded via [`crate::decode`]. Entries whose key or
//! base fails to parse are skipped and reported, not fatal - one corrupt
//! share should not sink a run that still has enough good ones.

use std::fmt;

use num_bigint::BigInt;

use crate::decode::decode_from_base;
use crate::error::ReconstructError;

/// One (x, y) sample of the hidden polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A raw share entry before decoding: the x-key plus its base-encoded value.
#[derive(Debug, Clone)]
pub struct RawShare {
    pub key: String,
    pub base: String,
    pub value: String,
}

/// Decoded shares sorted by x ascending, together with the scheme parameters
/// declared in the input.
///
/// The sort order decides which points count as the "first k" for the
/// primary reconstruction and the "last k" for verification.
#[derive(Debug, Clone)]
pub struct ShareSet {
    /// Declared number of shares provided.
    pub n: usize,
    /// Declared reconstruction threshold (polynomial degree = k - 1).
    pub k: usize,
    pub points: Vec<Point>,
    /// Keys of entries that could not be parsed and were skipped.
    pub skipped: Vec<String>,
}

impl ShareSet {
    /// Decodes raw entries into a sorted point set.
    ///
    /// An unparsable x-key or base string skips the entry. A value string
    /// that fails to decode under a well-formed base is fatal: it means the
    /// share data itself is corrupt, not just mislabeled.
    pub fn from_entries(
        entries: impl IntoIterator<Item = RawShare>,
        n: usize,
        k: usize,
    ) -> Result<Self, ReconstructError> {
        let mut points = Vec::new();
        let mut skipped = Vec::new();

        for entry in entries {
            let x: BigInt = match entry.key.trim().parse() {
                Ok(x) => x,
                Err(_) => {
                    skipped.push(entry.key);
                    continue;
                }
            };
            let base: u32 = match entry.base.trim().parse() {
                Ok(base) => base,
                Err(_) => {
                    skipped.push(entry.key);
                    continue;
                }
            };
            let y = decode_from_base(&entry.value, base)?;
            points.push(Point { x, y });
        }

        points.sort_by(|a, b| a.x.cmp(&b.x));

        Ok(Self {
            n,
            k,
            points,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(key: &str, base: &str, value: &str) -> RawShare {
        RawShare {
            key: key.to_string(),
            base: base.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn decodes_and_sorts_by_x() {
        let set = ShareSet::from_entries(
            [raw("3", "10", "12"), raw("1", "10", "4"), raw("2", "2", "111")],
            3,
            3,
        )
        .unwrap();

        assert_eq!(
            set.points,
            vec![Point::new(1, 4), Point::new(2, 7), Point::new(3, 12)]
        );
        assert!(set.skipped.is_empty());
    }

    #[test]
    fn skips_unparsable_keys_and_bases() {
        let set = ShareSet::from_entries(
            [
                raw("1", "10", "4"),
                raw("abc", "10", "4"),
                raw("2", "ten", "4"),
            ],
            3,
            2,
        )
        .unwrap();

        assert_eq!(set.points.len(), 1);
        assert_eq!(set.skipped, vec!["abc".to_string(), "2".to_string()]);
    }

    #[test]
    fn corrupt_value_is_fatal() {
        let err = ShareSet::from_entries([raw("1", "10", "12a")], 1, 1).unwrap_err();
        assert_eq!(
            err,
            ReconstructError::DigitOutOfRange {
                ch: 'a',
                digit: 10,
                base: 10
            }
        );
    }

    #[test]
    fn carries_declared_parameters_through() {
        let set = ShareSet::from_entries([raw("1", "10", "4")], 7, 4).unwrap();
        assert_eq!(set.n, 7);
        assert_eq!(set.k, 4);
    }

    #[test]
    fn accepts_negative_x_keys() {
        let set = ShareSet::from_entries([raw("-2", "10", "9"), raw("1", "10", "3")], 2, 2).unwrap();
        assert_eq!(set.points[0].x, BigInt::from(-2));
    }
}
