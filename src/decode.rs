//! Multi-base decoding of share values.
//!
//! Share y-values arrive as digit strings in an arbitrary base between 2 and
//! 36, using the alphabet 0-9 then a-z (case-insensitive). Decoding
//! accumulates into a `BigInt` so that shares larger than any machine word
//! survive intact.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::ReconstructError;

const MIN_BASE: u32 = 2;
const MAX_BASE: u32 = 36;

fn check_base(base: u32) -> Result<(), ReconstructError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(ReconstructError::InvalidBase(base))
    }
}

/// Decodes a digit string in the given base into an exact integer.
///
/// Digits accumulate most-significant first: `result = result * base + digit`.
/// Surrounding ASCII whitespace is ignored; an empty string decodes to 0.
pub fn decode_from_base(digits: &str, base: u32) -> Result<BigInt, ReconstructError> {
    check_base(base)?;

    let mut result = BigInt::zero();
    for ch in digits.trim().chars() {
        let ch = ch.to_ascii_lowercase();
        let digit = match ch {
            '0'..='9' => ch as u32 - '0' as u32,
            'a'..='z' => ch as u32 - 'a' as u32 + 10,
            _ => return Err(ReconstructError::InvalidDigitCharacter(ch)),
        };
        if digit >= base {
            return Err(ReconstructError::DigitOutOfRange { ch, digit, base });
        }
        result = result * base + digit;
    }

    Ok(result)
}

/// Renders an integer as a lowercase digit string in the given base.
///
/// Inverse of [`decode_from_base`] up to leading-zero normalization; negative
/// values get a leading '-'.
pub fn encode_to_base(value: &BigInt, base: u32) -> Result<String, ReconstructError> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_decimal_and_binary() {
        assert_eq!(decode_from_base("4", 10).unwrap(), BigInt::from(4));
        assert_eq!(decode_from_base("111", 2).unwrap(), BigInt::from(7));
        assert_eq!(decode_from_base("213", 4).unwrap(), BigInt::from(39));
    }

    #[test]
    fn decodes_letters_case_insensitively() {
        assert_eq!(decode_from_base("ff", 16).unwrap(), BigInt::from(255));
        assert_eq!(decode_from_base("FF", 16).unwrap(), BigInt::from(255));
        assert_eq!(decode_from_base("z", 36).unwrap(), BigInt::from(35));
    }

    #[test]
    fn zero_and_empty_decode_to_zero() {
        for base in 2..=36 {
            assert_eq!(decode_from_base("0", base).unwrap(), BigInt::zero());
            assert_eq!(decode_from_base("", base).unwrap(), BigInt::zero());
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(decode_from_base("  101 \n", 2).unwrap(), BigInt::from(5));
    }

    #[test]
    fn rejects_base_outside_range() {
        assert_eq!(
            decode_from_base("101", 1),
            Err(ReconstructError::InvalidBase(1))
        );
        assert_eq!(
            decode_from_base("101", 37),
            Err(ReconstructError::InvalidBase(37))
        );
    }

    #[test]
    fn rejects_digit_at_or_above_base() {
        assert_eq!(
            decode_from_base("a", 10),
            Err(ReconstructError::DigitOutOfRange {
                ch: 'a',
                digit: 10,
                base: 10
            })
        );
        assert_eq!(
            decode_from_base("2", 2),
            Err(ReconstructError::DigitOutOfRange {
                ch: '2',
                digit: 2,
                base: 2
            })
        );
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        assert_eq!(
            decode_from_base("12!4", 10),
            Err(ReconstructError::InvalidDigitCharacter('!'))
        );
    }

    #[test]
    fn decodes_values_beyond_machine_words() {
        // 50 nines does not fit in a u128
        let digits = "9".repeat(50);
        let decoded = decode_from_base(&digits, 10).unwrap();
        assert_eq!(decoded.to_string(), digits);
    }

    #[test]
    fn encode_round_trips_decode() {
        for (digits, base) in [("0", 2), ("deadbeef", 16), ("zz9", 36), ("7071", 8)] {
            let value = decode_from_base(digits, base).unwrap();
            let encoded = encode_to_base(&value, base).unwrap();
            assert_eq!(encoded, digits, "round trip failed for base {base}");
        }
    }

    #[test]
    fn encode_rejects_invalid_base() {
        assert_eq!(
            encode_to_base(&BigInt::from(5), 40),
            Err(ReconstructError::InvalidBase(40))
        );
    }
}
