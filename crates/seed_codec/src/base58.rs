//! Base58 integer-text codec.
//!
//! The byte sequence is read as one big-endian unsigned integer and written
//! out in base 58. Leading zero bytes carry no numeric value, so each one is
//! kept as a leading alphabet-zero (`'1'`) character instead.

use crate::error::*;
use num_bigint::BigUint;

/// Bitcoin's base58 alphabet.
///
/// Excludes 0, O, I, l to reduce visual ambiguity.
pub const ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const RADIX: u32 = 58;

fn digit_value(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    ALPHABET
        .iter()
        .position(|&a| a == c as u8)
        .map(|p| p as u32)
}

/// Encode a byte slice to a base58 string.
///
/// Empty input encodes to the empty string, all-zero input to one `'1'`
/// per byte.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();
    let mut x = BigUint::from_bytes_be(&data[zeros..]);
    let zero = BigUint::default();
    let radix = BigUint::from(RADIX);

    // digits come out least-significant first
    let mut out = Vec::with_capacity(zeros + data.len() * 138 / 100 + 1);
    while x > zero {
        let rem = &x % &radix;
        x /= &radix;
        let digit = rem.to_u32_digits().first().copied().unwrap_or(0);
        out.push(ALPHABET[digit as usize]);
    }
    out.extend(std::iter::repeat(ALPHABET[0]).take(zeros));
    out.reverse();

    out.into_iter().map(char::from).collect()
}

/// Decode a base58 string to a byte vector.
///
/// Leading `'1'` characters decode to leading zero bytes.
pub fn decode(s: &str) -> SeedResult<Vec<u8>> {
    let zero_char = ALPHABET[0] as char;
    let zeros = s.chars().take_while(|&c| c == zero_char).count();

    let mut acc = BigUint::default();
    for (pos, c) in s.chars().enumerate().skip(zeros) {
        let digit = digit_value(c).ok_or_else(|| {
            decode_error(format!(
                "invalid base58 character {c:?} at position {pos}"
            ))
        })?;
        acc *= RADIX;
        acc += digit;
    }

    let mut out = vec![0; zeros];
    if acc.bits() > 0 {
        out.extend_from_slice(&acc.to_bytes_be());
    }
    Ok(out)
}
