//! Mnemonic phrase codec.
//!
//! Seed bytes are packed into 11-bit dictionary symbols, most significant
//! bit first. A 17 byte seed carries 136 bits: 12 words hold 132 of them
//! and the remaining 4 bits are the zero padding nibble of the last byte.

use crate::dictionary::{self, BITS_PER_WORD};
use crate::error::*;
use crate::{PHRASE_LENGTH, SEED_LENGTH};
use one_err::OneErr;

const fn mask(bits: usize) -> u32 {
    (1 << bits) - 1
}

/// Encode bytes as dictionary words.
///
/// Any trailing remainder shorter than a full word is discarded, so a
/// 17 byte seed yields exactly [`PHRASE_LENGTH`] words.
pub fn bytes_to_phrase(bytes: &[u8]) -> Vec<&'static str> {
    let mut out = Vec::with_capacity(bytes.len() * 8 / BITS_PER_WORD);
    let mut acc: u32 = 0;
    let mut bits = 0;

    for &b in bytes {
        acc = (acc << 8) | b as u32;
        bits += 8;
        if bits >= BITS_PER_WORD {
            bits -= BITS_PER_WORD;
            out.push(dictionary::word((acc >> bits) as u16));
            acc &= mask(bits);
        }
    }

    out
}

/// Decode exactly [`PHRASE_LENGTH`] dictionary words into seed bytes.
pub fn phrase_to_bytes<S: AsRef<str>>(
    words: &[S],
) -> SeedResult<[u8; SEED_LENGTH]> {
    if words.len() != PHRASE_LENGTH {
        return Err(length_error(format!(
            "expected {} phrase words, got {}",
            PHRASE_LENGTH,
            words.len()
        )));
    }

    let mut out = [0; SEED_LENGTH];
    let mut len = 0;
    let mut acc: u32 = 0;
    let mut bits = 0;

    for (pos, word) in words.iter().enumerate() {
        let word = word.as_ref();
        let index = dictionary::index_of(word).ok_or_else(|| {
            OneErr::with_message(
                UNKNOWN_WORD_ERROR,
                format!("word {} ({:?}) is not in the dictionary", pos + 1, word),
            )
        })?;

        acc = (acc << BITS_PER_WORD) | index as u32;
        bits += BITS_PER_WORD;
        while bits >= 8 {
            bits -= 8;
            // 12 words make 16 full bytes, the last slot is the padding
            if len < SEED_LENGTH - 1 {
                out[len] = (acc >> bits) as u8;
            }
            len += 1;
        }
        acc &= mask(bits);
    }

    if len != SEED_LENGTH - 1 || bits != 4 {
        return Err(OneErr::with_message(
            PACKING_ERROR,
            format!("{len} bytes with {bits} leftover bits after unpacking"),
        ));
    }
    out[SEED_LENGTH - 1] = (acc << 4) as u8;

    Ok(out)
}

/// Split a whitespace separated phrase into words.
pub fn parse_phrase(phrase: &str) -> Vec<&str> {
    phrase.split_whitespace().collect()
}
