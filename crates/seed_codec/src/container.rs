//! Checksummed seed container text.
//!
//! Layout before base58 encoding:
//!
//! ```text
//! | header (3) | seed (17) | checksum (4) |
//! ```
//!
//! The checksum is the first 4 bytes of the SHA3-256 digest of
//! `header || seed`.

use crate::error::*;
use crate::{base58, SEED_LENGTH};
use one_err::OneErr;
use sha3::{Digest, Sha3_256};

/// Constant header tagging a seed container.
pub const SEED_HEADER: [u8; 3] = [0x5a, 0xfe, 0x02];

/// Number of checksum bytes appended to a container.
pub const CHECKSUM_LENGTH: usize = 4;

/// Total decoded container length.
pub const CONTAINER_LENGTH: usize =
    SEED_HEADER.len() + SEED_LENGTH + CHECKSUM_LENGTH;

fn checksum(header_and_seed: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = Sha3_256::digest(header_and_seed);
    let mut out = [0; CHECKSUM_LENGTH];
    out.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    out
}

/// Wrap seed bytes in a header and checksum and encode as base58 text.
pub fn pack(seed: &[u8; SEED_LENGTH]) -> String {
    let mut packed = Vec::with_capacity(CONTAINER_LENGTH);
    packed.extend_from_slice(&SEED_HEADER);
    packed.extend_from_slice(seed);
    let sum = checksum(&packed);
    packed.extend_from_slice(&sum);
    base58::encode(&packed)
}

/// Decode container text back into seed bytes, verifying the header,
/// the padding nibble and the checksum.
pub fn unpack(text: &str) -> SeedResult<[u8; SEED_LENGTH]> {
    let packed = base58::decode(text)?;
    if packed.len() != CONTAINER_LENGTH {
        return Err(length_error(format!(
            "expected {} container bytes, got {}",
            CONTAINER_LENGTH,
            packed.len()
        )));
    }

    let (header, rest) = packed.split_at(SEED_HEADER.len());
    let (seed, sum) = rest.split_at(SEED_LENGTH);

    if header != &SEED_HEADER[..] {
        return Err(OneErr::with_message(
            HEADER_MISMATCH_ERROR,
            format!("unexpected container header {}", hex::encode(header)),
        ));
    }

    if seed[SEED_LENGTH - 1] & 0x0f != 0 {
        return Err(length_error("seed padding nibble is not zero"));
    }

    if sum != &checksum(&packed[..SEED_HEADER.len() + SEED_LENGTH])[..] {
        return Err(OneErr::with_message(
            CHECKSUM_ERROR,
            "container checksum mismatch",
        ));
    }

    let mut out = [0; SEED_LENGTH];
    out.copy_from_slice(seed);
    Ok(out)
}
