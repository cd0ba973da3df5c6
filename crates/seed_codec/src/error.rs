//! Error kinds raised by the seed codecs.
//!
//! All fallible operations in this crate return [`SeedResult`], whose error
//! is a plain [`OneErr`]. The failed check is identified by the error's
//! kind string, one of the constants in this module:
//!
//! ```rust
//! # use seed_codec::*;
//! let err = Seed::from_container_text("0OIl").unwrap_err();
//! assert_eq!(error::DECODE_ERROR, err.str_kind());
//! ```

use one_err::OneErr;

/// Seed Codec Result Type.
pub type SeedResult<T> = Result<T, OneErr>;

/// Wrong seed, phrase or container length, or a nonzero padding nibble.
pub const LENGTH_ERROR: &str = "LengthError";

/// A phrase word is not an exact member of the dictionary.
pub const UNKNOWN_WORD_ERROR: &str = "UnknownWordError";

/// The mnemonic bit-packing did not leave exactly 4 trailing bits.
pub const PACKING_ERROR: &str = "PackingError";

/// The container text does not start with the seed header.
pub const HEADER_MISMATCH_ERROR: &str = "HeaderMismatchError";

/// The container text checksum does not match its contents.
pub const CHECKSUM_ERROR: &str = "ChecksumError";

/// Text contains a character outside the expected alphabet.
pub const DECODE_ERROR: &str = "DecodeError";

/// The requested network flag cannot be embedded in a seed.
pub const INVALID_FLAG_ERROR: &str = "InvalidFlagError";

/// A derivation parameter is zero or out of range.
pub const INVALID_ARGUMENT_ERROR: &str = "InvalidArgumentError";

/// The random source failed to supply seed entropy.
pub const ENTROPY_ERROR: &str = "EntropyError";

pub(crate) fn length_error(msg: impl std::fmt::Display) -> OneErr {
    OneErr::with_message(LENGTH_ERROR, msg)
}

pub(crate) fn decode_error(msg: impl std::fmt::Display) -> OneErr {
    OneErr::with_message(DECODE_ERROR, msg)
}

pub(crate) fn invalid_argument(msg: impl std::fmt::Display) -> OneErr {
    OneErr::with_message(INVALID_ARGUMENT_ERROR, msg)
}
