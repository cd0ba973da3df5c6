#![deny(missing_docs)]
#![deny(unsafe_code)]
//! Seed codec library.
//!
//! Converts a 17 byte seed between raw bytes, short hex text, a 12 word
//! mnemonic phrase and checksummed base58 container text, and derives
//! subkeys from it.
//!
//! ```rust
//! # use seed_codec::*;
//! let seed = Seed::from_hex("442f54cd072a9638be4a0344e1a6e5f01").unwrap();
//! assert_eq!(NetworkFlag::Test, seed.network_flag());
//! assert_eq!("9J877LVjhr3Xxd2nGzRVRVNUZpSKJF4TH", seed.to_container_text());
//! assert_eq!("during", seed.to_phrase()[0]);
//! ```

/// Re-exported dependencies.
pub mod dependencies {
    pub use one_err;
    pub use sha3;
    pub use sodoken;
}

/// Seed length in bytes. The low nibble of the final byte is padding.
pub const SEED_LENGTH: usize = 17;

/// Number of words in a mnemonic phrase.
pub const PHRASE_LENGTH: usize = 12;

pub mod error;
pub use error::SeedResult;

pub mod base58;

pub mod dictionary;

pub mod mnemonic;

pub mod container;

mod seed;
pub use seed::*;
