#![deny(missing_docs)]
#![deny(unsafe_code)]

//! seed conversion command line tool
//!
//! # Usage
//!
//! ```text
//! seed-conv generate --test
//! seed-conv recover hex 442f54cd072a9638be4a0344e1a6e5f01
//! seed-conv recover phrase --piped < phrase.txt
//! seed-conv check base58
//! ```
//!
//! Secret inputs left off the command line are read with a no-echo
//! prompt, or from stdin with `--piped`, so they stay out of shell history.

/// Re-exported dependencies.
pub mod dependencies {
    pub use one_err;
    pub use seed_codec;
    pub use tracing;
}

mod config;
pub use config::*;

pub mod input;

pub mod report;
