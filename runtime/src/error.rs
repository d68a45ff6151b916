//! Error types for the OKM runtime.
//!
//! The C ABI never returns these: math follows IEEE-754 and the exported
//! print functions swallow write failures. They surface only through the
//! Rust-level API used by interpreter hosts.

use std::io;
use thiserror::Error;

/// An error raised by the Rust-level runtime API.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Writing to the output sink failed.
    #[error("write failed: {0}")]
    Io(#[from] io::Error),

    /// No native function is registered under the requested name.
    #[error("unknown native function `{0}`")]
    UnknownNative(String),

    /// A native was called with the wrong number of arguments.
    #[error("{native}: expected {expected} argument(s), found {found}")]
    Arity {
        native: &'static str,
        expected: usize,
        found: usize,
    },

    /// A native argument had the wrong kind.
    #[error("{native}: argument {index} should be {expected}, found {found}")]
    ArgumentType {
        native: &'static str,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
