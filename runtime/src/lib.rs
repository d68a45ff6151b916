//! OKM Runtime Library
//!
//! This library provides the runtime functions that compiled OKM programs
//! link against for `std.io` and `std.math`. All exported functions use the
//! C ABI and keep the symbol names the code generator emits.

pub mod error;
pub mod format;
pub mod io;
pub mod math;
pub mod natives;
pub mod random;

// Re-export all public functions at the crate root for convenience
pub use error::{Result, RuntimeError};
pub use format::*;
pub use io::*;
pub use math::*;
pub use natives::{Native, Value};
pub use random::*;
