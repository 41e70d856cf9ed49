//! String primitives.
//!
//! Implements the `<string.h>` subset the scanning engine consumes as pure
//! functions over byte slices.

pub mod str;

// Re-export commonly used functions.
pub use str::{strcpy, strlen, strncmp, strspn};
