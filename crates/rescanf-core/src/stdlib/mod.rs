//! Numeric conversion helpers.

pub mod conversion;

pub use conversion::{ConversionStatus, atoi, strntoull, strtod};
