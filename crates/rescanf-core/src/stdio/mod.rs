//! Formatted input scanning.

pub mod scanf;

pub use scanf::{
    ConvSpec, Directive, EOF, LengthMod, MAX_DIRECTIVES, ScanArg, Width, compile, sscanf,
};
