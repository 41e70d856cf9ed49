//! # rescanf-core
//!
//! Safe Rust implementation of the C `sscanf` scanning semantics.
//!
//! This crate provides a pure-Rust, safe reimplementation of in-memory
//! formatted input scanning: a format string is compiled into a directive
//! sequence, then matched against a source buffer in a single forward pass,
//! converting matched text into typed destination slots. No `unsafe` code
//! is permitted at the crate level.

#![deny(unsafe_code)]

pub mod ctype;
pub mod stdio;
pub mod stdlib;
pub mod string;
