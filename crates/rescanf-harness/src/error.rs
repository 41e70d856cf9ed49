//! Harness error types.

use std::path::PathBuf;

/// Errors surfaced by fixture loading and CLI plumbing.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("failed to read fixture file {path}: {source}")]
    FixtureIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse fixture JSON: {0}")]
    FixtureJson(#[from] serde_json::Error),

    #[error("failed to write report {path}: {source}")]
    ReportIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unknown slot kind {0:?} (expected char|i16|i32|i64|u16|u32|u64|f32|f64|str:<capacity>)")]
    SlotKind(String),
}
