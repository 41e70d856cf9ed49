//! Conformance testing harness for rescanf.
//!
//! This crate provides:
//! - Fixture loading: scanning scenarios described as JSON reference data
//! - Fixture execution: run each scenario through the scanning engine
//! - Verification: compare return values and slot contents against expectations
//! - Report generation: human-readable + machine-readable conformance reports

#![forbid(unsafe_code)]

pub mod diff;
pub mod error;
pub mod exec;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod verify;

pub use error::HarnessError;
pub use exec::{ExecOutcome, SlotSpec, execute_case};
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
