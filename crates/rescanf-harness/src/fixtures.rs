//! Fixture loading and management.

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;
use crate::exec::SlotSpec;

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Source text handed to the scanner.
    pub source: String,
    /// Format string driving the scan.
    pub format: String,
    /// Destination slots, in format binding order.
    pub slots: Vec<SlotSpec>,
    /// Expected return value (assignment count or the EOF sentinel).
    pub expected_ret: i32,
    /// Expected rendered slot values after the scan, one per slot.
    pub expected_slots: Vec<String>,
}

/// A collection of fixture cases for a scanning behavior family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Behavior family name (e.g. "scanf/integers").
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|source| HarnessError::FixtureIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}
