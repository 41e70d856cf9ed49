//! Test execution engine.

use crate::diff;
use crate::exec::{ExecOutcome, execute_case};
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| {
                let expected = expected_outcome(case).render();
                let actual = execute_case(
                    case.source.as_bytes(),
                    case.format.as_bytes(),
                    &case.slots,
                )
                .render();
                let passed = actual == expected;
                let diff = if passed {
                    None
                } else {
                    Some(diff::render_diff(&expected, &actual))
                };
                VerificationResult {
                    case_name: case.name.clone(),
                    passed,
                    expected,
                    actual,
                    diff,
                }
            })
            .collect()
    }
}

fn expected_outcome(case: &FixtureCase) -> ExecOutcome {
    ExecOutcome {
        ret: case.expected_ret,
        slots: case.expected_slots.clone(),
    }
}
