//! Expected result evaluation
//!
//! Checks one decoded transaction against the acceptable outcomes of a test,
//! runs the follow-up action of the first match and logs its diagnostics.
//! Verdicts accumulate into a [`TestReport`] with JSON and human-readable
//! output.

use std::fmt;

use rdm_common::fields::{write_field_map, Fields};
use rdm_common::rdm::{CommandClass, RequestStatus};
use serde::{Deserialize, Serialize};

use crate::expected::{Expectation, ExpectedResult};

/// One decoded transaction outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// How the transaction ended
    pub status: RequestStatus,
    /// Command class that was sent
    pub command_class: CommandClass,
    /// PID carried by the response
    pub pid_value: Option<u16>,
    /// Decoded response payload
    pub fields: Fields,
}

impl Transaction {
    /// Bundle a transaction outcome.
    pub fn new(
        status: RequestStatus,
        command_class: CommandClass,
        pid_value: Option<u16>,
        fields: Fields,
    ) -> Self {
        Self {
            status,
            command_class,
            pid_value,
            fields,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, CC: {}, PID ", self.status, self.command_class)?;
        match self.pid_value {
            Some(pid) => write!(f, "0x{:04x}", pid)?,
            None => f.write_str("none")?,
        }
        match &self.fields {
            Fields::Row(map) if map.is_empty() => Ok(()),
            Fields::Row(map) => {
                f.write_str(", fields ")?;
                write_field_map(f, map)
            }
            Fields::Rows(rows) => write!(f, ", {} rows", rows.len()),
        }
    }
}

/// Result of checking a transaction against a list of expected results.
#[derive(Debug)]
pub enum Verdict {
    /// An expected result matched and its action, if any, succeeded
    Passed {
        /// Position of the matching result
        index: usize,
        /// Description of the matching result
        description: String,
        /// Warning attached to the matching result
        warning: Option<String>,
        /// Advisory attached to the matching result
        advisory: Option<String>,
    },
    /// An expected result matched but its action failed
    ActionFailed {
        /// Position of the matching result
        index: usize,
        /// Description of the matching result
        description: String,
        /// Error returned by the action
        error: anyhow::Error,
        /// Warning attached to the matching result
        warning: Option<String>,
        /// Advisory attached to the matching result
        advisory: Option<String>,
    },
    /// No expected result matched
    Failed {
        /// Description of every expected result
        expected: Vec<String>,
        /// Description of the transaction
        actual: String,
    },
}

impl Verdict {
    /// True for [`Verdict::Passed`].
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Passed { .. })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed { description, .. } => write!(f, "Matched {}", description),
            Verdict::ActionFailed {
                description, error, ..
            } => write!(f, "Matched {} but action failed: {:#}", description, error),
            Verdict::Failed { expected, actual } => write!(
                f,
                "Got {}, expected one of: {}",
                actual,
                expected.join(" | ")
            ),
        }
    }
}

/// Find the first expected result `tx` matches.
pub fn find_match<'a>(expected: &'a [Expectation], tx: &Transaction) -> Option<(usize, &'a Expectation)> {
    expected.iter().enumerate().find(|(_, result)| {
        result.matches(&tx.status, tx.command_class, tx.pid_value, &tx.fields)
    })
}

/// Check `tx` against `expected`, in order.
///
/// On a match the warning is logged at `warn` level, the advisory at `info`
/// level, then the action runs. An action error is reported in the verdict.
pub fn evaluate(expected: &[Expectation], tx: &Transaction) -> Verdict {
    log::debug!("Evaluating {} against {} expected results", tx, expected.len());

    let Some((index, result)) = find_match(expected, tx) else {
        let expected: Vec<String> = expected.iter().map(ToString::to_string).collect();
        log::debug!("No expected result matched {}", tx);
        return Verdict::Failed {
            expected,
            actual: tx.to_string(),
        };
    };

    let description = result.to_string();
    log::debug!("Matched expected result {}: {}", index, description);

    let warning = result.warning().map(str::to_string);
    let advisory = result.advisory().map(str::to_string);
    if let Some(warning) = &warning {
        log::warn!("{}", warning);
    }
    if let Some(advisory) = &advisory {
        log::info!("{}", advisory);
    }

    if let Some(action) = result.action() {
        if let Err(error) = (action.as_ref())() {
            log::error!("Action for {} failed: {:#}", description, error);
            return Verdict::ActionFailed {
                index,
                description,
                error,
                warning,
                advisory,
            };
        }
    }

    Verdict::Passed {
        index,
        description,
        warning,
        advisory,
    }
}

/// Test status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    /// Test passed
    Pass,
    /// No expected result matched
    Fail,
    /// A matching result's action failed
    Error,
}

/// Individual test result entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResultEntry {
    /// Test name
    pub name: String,
    /// Status
    pub status: TestStatus,
    /// Verdict description
    pub detail: String,
}

/// Test report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestReport {
    /// Total tests run
    pub total: usize,
    /// Tests passed
    pub passed: usize,
    /// Tests failed, including action errors
    pub failed: usize,
    /// Warnings of matching results, prefixed with the test name
    pub warnings: Vec<String>,
    /// Advisories of matching results, prefixed with the test name
    pub advisories: Vec<String>,
    /// Individual results
    pub results: Vec<TestResultEntry>,
}

impl TestReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a verdict
    pub fn add_verdict(&mut self, name: &str, verdict: &Verdict) {
        self.total += 1;
        let (status, warning, advisory) = match verdict {
            Verdict::Passed {
                warning, advisory, ..
            } => {
                self.passed += 1;
                (TestStatus::Pass, warning, advisory)
            }
            Verdict::ActionFailed {
                warning, advisory, ..
            } => {
                self.failed += 1;
                (TestStatus::Error, warning, advisory)
            }
            Verdict::Failed { .. } => {
                self.failed += 1;
                (TestStatus::Fail, &None, &None)
            }
        };

        if let Some(warning) = warning {
            self.warnings.push(format!("{}: {}", name, warning));
        }
        if let Some(advisory) = advisory {
            self.advisories.push(format!("{}: {}", name, advisory));
        }

        self.results.push(TestResultEntry {
            name: name.to_string(),
            status,
            detail: verdict.to_string(),
        });
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Check if all tests passed
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Print human-readable summary
    pub fn print_summary(&self) {
        println!("\n=== RDM Responder Test Report ===\n");
        println!(
            "Total: {} | Passed: {} | Failed: {} | Warnings: {} | Advisories: {}",
            self.total,
            self.passed,
            self.failed,
            self.warnings.len(),
            self.advisories.len()
        );

        if self.failed > 0 {
            println!("\nFailed tests:");
            for result in &self.results {
                if result.status != TestStatus::Pass {
                    println!("  - {}", result.name);
                    println!("    {}", result.detail);
                }
            }
        }

        for warning in &self.warnings {
            println!("Warning: {}", warning);
        }
        for advisory in &self.advisories {
            println!("Advisory: {}", advisory);
        }

        println!(
            "\nResult: {}",
            if self.all_passed() { "PASS" } else { "FAIL" }
        );
    }
}
