//! # Declarative Expectations
//!
//! Lets test authors declare expected results in YAML and check transaction
//! outcomes against them.
//!
//! ## Usage
//!
//! ```ignore
//! use rdm_tck::conformance::{load_spec_str, evaluate, Transaction};
//! use rdm_common::pid;
//!
//! let spec = load_spec_str(yaml)?;
//! let expected = spec.resolve(pid::get_store())?;
//! let verdict = evaluate(&expected, &Transaction::new(status, CommandClass::Get, Some(0x0060), fields));
//! assert!(verdict.passed());
//! ```

mod evaluator;
mod spec;

pub use evaluator::*;
pub use spec::*;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use rdm_common::rdm::CommandClass;

/// A named list of acceptable outcomes for one transaction.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TestSpec {
    /// Unique test name
    pub name: String,
    /// Human-readable description
    pub description: Option<String>,
    /// Acceptable outcomes, checked in order
    pub expected: Vec<ExpectationSpec>,
}

/// One declared expected result.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectationSpec {
    /// Which result variant
    pub kind: ExpectationKind,
    /// Command class, for `ack` and `nack`
    pub command_class: Option<CommandClass>,
    /// PID name or value, for `ack` and `nack`
    pub pid: Option<PidRef>,
    /// NACK reason name or code, for `nack`
    pub nack_reason: Option<NackReasonRef>,
    /// Fields that must be present, for `ack`
    #[serde(default)]
    pub field_names: Vec<String>,
    /// Fields that must be present with these values, for `ack`
    #[serde(default)]
    pub field_values: IndexMap<String, serde_json::Value>,
    /// Warning to log on match
    pub warning: Option<String>,
    /// Advisory to log on match
    pub advisory: Option<String>,
}

/// Expected result variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectationKind {
    /// Request was broadcast
    Broadcast,
    /// Any well formed response
    Successful,
    /// Queued message drained to a real PID
    QueuedMessage,
    /// ACK for a command class and PID
    Ack,
    /// NACK for a command class, PID and reason
    Nack,
}

/// A PID given by name or by value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PidRef {
    /// Raw 16-bit identifier
    Value(u16),
    /// Name resolved through the PID store
    Name(String),
}

/// A NACK reason given by name or by code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NackReasonRef {
    /// Raw reason code
    Code(u16),
    /// Reason name, e.g. `unknown_pid`
    Name(String),
}
