//! # RDM-TCK: Responder Test Kit
//!
//! Expected-result matching for RDM responder conformance tests.
//!
//! ## Architecture Overview
//!
//! - **Expected results**: acceptable outcomes of one transaction
//!   (broadcast, any successful response, a drained queued message, an ACK
//!   with optional field checks, or a specific NACK), each with an optional
//!   follow-up action, warning and advisory
//! - **Conformance**: expected results declared in YAML, resolved through the
//!   PID store, then evaluated against decoded transactions into a report
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rdm_tck::prelude::*;
//!
//! let expected: Vec<Expectation> = vec![
//!     AckResult::get(0x0060).with_field_names(["device_model"]).into(),
//!     NackResult::get(0x0060, NackReason::UnknownPid)
//!         .with_warning("DEVICE_INFO should be supported")
//!         .into(),
//! ];
//! let tx = Transaction::new(RequestStatus::ack(), CommandClass::Get, Some(0x0060), fields);
//! assert!(evaluate(&expected, &tx).passed());
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure matching**: `matches` never mutates the response or the result
//! 2. **Ordered alternatives**: the first matching result wins
//! 3. **Shared primitives**: protocol types live in `rdm_common`

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Expected result variants and their shared outcome
pub mod expected;

/// Declarative expectations and the evaluator
///
/// ```ignore
/// use rdm_tck::conformance::{load_specs_from_dir, evaluate};
///
/// let specs = load_specs_from_dir(Path::new("specs"))?;
/// ```
pub mod conformance;

/// Convenient re-exports for common usage
pub mod prelude;

// Re-export commonly used types at crate root
pub use conformance::{evaluate, TestReport, TestSpec, TestStatus, Transaction, Verdict};
pub use expected::{Expectation, ExpectedResult, WithOutcome};

/// TCK version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
