//! Prelude module for convenient imports
//!
//! Import everything you need with:
//! ```rust,ignore
//! use rdm_tck::prelude::*;
//! ```

// Expected results
pub use crate::expected::{
    AckResult, Action, BroadcastResult, Expectation, ExpectedResult, NackResult, Outcome,
    QueuedMessageResult, SuccessfulResult, WithOutcome,
};

// Declarative specs and evaluation
pub use crate::conformance::{
    evaluate, find_match, load_spec_file, load_spec_str, load_specs_from_dir, TestReport,
    TestSpec, TestStatus, Transaction, Verdict,
};

// Protocol primitives
pub use rdm_common::field_map;
pub use rdm_common::fields::{FieldMap, FieldValue, Fields};
pub use rdm_common::pid::{get_store, Pid, PidStore};
pub use rdm_common::rdm::{CommandClass, NackReason, RequestStatus, ResponseCode, ResponseType};

// Commonly used external types
pub use anyhow::{Context, Result};
