//! Error types shared across the RDM primitives.

use std::io::Error as IoError;

use thiserror::Error;

use crate::rdm::ResponseCode;

/// Errors raised while building or loading a PID store.
#[derive(Debug, Error)]
pub enum PidStoreError {
    /// A PID entry has an empty name.
    #[error("PID 0x{0:04x} has an empty name")]
    EmptyName(u16),

    /// Two entries share a name.
    #[error("Duplicate PID name: {0}")]
    DuplicateName(String),

    /// Two entries share a value.
    #[error("Duplicate PID value 0x{value:04x} ({existing} and {name})")]
    DuplicateValue {
        /// The shared value
        value: u16,
        /// Name already registered for the value
        existing: String,
        /// Name that was rejected
        name: String,
    },

    /// The PID file could not be read.
    #[error("Failed to read PID store {path}: {source}")]
    Io {
        /// Path of the PID file
        path: String,
        /// Underlying I/O error
        source: IoError,
    },

    /// The PID file is not valid YAML for a PID list.
    #[error("Failed to parse PID store: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Errors raised when turning decoder output into [`crate::fields::Fields`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldsError {
    /// The top-level value is neither a mapping nor a sequence of mappings.
    #[error("Malformed response fields: expected an object or an array of objects, got {0}")]
    Malformed(&'static str),

    /// A row of a sequence is not a mapping.
    #[error("Malformed response fields: row {index} is {kind}, expected an object")]
    MalformedRow {
        /// Position of the row in the sequence
        index: usize,
        /// JSON kind found instead of an object
        kind: &'static str,
    },

    /// A field value has no RDM representation.
    #[error("Unsupported value for field '{field}': {kind}")]
    UnsupportedValue {
        /// Name of the offending field
        field: String,
        /// JSON kind of the value
        kind: &'static str,
    },
}

/// Errors raised when building a [`crate::rdm::RequestStatus`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatusError {
    /// `failed` was given a code that is not a transport failure.
    #[error("{0} is not a transport failure")]
    NotAFailure(ResponseCode),
}
