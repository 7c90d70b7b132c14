//! # rdm_common
//!
//! Protocol primitives shared by the RDM transport, the response decoder and
//! the responder test kit:
//!
//! - [`rdm`]: command classes, response codes and types, NACK reasons and the
//!   per-transaction [`rdm::RequestStatus`]
//! - [`fields`]: the decoded response payload, either one row of fields or a
//!   sequence of rows
//! - [`pid`]: parameter identifiers and the process-wide, read-only PID store

#![warn(missing_docs)]

pub mod error;
pub mod fields;
pub mod pid;
pub mod rdm;

pub use error::{FieldsError, PidStoreError, StatusError};
