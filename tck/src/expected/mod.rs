//! # Expected Results
//!
//! A responder test declares what it expects a transaction to produce, then
//! hands the decoded outcome to [`ExpectedResult::matches`]. The taxonomy is
//! closed:
//!
//! - [`BroadcastResult`]: the request was broadcast
//! - [`SuccessfulResult`]: a well formed response arrived (ACK or NACK)
//!   - [`QueuedMessageResult`]: ACK or NACK for any PID other than
//!     QUEUED_MESSAGE
//!   - [`NackResult`]: NACK for a command class, PID and reason
//!   - [`AckResult`]: ACK for a command class and PID, carrying given fields
//!
//! [`Expectation`] wraps all of them so a test can list several acceptable
//! outcomes. Every variant can carry an [`Outcome`]: an action to run and
//! warning/advisory messages to log when it matches.
//!
//! ```rust,ignore
//! use rdm_tck::expected::*;
//!
//! let expected: Vec<Expectation> = vec![
//!     AckResult::get(0x0060).with_field_names(["device_model"]).into(),
//!     NackResult::get(0x0060, NackReason::UnknownPid)
//!         .with_warning("DEVICE_INFO is mandatory")
//!         .into(),
//! ];
//! ```

mod ack;
mod nack;
mod queued;
mod status;

use std::fmt;
use std::sync::Arc;

use rdm_common::fields::Fields;
use rdm_common::rdm::{CommandClass, RequestStatus};

pub use ack::AckResult;
pub use nack::NackResult;
pub use queued::QueuedMessageResult;
pub use rdm_common::rdm::NackReason;
pub use status::{BroadcastResult, SuccessfulResult};

/// Follow-up task run by the test runner when an expectation matches.
pub type Action = Arc<dyn Fn() -> anyhow::Result<()> + Send + Sync>;

/// What a matching expectation asks the runner to do.
#[derive(Clone, Default)]
pub struct Outcome {
    action: Option<Action>,
    warning: Option<String>,
    advisory: Option<String>,
}

impl Outcome {
    /// The follow-up action, if any.
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// Warning to log on match, if any.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Advisory to log on match, if any.
    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outcome")
            .field("action", &self.action.as_ref().map(|_| "<action>"))
            .field("warning", &self.warning)
            .field("advisory", &self.advisory)
            .finish()
    }
}

/// The matching contract shared by every expected result.
pub trait ExpectedResult: fmt::Display {
    /// Check a transaction outcome against this expectation.
    ///
    /// * `status` - how the transaction ended
    /// * `command_class` - the command class that was sent
    /// * `pid_value` - PID carried by the response, `None` without a valid
    ///   response
    /// * `fields` - decoded response payload, possibly empty
    ///
    /// Pure: neither the expectation nor `fields` is modified, and the same
    /// inputs always give the same answer.
    fn matches(
        &self,
        status: &RequestStatus,
        command_class: CommandClass,
        pid_value: Option<u16>,
        fields: &Fields,
    ) -> bool;

    /// Action and diagnostics attached at construction.
    fn outcome(&self) -> &Outcome;

    /// The follow-up action, if any.
    fn action(&self) -> Option<&Action> {
        self.outcome().action()
    }

    /// Warning to log on match, if any.
    fn warning(&self) -> Option<&str> {
        self.outcome().warning()
    }

    /// Advisory to log on match, if any.
    fn advisory(&self) -> Option<&str> {
        self.outcome().advisory()
    }
}

/// Builder methods attaching an [`Outcome`] to an expected result.
pub trait WithOutcome: Sized {
    /// Mutable access to the outcome, used only while building.
    fn outcome_mut(&mut self) -> &mut Outcome;

    /// Run `action` when this result matches.
    fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.outcome_mut().action = Some(Arc::new(action));
        self
    }

    /// Log `warning` when this result matches.
    fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.outcome_mut().warning = Some(warning.into());
        self
    }

    /// Log `advisory` when this result matches.
    fn with_advisory(mut self, advisory: impl Into<String>) -> Self {
        self.outcome_mut().advisory = Some(advisory.into());
        self
    }
}

/// Implements [`WithOutcome`] for a result type with an `outcome` field.
macro_rules! impl_with_outcome {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::expected::WithOutcome for $ty {
                fn outcome_mut(&mut self) -> &mut $crate::expected::Outcome {
                    &mut self.outcome
                }
            }
        )+
    };
}
pub(crate) use impl_with_outcome;

/// Any expected result.
#[derive(Debug, Clone)]
pub enum Expectation {
    /// See [`BroadcastResult`]
    Broadcast(BroadcastResult),
    /// See [`SuccessfulResult`]
    Successful(SuccessfulResult),
    /// See [`QueuedMessageResult`]
    QueuedMessage(QueuedMessageResult),
    /// See [`NackResult`]
    Nack(NackResult),
    /// See [`AckResult`]
    Ack(AckResult),
}

impl Expectation {
    fn inner(&self) -> &dyn ExpectedResult {
        match self {
            Expectation::Broadcast(r) => r,
            Expectation::Successful(r) => r,
            Expectation::QueuedMessage(r) => r,
            Expectation::Nack(r) => r,
            Expectation::Ack(r) => r,
        }
    }
}

impl ExpectedResult for Expectation {
    fn matches(
        &self,
        status: &RequestStatus,
        command_class: CommandClass,
        pid_value: Option<u16>,
        fields: &Fields,
    ) -> bool {
        self.inner()
            .matches(status, command_class, pid_value, fields)
    }

    fn outcome(&self) -> &Outcome {
        self.inner().outcome()
    }
}

impl WithOutcome for Expectation {
    fn outcome_mut(&mut self) -> &mut Outcome {
        match self {
            Expectation::Broadcast(r) => r.outcome_mut(),
            Expectation::Successful(r) => r.outcome_mut(),
            Expectation::QueuedMessage(r) => r.outcome_mut(),
            Expectation::Nack(r) => r.outcome_mut(),
            Expectation::Ack(r) => r.outcome_mut(),
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl From<BroadcastResult> for Expectation {
    fn from(r: BroadcastResult) -> Self {
        Expectation::Broadcast(r)
    }
}

impl From<SuccessfulResult> for Expectation {
    fn from(r: SuccessfulResult) -> Self {
        Expectation::Successful(r)
    }
}

impl From<QueuedMessageResult> for Expectation {
    fn from(r: QueuedMessageResult) -> Self {
        Expectation::QueuedMessage(r)
    }
}

impl From<NackResult> for Expectation {
    fn from(r: NackResult) -> Self {
        Expectation::Nack(r)
    }
}

impl From<AckResult> for Expectation {
    fn from(r: AckResult) -> Self {
        Expectation::Ack(r)
    }
}

/// Render a PID the way failure reports show it.
pub(crate) fn fmt_pid(pid: u16) -> String {
    format!("0x{:04x}", pid)
}
