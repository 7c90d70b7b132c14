use std::fmt;

use rdm_common::fields::Fields;
use rdm_common::rdm::{CommandClass, NackReason, RequestStatus, ResponseType};

use super::{fmt_pid, ExpectedResult, Outcome, SuccessfulResult};

/// The device must have NACKed a request with a given reason.
///
/// Command class, PID and reason must all equal the configured ones.
#[derive(Debug, Clone)]
pub struct NackResult {
    command_class: CommandClass,
    pid: u16,
    nack_reason: NackReason,
    outcome: Outcome,
}

impl NackResult {
    /// Expect a NACK for `command_class` on `pid` with `nack_reason`.
    pub fn new(command_class: CommandClass, pid: u16, nack_reason: NackReason) -> Self {
        Self {
            command_class,
            pid,
            nack_reason,
            outcome: Outcome::default(),
        }
    }

    /// Expect a NACK for a GET.
    pub fn get(pid: u16, nack_reason: NackReason) -> Self {
        Self::new(CommandClass::Get, pid, nack_reason)
    }

    /// Expect a NACK for a SET.
    pub fn set(pid: u16, nack_reason: NackReason) -> Self {
        Self::new(CommandClass::Set, pid, nack_reason)
    }

    /// The expected command class.
    pub fn command_class(&self) -> CommandClass {
        self.command_class
    }

    /// The expected PID.
    pub fn pid(&self) -> u16 {
        self.pid
    }

    /// The expected NACK reason.
    pub fn nack_reason(&self) -> NackReason {
        self.nack_reason
    }
}

impl ExpectedResult for NackResult {
    fn matches(
        &self,
        status: &RequestStatus,
        command_class: CommandClass,
        pid_value: Option<u16>,
        _fields: &Fields,
    ) -> bool {
        // Reasons compare by wire value so `Other(1)` equals `FormatError`
        SuccessfulResult::completed_ok(status)
            && status.response_type() == Some(ResponseType::NackReason)
            && command_class == self.command_class
            && pid_value == Some(self.pid)
            && status
                .nack_reason()
                .is_some_and(|reason| reason.value() == self.nack_reason.value())
    }

    fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

impl fmt::Display for NackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CC: {}, PID {}, NACK {}",
            self.command_class,
            fmt_pid(self.pid),
            self.nack_reason
        )
    }
}

super::impl_with_outcome!(NackResult);
