use std::fmt;

use rdm_common::fields::Fields;
use rdm_common::rdm::{CommandClass, RequestStatus, ResponseCode};

use super::{ExpectedResult, Outcome};

/// The request must have been sent to a broadcast address.
#[derive(Debug, Clone, Default)]
pub struct BroadcastResult {
    outcome: Outcome,
}

impl BroadcastResult {
    /// Expect a broadcast.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExpectedResult for BroadcastResult {
    fn matches(
        &self,
        status: &RequestStatus,
        _command_class: CommandClass,
        _pid_value: Option<u16>,
        _fields: &Fields,
    ) -> bool {
        status.response_code() == ResponseCode::WasBroadcast
    }

    fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

impl fmt::Display for BroadcastResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ResponseCode::WasBroadcast)
    }
}

/// The device must have sent a well formed response.
///
/// Says nothing about ACK or NACK, nor about which command or parameter was
/// involved; the richer results build on [`SuccessfulResult::completed_ok`].
#[derive(Debug, Clone, Default)]
pub struct SuccessfulResult {
    outcome: Outcome,
}

impl SuccessfulResult {
    /// Expect any well formed response.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the transaction completed with a response.
    pub fn completed_ok(status: &RequestStatus) -> bool {
        status.response_code() == ResponseCode::CompletedOk
    }
}

impl ExpectedResult for SuccessfulResult {
    fn matches(
        &self,
        status: &RequestStatus,
        _command_class: CommandClass,
        _pid_value: Option<u16>,
        _fields: &Fields,
    ) -> bool {
        Self::completed_ok(status)
    }

    fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

impl fmt::Display for SuccessfulResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ResponseCode::CompletedOk)
    }
}

super::impl_with_outcome!(BroadcastResult, SuccessfulResult);
