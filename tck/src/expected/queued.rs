use std::fmt;

use rdm_common::fields::Fields;
use rdm_common::pid::{self, QUEUED_MESSAGE};
use rdm_common::rdm::{CommandClass, RequestStatus};

use super::{ExpectedResult, Outcome, SuccessfulResult};

/// A QUEUED_MESSAGE request must have drained to a real response.
///
/// Matches an ACK or NACK carrying any PID other than QUEUED_MESSAGE: a
/// responder emptying its queue answers with the PID of the queued request,
/// never with another queued-message notification. QUEUED_MESSAGE is
/// resolved through the process-wide PID store on each evaluation.
#[derive(Debug, Clone, Default)]
pub struct QueuedMessageResult {
    outcome: Outcome,
}

impl QueuedMessageResult {
    /// Expect a drained queued message.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExpectedResult for QueuedMessageResult {
    fn matches(
        &self,
        status: &RequestStatus,
        _command_class: CommandClass,
        pid_value: Option<u16>,
        _fields: &Fields,
    ) -> bool {
        if !SuccessfulResult::completed_ok(status) {
            return false;
        }

        let Some(queued_message) = pid::get_store().get_name(QUEUED_MESSAGE) else {
            return false;
        };

        status.response_type().is_some_and(|t| t.is_definite())
            && pid_value != Some(queued_message.value)
    }

    fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

impl fmt::Display for QueuedMessageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ACK or NACK for any PID other than {}", QUEUED_MESSAGE)
    }
}

super::impl_with_outcome!(QueuedMessageResult);

#[cfg(test)]
mod tests {
    use super::*;
    use rdm_common::rdm::{NackReason, ResponseCode};

    const QUEUED: u16 = 0x0020;
    const STATUS_MESSAGES: u16 = 0x0030;

    #[test]
    fn test_queued_message_pid_does_not_match() {
        let expected = QueuedMessageResult::new();
        assert!(!expected.matches(
            &RequestStatus::ack(),
            CommandClass::Get,
            Some(QUEUED),
            &Fields::empty()
        ));
    }

    #[test]
    fn test_real_pid_matches_ack_and_nack() {
        let expected = QueuedMessageResult::new();
        assert!(expected.matches(
            &RequestStatus::ack(),
            CommandClass::Get,
            Some(STATUS_MESSAGES),
            &Fields::empty()
        ));
        assert!(expected.matches(
            &RequestStatus::nack(NackReason::DataOutOfRange),
            CommandClass::Set,
            Some(0x00F0),
            &Fields::empty()
        ));
    }

    #[test]
    fn test_indeterminate_response_types_do_not_match() {
        let expected = QueuedMessageResult::new();
        for status in [RequestStatus::ack_timer(), RequestStatus::ack_overflow()] {
            assert!(!expected.matches(
                &status,
                CommandClass::Get,
                Some(STATUS_MESSAGES),
                &Fields::empty()
            ));
        }
    }

    #[test]
    fn test_requires_completed_transaction() {
        let expected = QueuedMessageResult::new();
        let status = RequestStatus::failed(ResponseCode::Timeout).unwrap();
        assert!(!expected.matches(&status, CommandClass::Get, Some(STATUS_MESSAGES), &Fields::empty()));
        assert!(!expected.matches(
            &RequestStatus::broadcast(),
            CommandClass::Get,
            Some(STATUS_MESSAGES),
            &Fields::empty()
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            QueuedMessageResult::new().to_string(),
            "ACK or NACK for any PID other than QUEUED_MESSAGE"
        );
    }
}
