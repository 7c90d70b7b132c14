use std::fmt;

use super::{NackReason, ResponseCode, ResponseType};
use crate::error::StatusError;

/// Outcome of a single RDM transaction as reported by the transport.
///
/// The constructors keep the combinations consistent: a response type only
/// exists for a completed transaction, and a NACK reason only exists for a
/// NACK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestStatus {
    response_code: ResponseCode,
    response_type: Option<ResponseType>,
    nack_reason: Option<NackReason>,
}

impl RequestStatus {
    fn completed(response_type: ResponseType) -> Self {
        Self {
            response_code: ResponseCode::CompletedOk,
            response_type: Some(response_type),
            nack_reason: None,
        }
    }

    /// A completed transaction answered with an ACK.
    pub fn ack() -> Self {
        Self::completed(ResponseType::Ack)
    }

    /// A completed transaction answered with an ACK_TIMER.
    pub fn ack_timer() -> Self {
        Self::completed(ResponseType::AckTimer)
    }

    /// A completed transaction answered with an ACK_OVERFLOW.
    pub fn ack_overflow() -> Self {
        Self::completed(ResponseType::AckOverflow)
    }

    /// A completed transaction answered with a NACK.
    pub fn nack(reason: NackReason) -> Self {
        Self {
            response_code: ResponseCode::CompletedOk,
            response_type: Some(ResponseType::NackReason),
            nack_reason: Some(reason),
        }
    }

    /// A request sent to a broadcast address.
    pub fn broadcast() -> Self {
        Self {
            response_code: ResponseCode::WasBroadcast,
            response_type: None,
            nack_reason: None,
        }
    }

    /// A transaction that failed at the transport level.
    pub fn failed(code: ResponseCode) -> Result<Self, StatusError> {
        if !code.is_transport_error() {
            return Err(StatusError::NotAFailure(code));
        }
        Ok(Self {
            response_code: code,
            response_type: None,
            nack_reason: None,
        })
    }

    /// How the transaction ended.
    pub fn response_code(&self) -> ResponseCode {
        self.response_code
    }

    /// The responder's disposition, only for completed transactions.
    pub fn response_type(&self) -> Option<ResponseType> {
        self.response_type
    }

    /// The NACK reason, only for NACK responses.
    pub fn nack_reason(&self) -> Option<NackReason> {
        self.nack_reason
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.response_code)?;
        if let Some(response_type) = self.response_type {
            write!(f, ", {}", response_type)?;
        }
        if let Some(reason) = self.nack_reason {
            write!(f, " ({})", reason)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nack_carries_reason() {
        let status = RequestStatus::nack(NackReason::WriteProtect);
        assert_eq!(status.response_code(), ResponseCode::CompletedOk);
        assert_eq!(status.response_type(), Some(ResponseType::NackReason));
        assert_eq!(status.nack_reason(), Some(NackReason::WriteProtect));
    }

    #[test]
    fn test_ack_has_no_reason() {
        let status = RequestStatus::ack();
        assert_eq!(status.response_type(), Some(ResponseType::Ack));
        assert_eq!(status.nack_reason(), None);
    }

    #[test]
    fn test_broadcast_has_no_response_type() {
        let status = RequestStatus::broadcast();
        assert_eq!(status.response_code(), ResponseCode::WasBroadcast);
        assert_eq!(status.response_type(), None);
    }

    #[test]
    fn test_failed_rejects_non_failures() {
        assert_eq!(
            RequestStatus::failed(ResponseCode::CompletedOk),
            Err(StatusError::NotAFailure(ResponseCode::CompletedOk))
        );
        assert!(RequestStatus::failed(ResponseCode::WasBroadcast).is_err());
        let status = RequestStatus::failed(ResponseCode::Timeout).unwrap();
        assert_eq!(status.response_code(), ResponseCode::Timeout);
        assert_eq!(status.response_type(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            RequestStatus::nack(NackReason::UnknownPid).to_string(),
            "RDM_COMPLETED_OK, NACK_REASON (Unknown PID)"
        );
        assert_eq!(RequestStatus::broadcast().to_string(), "RDM_WAS_BROADCAST");
    }
}
