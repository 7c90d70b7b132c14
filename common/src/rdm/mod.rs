//! RDM transaction primitives.
//!
//! These are the already-decoded values a transport hands back for one
//! request: which command class was sent, how the transaction ended
//! ([`ResponseCode`]), what the responder said ([`ResponseType`]) and, for a
//! NACK, why ([`NackReason`]).

mod nack;
mod status;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use nack::NackReason;
pub use status::RequestStatus;

/// E1.20 command class byte of a GET response.
pub const GET_COMMAND_RESPONSE: u8 = 0x21;
/// E1.20 command class byte of a SET response.
pub const SET_COMMAND_RESPONSE: u8 = 0x31;

/// The operation kind of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandClass {
    /// GET: read a parameter
    Get,
    /// SET: write a parameter
    Set,
}

impl CommandClass {
    /// Map a response command class byte back to the request's class.
    pub fn from_response_byte(byte: u8) -> Option<Self> {
        match byte {
            GET_COMMAND_RESPONSE => Some(CommandClass::Get),
            SET_COMMAND_RESPONSE => Some(CommandClass::Set),
            _ => None,
        }
    }

    /// The response command class byte for this class.
    pub fn response_byte(self) -> u8 {
        match self {
            CommandClass::Get => GET_COMMAND_RESPONSE,
            CommandClass::Set => SET_COMMAND_RESPONSE,
        }
    }
}

impl fmt::Display for CommandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandClass::Get => write!(f, "Get"),
            CommandClass::Set => write!(f, "Set"),
        }
    }
}

/// How a transaction ended at the transport level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    /// A well formed response was received
    CompletedOk,
    /// The request was broadcast, no response is expected
    WasBroadcast,
    /// The request could not be sent
    FailedToSend,
    /// No response arrived in time
    Timeout,
    /// The response could not be parsed
    InvalidResponse,
    /// The destination UID is not known to the transport
    UnknownUid,
    /// The response checksum was wrong
    ChecksumIncorrect,
    /// The response transaction number did not match the request
    TransactionMismatch,
    /// The response sub-device did not match the request
    SubDeviceMismatch,
    /// The response source UID did not match the request destination
    SrcUidMismatch,
    /// The response destination UID did not match the request source
    DestUidMismatch,
    /// The response sub start code was wrong
    WrongSubStartCode,
    /// The response was shorter than the minimum frame
    PacketTooShort,
    /// The response length field disagreed with the frame
    PacketLengthMismatch,
    /// The parameter data length disagreed with the frame
    ParamLengthMismatch,
    /// The response carried an unknown command class
    InvalidCommandClass,
    /// The response command class did not match the request
    CommandClassMismatch,
    /// The response carried an unknown response type
    InvalidResponseType,
    /// The transport does not support discovery
    DiscoveryNotSupported,
    /// A discovery unique branch response was received
    DubResponse,
}

impl ResponseCode {
    /// True for every code other than [`CompletedOk`](Self::CompletedOk) and
    /// [`WasBroadcast`](Self::WasBroadcast).
    pub fn is_transport_error(self) -> bool {
        !matches!(self, ResponseCode::CompletedOk | ResponseCode::WasBroadcast)
    }

    /// Every response code, in declaration order.
    pub const ALL: [ResponseCode; 20] = [
        ResponseCode::CompletedOk,
        ResponseCode::WasBroadcast,
        ResponseCode::FailedToSend,
        ResponseCode::Timeout,
        ResponseCode::InvalidResponse,
        ResponseCode::UnknownUid,
        ResponseCode::ChecksumIncorrect,
        ResponseCode::TransactionMismatch,
        ResponseCode::SubDeviceMismatch,
        ResponseCode::SrcUidMismatch,
        ResponseCode::DestUidMismatch,
        ResponseCode::WrongSubStartCode,
        ResponseCode::PacketTooShort,
        ResponseCode::PacketLengthMismatch,
        ResponseCode::ParamLengthMismatch,
        ResponseCode::InvalidCommandClass,
        ResponseCode::CommandClassMismatch,
        ResponseCode::InvalidResponseType,
        ResponseCode::DiscoveryNotSupported,
        ResponseCode::DubResponse,
    ];

    fn name(self) -> &'static str {
        match self {
            ResponseCode::CompletedOk => "RDM_COMPLETED_OK",
            ResponseCode::WasBroadcast => "RDM_WAS_BROADCAST",
            ResponseCode::FailedToSend => "RDM_FAILED_TO_SEND",
            ResponseCode::Timeout => "RDM_TIMEOUT",
            ResponseCode::InvalidResponse => "RDM_INVALID_RESPONSE",
            ResponseCode::UnknownUid => "RDM_UNKNOWN_UID",
            ResponseCode::ChecksumIncorrect => "RDM_CHECKSUM_INCORRECT",
            ResponseCode::TransactionMismatch => "RDM_TRANSACTION_MISMATCH",
            ResponseCode::SubDeviceMismatch => "RDM_SUB_DEVICE_MISMATCH",
            ResponseCode::SrcUidMismatch => "RDM_SRC_UID_MISMATCH",
            ResponseCode::DestUidMismatch => "RDM_DEST_UID_MISMATCH",
            ResponseCode::WrongSubStartCode => "RDM_WRONG_SUB_START_CODE",
            ResponseCode::PacketTooShort => "RDM_PACKET_TOO_SHORT",
            ResponseCode::PacketLengthMismatch => "RDM_PACKET_LENGTH_MISMATCH",
            ResponseCode::ParamLengthMismatch => "RDM_PARAM_LENGTH_MISMATCH",
            ResponseCode::InvalidCommandClass => "RDM_INVALID_COMMAND_CLASS",
            ResponseCode::CommandClassMismatch => "RDM_COMMAND_CLASS_MISMATCH",
            ResponseCode::InvalidResponseType => "RDM_INVALID_RESPONSE_TYPE",
            ResponseCode::DiscoveryNotSupported => "RDM_PLUGIN_DISCOVERY_NOT_SUPPORTED",
            ResponseCode::DubResponse => "RDM_DUB_RESPONSE",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The responder's disposition of a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseType {
    /// Positive acknowledgement
    Ack,
    /// The responder will answer later via QUEUED_MESSAGE
    AckTimer,
    /// Negative acknowledgement, see [`NackReason`]
    NackReason,
    /// The response continues in a further frame
    AckOverflow,
}

impl ResponseType {
    /// ACK or NACK: the responder gave a final answer.
    pub fn is_definite(self) -> bool {
        matches!(self, ResponseType::Ack | ResponseType::NackReason)
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResponseType::Ack => "ACK",
            ResponseType::AckTimer => "ACK_TIMER",
            ResponseType::NackReason => "NACK_REASON",
            ResponseType::AckOverflow => "ACK_OVERFLOW",
        };
        f.write_str(name)
    }
}
