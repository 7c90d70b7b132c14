use std::fmt;

/// Reason code carried by a NACK response.
///
/// Standard codes come from E1.20 table A-17 (and E1.37-2 for
/// `ActionNotSupported`); anything else is kept verbatim in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NackReason {
    /// NR_UNKNOWN_PID
    UnknownPid,
    /// NR_FORMAT_ERROR
    FormatError,
    /// NR_HARDWARE_FAULT
    HardwareFault,
    /// NR_PROXY_REJECT
    ProxyReject,
    /// NR_WRITE_PROTECT
    WriteProtect,
    /// NR_UNSUPPORTED_COMMAND_CLASS
    UnsupportedCommandClass,
    /// NR_DATA_OUT_OF_RANGE
    DataOutOfRange,
    /// NR_BUFFER_FULL
    BufferFull,
    /// NR_PACKET_SIZE_UNSUPPORTED
    PacketSizeUnsupported,
    /// NR_SUB_DEVICE_OUT_OF_RANGE
    SubDeviceOutOfRange,
    /// NR_PROXY_BUFFER_FULL
    ProxyBufferFull,
    /// NR_ACTION_NOT_SUPPORTED
    ActionNotSupported,
    /// Manufacturer specific or unknown code
    Other(u16),
}

const NAMED: [(NackReason, u16, &str, &str); 12] = [
    (NackReason::UnknownPid, 0x0000, "unknown_pid", "Unknown PID"),
    (NackReason::FormatError, 0x0001, "format_error", "Format error"),
    (NackReason::HardwareFault, 0x0002, "hardware_fault", "Hardware fault"),
    (NackReason::ProxyReject, 0x0003, "proxy_reject", "Proxy reject"),
    (NackReason::WriteProtect, 0x0004, "write_protect", "Write protect"),
    (
        NackReason::UnsupportedCommandClass,
        0x0005,
        "unsupported_command_class",
        "Unsupported command class",
    ),
    (NackReason::DataOutOfRange, 0x0006, "data_out_of_range", "Data out of range"),
    (NackReason::BufferFull, 0x0007, "buffer_full", "Buffer full"),
    (
        NackReason::PacketSizeUnsupported,
        0x0008,
        "packet_size_unsupported",
        "Packet size unsupported",
    ),
    (
        NackReason::SubDeviceOutOfRange,
        0x0009,
        "sub_device_out_of_range",
        "Sub device out of range",
    ),
    (NackReason::ProxyBufferFull, 0x000A, "proxy_buffer_full", "Proxy buffer full"),
    (
        NackReason::ActionNotSupported,
        0x000B,
        "action_not_supported",
        "Action not supported",
    ),
];

impl NackReason {
    /// Decode a raw reason code.
    pub fn from_value(value: u16) -> Self {
        NAMED
            .iter()
            .find(|(_, v, _, _)| *v == value)
            .map(|(reason, _, _, _)| *reason)
            .unwrap_or(NackReason::Other(value))
    }

    /// The raw reason code.
    pub fn value(self) -> u16 {
        match self {
            NackReason::Other(value) => value,
            named => NAMED
                .iter()
                .find(|(reason, _, _, _)| *reason == named)
                .map(|(_, v, _, _)| *v)
                .unwrap_or_default(),
        }
    }

    /// Look a reason up by name.
    ///
    /// Accepts the snake case name (`unknown_pid`) and the E1.20 constant
    /// (`NR_UNKNOWN_PID`), case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.to_ascii_lowercase();
        let key = lowered.strip_prefix("nr_").unwrap_or(&lowered);
        NAMED
            .iter()
            .find(|(_, _, n, _)| *n == key)
            .map(|(reason, _, _, _)| *reason)
    }

    fn description(self) -> Option<&'static str> {
        NAMED
            .iter()
            .find(|(reason, _, _, _)| *reason == self)
            .map(|(_, _, _, d)| *d)
    }
}

impl From<u16> for NackReason {
    fn from(value: u16) -> Self {
        NackReason::from_value(value)
    }
}

impl From<NackReason> for u16 {
    fn from(reason: NackReason) -> Self {
        reason.value()
    }
}

impl fmt::Display for NackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(description) => f.write_str(description),
            None => write!(f, "Unknown NACK reason 0x{:04x}", self.value()),
        }
    }
}
