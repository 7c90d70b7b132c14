use std::fmt;

use rdm_common::fields::{write_field_map, FieldMap, FieldValue, Fields};
use rdm_common::rdm::{CommandClass, RequestStatus, ResponseType};

use super::{fmt_pid, ExpectedResult, Outcome, SuccessfulResult};

/// The device must have ACKed a request, optionally with given fields.
///
/// On top of the ACK, command class and PID checks, the response is verified
/// in two independent steps:
///
/// 1. every name in `field_names` is a key of the response row, or of every
///    row when the response is a sequence of rows;
/// 2. every `field_values` entry is present in the top-level response and
///    equal to the expected value. A sequence of rows has no top-level
///    members, so value checks never match row-shaped responses; check such
///    rows by name here and verify the values separately.
///
/// Both sets are empty unless configured, which adds no extra check.
#[derive(Debug, Clone)]
pub struct AckResult {
    command_class: CommandClass,
    pid: u16,
    field_names: Vec<String>,
    field_values: FieldMap,
    outcome: Outcome,
}

impl AckResult {
    /// Expect an ACK for `command_class` on `pid`.
    pub fn new(command_class: CommandClass, pid: u16) -> Self {
        Self {
            command_class,
            pid,
            field_names: Vec::new(),
            field_values: FieldMap::new(),
            outcome: Outcome::default(),
        }
    }

    /// Expect an ACK for a GET.
    pub fn get(pid: u16) -> Self {
        Self::new(CommandClass::Get, pid)
    }

    /// Expect an ACK for a SET.
    pub fn set(pid: u16) -> Self {
        Self::new(CommandClass::Set, pid)
    }

    /// Require these fields to be present.
    pub fn with_field_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Require these fields to be present with these values.
    pub fn with_field_values<I, S, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<FieldValue>,
    {
        self.field_values
            .extend(values.into_iter().map(|(name, value)| (name.into(), value.into())));
        self
    }

    /// The expected command class.
    pub fn command_class(&self) -> CommandClass {
        self.command_class
    }

    /// The expected PID.
    pub fn pid(&self) -> u16 {
        self.pid
    }

    /// Names required in every row.
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// Values required in the top-level response.
    pub fn field_values(&self) -> &FieldMap {
        &self.field_values
    }

    fn fields_present(&self, fields: &Fields) -> bool {
        fields
            .rows()
            .all(|row| self.field_names.iter().all(|name| row.contains_key(name)))
    }

    fn values_equal(&self, fields: &Fields) -> bool {
        self.field_values
            .iter()
            .all(|(name, expected)| fields.get(name) == Some(expected))
    }
}

impl ExpectedResult for AckResult {
    fn matches(
        &self,
        status: &RequestStatus,
        command_class: CommandClass,
        pid_value: Option<u16>,
        fields: &Fields,
    ) -> bool {
        if !SuccessfulResult::completed_ok(status)
            || status.response_type() != Some(ResponseType::Ack)
            || command_class != self.command_class
            || pid_value != Some(self.pid)
        {
            return false;
        }

        self.fields_present(fields) && self.values_equal(fields)
    }

    fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

impl fmt::Display for AckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CC: {}, PID {}, ACK, fields [{}], values ",
            self.command_class,
            fmt_pid(self.pid),
            self.field_names.join(", ")
        )?;
        write_field_map(f, &self.field_values)
    }
}

super::impl_with_outcome!(AckResult);

#[cfg(test)]
mod tests {
    use super::*;
    use rdm_common::field_map;
    use rdm_common::rdm::{NackReason, ResponseCode};

    const DEVICE_INFO: u16 = 0x0060;

    fn ack_get(expected: &AckResult, fields: &Fields) -> bool {
        expected.matches(&RequestStatus::ack(), CommandClass::Get, Some(DEVICE_INFO), fields)
    }

    #[test]
    fn test_field_names_present() {
        let expected = AckResult::get(DEVICE_INFO).with_field_names(["a", "b"]);
        assert!(ack_get(&expected, &Fields::Row(field_map! { "a" => 1u8, "b" => 2u8 })));
        assert!(!ack_get(&expected, &Fields::Row(field_map! { "a" => 1u8 })));
    }

    #[test]
    fn test_command_class_pid_and_type_gate_field_checks() {
        let expected = AckResult::get(DEVICE_INFO).with_field_names(["a", "b"]);
        let fields = Fields::Row(field_map! { "a" => 1u8, "b" => 2u8 });
        assert!(!expected.matches(&RequestStatus::ack(), CommandClass::Set, Some(DEVICE_INFO), &fields));
        assert!(!expected.matches(&RequestStatus::ack(), CommandClass::Get, Some(0x0061), &fields));
        assert!(!expected.matches(&RequestStatus::ack(), CommandClass::Get, None, &fields));
        assert!(!expected.matches(
            &RequestStatus::nack(NackReason::UnknownPid),
            CommandClass::Get,
            Some(DEVICE_INFO),
            &fields
        ));
        assert!(!expected.matches(
            &RequestStatus::ack_timer(),
            CommandClass::Get,
            Some(DEVICE_INFO),
            &fields
        ));
        let timeout = RequestStatus::failed(ResponseCode::Timeout).unwrap();
        assert!(!expected.matches(&timeout, CommandClass::Get, Some(DEVICE_INFO), &fields));
    }

    #[test]
    fn test_field_values() {
        let expected = AckResult::get(DEVICE_INFO).with_field_values([("a", 5u8)]);
        assert!(ack_get(&expected, &Fields::Row(field_map! { "a" => 5u8, "b" => 2u8 })));
        assert!(!ack_get(&expected, &Fields::Row(field_map! { "a" => 6u8, "b" => 2u8 })));
        assert!(!ack_get(&expected, &Fields::Row(field_map! { "b" => 2u8 })));
    }

    #[test]
    fn test_field_values_use_numeric_equality() {
        let expected = AckResult::get(DEVICE_INFO).with_field_values([("offset", -1i64)]);
        assert!(ack_get(&expected, &Fields::Row(field_map! { "offset" => FieldValue::Int(-1) })));
        let expected = AckResult::get(DEVICE_INFO).with_field_values([("count", 3i64)]);
        assert!(ack_get(&expected, &Fields::Row(field_map! { "count" => 3u16 })));
    }

    #[test]
    fn test_field_values_compare_labels_exactly() {
        let expected = AckResult::get(0x0082).with_field_values([("label", "Dimmer")]);
        let matches = |label: FieldValue| {
            expected.matches(
                &RequestStatus::ack(),
                CommandClass::Get,
                Some(0x0082),
                &Fields::Row(field_map! { "label" => label }),
            )
        };
        assert!(matches(FieldValue::from("Dimmer")));
        assert!(matches(FieldValue::Bytes(b"Dimmer".to_vec())));
        assert!(!matches(FieldValue::from("dimmer")));
        assert!(!matches(FieldValue::from("Dimmer ")));
    }

    #[test]
    fn test_rows_require_every_name_in_every_row() {
        let expected = AckResult::get(DEVICE_INFO).with_field_names(["a", "b"]);
        let uniform = Fields::Rows(vec![
            field_map! { "a" => 1u8, "b" => 2u8 },
            field_map! { "a" => 1u8, "b" => 3u8 },
        ]);
        assert!(ack_get(&expected, &uniform));

        let ragged = Fields::Rows(vec![
            field_map! { "a" => 1u8, "b" => 2u8 },
            field_map! { "a" => 1u8 },
        ]);
        assert!(!ack_get(&expected, &ragged));
    }

    #[test]
    fn test_empty_rows_pass_presence_check() {
        let expected = AckResult::get(DEVICE_INFO).with_field_names(["a"]);
        assert!(ack_get(&expected, &Fields::Rows(Vec::new())));
    }

    #[test]
    fn test_value_checks_apply_to_top_level_only() {
        let expected = AckResult::get(DEVICE_INFO).with_field_values([("a", 1u8)]);
        let rows = Fields::Rows(vec![field_map! { "a" => 1u8 }]);
        assert!(!ack_get(&expected, &rows));
    }

    #[test]
    fn test_defaults_add_no_checks() {
        let expected = AckResult::set(0x1000);
        assert!(expected.field_names().is_empty());
        assert!(expected.field_values().is_empty());
        assert!(expected.matches(
            &RequestStatus::ack(),
            CommandClass::Set,
            Some(0x1000),
            &Fields::empty()
        ));
        assert!(expected.matches(
            &RequestStatus::ack(),
            CommandClass::Set,
            Some(0x1000),
            &Fields::Row(field_map! { "anything" => true })
        ));
    }

    #[test]
    fn test_defaults_are_not_shared() {
        let first = AckResult::get(DEVICE_INFO).with_field_names(["a"]);
        let second = AckResult::get(DEVICE_INFO);
        assert_eq!(first.field_names(), ["a".to_string()]);
        assert!(second.field_names().is_empty());
    }

    #[test]
    fn test_matches_leaves_fields_untouched() {
        let expected = AckResult::get(DEVICE_INFO)
            .with_field_names(["a"])
            .with_field_values([("a", 1u8)]);
        let fields = Fields::Row(field_map! { "a" => 1u8 });
        let before = fields.clone();
        assert!(ack_get(&expected, &fields));
        assert!(ack_get(&expected, &fields));
        assert_eq!(fields, before);
    }

    #[test]
    fn test_display() {
        let expected = AckResult::set(DEVICE_INFO)
            .with_field_names(["a", "b"])
            .with_field_values([("a", 5u8)]);
        assert_eq!(
            expected.to_string(),
            "CC: Set, PID 0x0060, ACK, fields [a, b], values {a: 5}"
        );
        assert_eq!(
            AckResult::get(0x0001).to_string(),
            "CC: Get, PID 0x0001, ACK, fields [], values {}"
        );
    }
}
