//! Decoded response payloads.
//!
//! A decoded RDM response is either one row of named fields or, for
//! parameters whose response repeats a field group (one entry per supported
//! sub-item, for instance), an ordered sequence of such rows. [`Fields`]
//! makes that shape explicit so matching code never has to inspect it at
//! runtime.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::FieldsError;

/// Ordered mapping from field name to value.
pub type FieldMap = IndexMap<String, FieldValue>;

/// A single decoded field value.
///
/// Equality follows the value's domain: integers compare numerically
/// whatever their signedness, strings and byte payloads compare as exact
/// byte sequences.
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// Boolean field
    Bool(bool),
    /// Signed integer field
    Int(i64),
    /// Unsigned integer field
    UInt(u64),
    /// Text field
    String(String),
    /// Raw byte payload
    Bytes(Vec<u8>),
    /// Repeated field group nested inside a row
    Group(Vec<FieldMap>),
}

impl FieldValue {
    fn as_i128(&self) -> Option<i128> {
        match self {
            FieldValue::Int(v) => Some(i128::from(*v)),
            FieldValue::UInt(v) => Some(i128::from(*v)),
            _ => None,
        }
    }

    fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::String(s) => Some(s.as_bytes()),
            FieldValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Convert one decoded JSON value, `field` naming it for error reports.
    pub fn from_json(field: &str, value: &Value) -> Result<Self, FieldsError> {
        let unsupported = |kind| FieldsError::UnsupportedValue {
            field: field.to_string(),
            kind,
        };

        match value {
            Value::Bool(b) => Ok(FieldValue::Bool(*b)),
            Value::Number(n) => {
                if let Some(v) = n.as_u64() {
                    Ok(FieldValue::UInt(v))
                } else if let Some(v) = n.as_i64() {
                    Ok(FieldValue::Int(v))
                } else {
                    Err(unsupported("float"))
                }
            }
            Value::String(s) => Ok(FieldValue::String(s.clone())),
            Value::Array(items) => {
                let mut group = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::Object(_) => group.push(field_map_from_json(item)?),
                        other => return Err(unsupported(json_kind(other))),
                    }
                }
                Ok(FieldValue::Group(group))
            }
            Value::Null => Err(unsupported("null")),
            Value::Object(_) => Err(unsupported("object")),
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.as_i128(), other.as_i128()) {
            return a == b;
        }
        if let (Some(a), Some(b)) = (self.as_bytes(), other.as_bytes()) {
            return a == b;
        }
        match (self, other) {
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::Group(a), FieldValue::Group(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for FieldValue {}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(i64::from(v))
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::UInt(v)
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::UInt(u64::from(v))
    }
}

impl From<u16> for FieldValue {
    fn from(v: u16) -> Self {
        FieldValue::UInt(u64::from(v))
    }
}

impl From<u8> for FieldValue {
    fn from(v: u8) -> Self {
        FieldValue::UInt(u64::from(v))
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(v: Vec<u8>) -> Self {
        FieldValue::Bytes(v)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(v) => write!(f, "{}", v),
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::UInt(v) => write!(f, "{}", v),
            FieldValue::String(v) => write!(f, "{:?}", v),
            FieldValue::Bytes(v) => write!(f, "0x{}", hex::encode(v)),
            FieldValue::Group(rows) => {
                f.write_str("[")?;
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_field_map(f, row)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Write a field map as `{name: value, ...}` in insertion order.
pub fn write_field_map(f: &mut impl fmt::Write, map: &FieldMap) -> fmt::Result {
    f.write_str("{")?;
    for (i, (name, value)) in map.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}: {}", name, value)?;
    }
    f.write_str("}")
}

/// The decoded payload of one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fields {
    /// A single mapping of field name to value
    Row(FieldMap),
    /// A repeated field group, one mapping per row
    Rows(Vec<FieldMap>),
}

impl Fields {
    /// A response without payload.
    pub fn empty() -> Self {
        Fields::Row(FieldMap::new())
    }

    /// Every row: the single mapping for [`Fields::Row`], each mapping for
    /// [`Fields::Rows`].
    pub fn rows(&self) -> std::slice::Iter<'_, FieldMap> {
        match self {
            Fields::Row(map) => std::slice::from_ref(map).iter(),
            Fields::Rows(rows) => rows.iter(),
        }
    }

    /// Whether `name` is a member of the top-level shape.
    ///
    /// A sequence of rows has no named members, so this is always false for
    /// [`Fields::Rows`]; use [`Fields::rows`] to look inside each row.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look `name` up in the top-level shape, see [`Fields::contains`].
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        match self {
            Fields::Row(map) => map.get(name),
            Fields::Rows(_) => None,
        }
    }

    /// True when there is no field at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Fields::Row(map) => map.is_empty(),
            Fields::Rows(rows) => rows.is_empty(),
        }
    }
}

impl Default for Fields {
    fn default() -> Self {
        Fields::empty()
    }
}

impl From<FieldMap> for Fields {
    fn from(map: FieldMap) -> Self {
        Fields::Row(map)
    }
}

impl From<Vec<FieldMap>> for Fields {
    fn from(rows: Vec<FieldMap>) -> Self {
        Fields::Rows(rows)
    }
}

impl TryFrom<Value> for Fields {
    type Error = FieldsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Fields::try_from(&value)
    }
}

impl TryFrom<&Value> for Fields {
    type Error = FieldsError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(_) => Ok(Fields::Row(field_map_from_json(value)?)),
            Value::Array(items) => {
                let mut rows = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    if !item.is_object() {
                        return Err(FieldsError::MalformedRow {
                            index,
                            kind: json_kind(item),
                        });
                    }
                    rows.push(field_map_from_json(item)?);
                }
                Ok(Fields::Rows(rows))
            }
            other => Err(FieldsError::Malformed(json_kind(other))),
        }
    }
}

fn field_map_from_json(value: &Value) -> Result<FieldMap, FieldsError> {
    let object = value
        .as_object()
        .ok_or(FieldsError::Malformed(json_kind(value)))?;
    let mut map = FieldMap::with_capacity(object.len());
    for (name, value) in object {
        map.insert(name.clone(), FieldValue::from_json(name, value)?);
    }
    Ok(map)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Build a [`FieldMap`] from `name => value` pairs.
///
/// ```
/// use rdm_common::field_map;
///
/// let row = field_map! { "protocol_major" => 1u8, "device_model" => 0x0102u16 };
/// assert_eq!(row.len(), 2);
/// ```
#[macro_export]
macro_rules! field_map {
    () => {
        $crate::fields::FieldMap::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::fields::FieldMap::new();
        $(
            map.insert(::std::string::String::from($name), $crate::fields::FieldValue::from($value));
        )+
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_equality_across_signedness() {
        assert_eq!(FieldValue::Int(5), FieldValue::UInt(5));
        assert_ne!(FieldValue::Int(-1), FieldValue::UInt(u64::MAX));
        assert_ne!(FieldValue::UInt(1), FieldValue::Bool(true));
    }

    #[test]
    fn test_string_and_bytes_compare_as_sequences() {
        assert_eq!(FieldValue::from("abc"), FieldValue::Bytes(b"abc".to_vec()));
        assert_ne!(FieldValue::from("abc"), FieldValue::from("abcd"));
        assert_ne!(FieldValue::from("1"), FieldValue::UInt(1));
    }

    #[test]
    fn test_row_lookup() {
        let fields = Fields::Row(field_map! { "a" => 1u8, "b" => 2u8 });
        assert!(fields.contains("a"));
        assert_eq!(fields.get("b"), Some(&FieldValue::UInt(2)));
        assert!(!fields.contains("c"));
    }

    #[test]
    fn test_rows_have_no_top_level_members() {
        let fields = Fields::Rows(vec![field_map! { "a" => 1u8 }]);
        assert!(!fields.contains("a"));
        assert_eq!(fields.rows().count(), 1);
    }

    #[test]
    fn test_rows_iterates_each_shape() {
        let row = Fields::Row(field_map! { "a" => 1u8 });
        let rows: Vec<&FieldMap> = row.rows().collect();
        assert_eq!(rows, [&field_map! { "a" => 1u8 }]);

        assert_eq!(Fields::empty().rows().count(), 1);
        assert_eq!(Fields::Rows(Vec::new()).rows().count(), 0);
    }

    #[test]
    fn test_from_json_object() {
        let fields = Fields::try_from(json!({"a": 1, "b": -2, "label": "dimmer"})).unwrap();
        assert_eq!(fields.get("a"), Some(&FieldValue::UInt(1)));
        assert_eq!(fields.get("b"), Some(&FieldValue::Int(-2)));
        assert_eq!(fields.get("label"), Some(&FieldValue::from("dimmer")));
    }

    #[test]
    fn test_from_json_rows_and_groups() {
        let fields = Fields::try_from(json!([{"a": 1}, {"a": 2, "slots": [{"id": 0}]}])).unwrap();
        let rows: Vec<_> = fields.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1].get("slots"),
            Some(&FieldValue::Group(vec![field_map! { "id" => 0u8 }]))
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_shapes() {
        assert_eq!(
            Fields::try_from(json!(42)),
            Err(FieldsError::Malformed("a number"))
        );
        assert_eq!(
            Fields::try_from(json!([{"a": 1}, "oops"])),
            Err(FieldsError::MalformedRow {
                index: 1,
                kind: "a string"
            })
        );
        assert!(matches!(
            Fields::try_from(json!({"a": 1.5})),
            Err(FieldsError::UnsupportedValue { .. })
        ));
    }

    #[test]
    fn test_display() {
        let mut rendered = String::new();
        write_field_map(
            &mut rendered,
            &field_map! { "a" => 5u8, "name" => "x", "raw" => vec![0xdeu8, 0xad] },
        )
        .unwrap();
        assert_eq!(rendered, "{a: 5, name: \"x\", raw: 0xdead}");
    }
}
