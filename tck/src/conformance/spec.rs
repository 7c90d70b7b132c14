//! Expectation spec parsing, validation and resolution

use super::*;
use crate::expected::{
    AckResult, BroadcastResult, Expectation, NackResult, QueuedMessageResult, SuccessfulResult,
    WithOutcome,
};
use anyhow::{Context, Result};
use rdm_common::fields::FieldValue;
use rdm_common::pid::PidStore;
use rdm_common::rdm::NackReason;
use std::path::{Path, PathBuf};

/// Parse and validate a test spec from YAML
pub fn load_spec_str(yaml: &str) -> Result<TestSpec> {
    let spec: TestSpec = serde_yaml::from_str(yaml).context("Failed to parse expectation spec")?;
    validate_spec(&spec)?;
    Ok(spec)
}

/// Load a test spec from a YAML file
pub fn load_spec_file(path: &Path) -> Result<TestSpec> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read spec file: {}", path.display()))?;

    let spec: TestSpec = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse spec file: {}", path.display()))?;

    validate_spec(&spec).with_context(|| format!("Invalid spec file: {}", path.display()))?;

    Ok(spec)
}

/// Validate a test spec for correctness
pub fn validate_spec(spec: &TestSpec) -> Result<()> {
    if spec.name.is_empty() {
        anyhow::bail!("Spec name cannot be empty");
    }

    if spec.expected.is_empty() {
        anyhow::bail!("Spec '{}' must list at least one expected result", spec.name);
    }

    for (i, expected) in spec.expected.iter().enumerate() {
        validate_expectation(expected)
            .with_context(|| format!("Spec '{}' expected result {}", spec.name, i))?;
    }

    Ok(())
}

fn validate_expectation(expected: &ExpectationSpec) -> Result<()> {
    let kind = expected.kind;
    match kind {
        ExpectationKind::Ack | ExpectationKind::Nack => {
            if expected.command_class.is_none() {
                anyhow::bail!("{:?} requires 'command_class'", kind);
            }
            if expected.pid.is_none() {
                anyhow::bail!("{:?} requires 'pid'", kind);
            }
        }
        ExpectationKind::Broadcast | ExpectationKind::Successful | ExpectationKind::QueuedMessage => {
            if expected.command_class.is_some() || expected.pid.is_some() {
                anyhow::bail!("{:?} does not take 'command_class' or 'pid'", kind);
            }
        }
    }

    match kind {
        ExpectationKind::Nack => {
            if expected.nack_reason.is_none() {
                anyhow::bail!("Nack requires 'nack_reason'");
            }
        }
        _ => {
            if expected.nack_reason.is_some() {
                anyhow::bail!("{:?} does not take 'nack_reason'", kind);
            }
        }
    }

    if kind != ExpectationKind::Ack
        && (!expected.field_names.is_empty() || !expected.field_values.is_empty())
    {
        anyhow::bail!("{:?} does not take 'field_names' or 'field_values'", kind);
    }

    Ok(())
}

impl TestSpec {
    /// Resolve every declared result against a PID store
    pub fn resolve(&self, store: &PidStore) -> Result<Vec<Expectation>> {
        self.expected
            .iter()
            .enumerate()
            .map(|(i, expected)| {
                expected
                    .resolve(store)
                    .with_context(|| format!("Spec '{}' expected result {}", self.name, i))
            })
            .collect()
    }
}

impl ExpectationSpec {
    /// Build the expected result this declaration describes
    pub fn resolve(&self, store: &PidStore) -> Result<Expectation> {
        validate_expectation(self)?;

        let expectation: Expectation = match self.kind {
            ExpectationKind::Broadcast => BroadcastResult::new().into(),
            ExpectationKind::Successful => SuccessfulResult::new().into(),
            ExpectationKind::QueuedMessage => QueuedMessageResult::new().into(),
            ExpectationKind::Nack => {
                let (command_class, pid) = self.command_class_and_pid(store)?;
                let reason = match &self.nack_reason {
                    Some(reason) => reason.resolve()?,
                    None => anyhow::bail!("Nack requires 'nack_reason'"),
                };
                NackResult::new(command_class, pid, reason).into()
            }
            ExpectationKind::Ack => {
                let (command_class, pid) = self.command_class_and_pid(store)?;
                let mut values = Vec::with_capacity(self.field_values.len());
                for (name, value) in &self.field_values {
                    let value = FieldValue::from_json(name, value)
                        .with_context(|| format!("Invalid value for field '{}'", name))?;
                    values.push((name.clone(), value));
                }
                AckResult::new(command_class, pid)
                    .with_field_names(self.field_names.iter().cloned())
                    .with_field_values(values)
                    .into()
            }
        };

        let mut expectation = expectation;
        if let Some(warning) = &self.warning {
            expectation = expectation.with_warning(warning.clone());
        }
        if let Some(advisory) = &self.advisory {
            expectation = expectation.with_advisory(advisory.clone());
        }
        Ok(expectation)
    }

    fn command_class_and_pid(&self, store: &PidStore) -> Result<(CommandClass, u16)> {
        let command_class = self
            .command_class
            .ok_or_else(|| anyhow::anyhow!("{:?} requires 'command_class'", self.kind))?;
        let pid = self
            .pid
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("{:?} requires 'pid'", self.kind))?
            .resolve(store)?;
        Ok((command_class, pid))
    }
}

impl PidRef {
    /// Resolve to a PID value, looking names up in `store`
    pub fn resolve(&self, store: &PidStore) -> Result<u16> {
        match self {
            PidRef::Value(value) => Ok(*value),
            PidRef::Name(name) => store
                .get_name(name)
                .map(|pid| pid.value)
                .ok_or_else(|| anyhow::anyhow!("Unknown PID name: {}", name)),
        }
    }
}

impl NackReasonRef {
    /// Resolve to a NACK reason
    pub fn resolve(&self) -> Result<NackReason> {
        match self {
            NackReasonRef::Code(code) => Ok(NackReason::from_value(*code)),
            NackReasonRef::Name(name) => NackReason::from_name(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown NACK reason: {}", name)),
        }
    }
}

/// Load all specs from a directory
pub fn load_specs_from_dir(dir: &Path) -> Result<Vec<TestSpec>> {
    let mut specs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {}", dir.display());
    }

    for path in spec_files(dir)? {
        match load_spec_file(&path) {
            Ok(spec) => specs.push(spec),
            Err(e) => {
                log::warn!("Failed to load spec {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(specs)
}

/// YAML files directly inside `dir`, sorted by path
fn spec_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expected::ExpectedResult;

    const DEVICE_INFO_SPEC: &str = r#"
name: get_device_info
description: DEVICE_INFO is mandatory
expected:
  - kind: ack
    command_class: get
    pid: DEVICE_INFO
    field_names: [device_model, software_version]
    field_values:
      protocol_major: 1
  - kind: nack
    command_class: get
    pid: 0x0060
    nack_reason: unknown_pid
    warning: device does not support DEVICE_INFO
"#;

    #[test]
    fn test_parse_and_resolve() {
        let spec = load_spec_str(DEVICE_INFO_SPEC).unwrap();
        assert_eq!(spec.name, "get_device_info");
        assert_eq!(spec.expected.len(), 2);
        assert_eq!(spec.expected[1].pid, Some(PidRef::Value(0x0060)));

        let expected = spec.resolve(&PidStore::builtin()).unwrap();
        assert_eq!(
            expected[0].to_string(),
            "CC: Get, PID 0x0060, ACK, fields [device_model, software_version], values {protocol_major: 1}"
        );
        assert_eq!(expected[1].to_string(), "CC: Get, PID 0x0060, NACK Unknown PID");
        assert_eq!(expected[1].warning(), Some("device does not support DEVICE_INFO"));
    }

    #[test]
    fn test_simple_kinds() {
        let yaml = r#"
name: broadcast_identify
expected:
  - kind: broadcast
  - kind: successful
  - kind: queued_message
    advisory: queue drained
"#;
        let expected = load_spec_str(yaml)
            .unwrap()
            .resolve(&PidStore::builtin())
            .unwrap();
        assert!(matches!(expected[0], Expectation::Broadcast(_)));
        assert!(matches!(expected[1], Expectation::Successful(_)));
        assert!(matches!(expected[2], Expectation::QueuedMessage(_)));
        assert_eq!(expected[2].advisory(), Some("queue drained"));
    }

    #[test]
    fn test_raw_nack_code() {
        let yaml = r#"
name: manufacturer_nack
expected:
  - kind: nack
    command_class: set
    pid: 32769
    nack_reason: 32784
"#;
        let expected = load_spec_str(yaml)
            .unwrap()
            .resolve(&PidStore::builtin())
            .unwrap();
        assert_eq!(
            expected[0].to_string(),
            "CC: Set, PID 0x8001, NACK Unknown NACK reason 0x8010"
        );
    }

    #[test]
    fn test_validation_errors() {
        let cases = [
            "name: ''\nexpected:\n  - kind: broadcast\n",
            "name: empty\nexpected: []\n",
            "name: no_pid\nexpected:\n  - kind: ack\n    command_class: get\n",
            "name: no_cc\nexpected:\n  - kind: nack\n    pid: 1\n    nack_reason: 0\n",
            "name: no_reason\nexpected:\n  - kind: nack\n    command_class: get\n    pid: 1\n",
            "name: stray_pid\nexpected:\n  - kind: broadcast\n    pid: 1\n",
            "name: stray_reason\nexpected:\n  - kind: ack\n    command_class: get\n    pid: 1\n    nack_reason: 0\n",
            "name: stray_fields\nexpected:\n  - kind: successful\n    field_names: [a]\n",
            "name: typo\nexpected:\n  - kind: ack\n    command_class: get\n    pid: DEVICE_INFO\n    field_value: {protocol_major: 1}\n",
            "name: top_typo\nexpect:\n  - kind: broadcast\nexpected:\n  - kind: broadcast\n",
        ];
        for yaml in cases {
            assert!(load_spec_str(yaml).is_err(), "accepted: {}", yaml);
        }
    }

    #[test]
    fn test_unknown_names_fail_resolution() {
        let yaml = "name: bad_pid\nexpected:\n  - kind: ack\n    command_class: get\n    pid: NOT_A_PID\n";
        let spec = load_spec_str(yaml).unwrap();
        let err = spec.resolve(&PidStore::builtin()).unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown PID name: NOT_A_PID"));

        let yaml = "name: bad_reason\nexpected:\n  - kind: nack\n    command_class: get\n    pid: 1\n    nack_reason: nope\n";
        let spec = load_spec_str(yaml).unwrap();
        assert!(spec.resolve(&PidStore::builtin()).is_err());
    }

    #[test]
    fn test_unsupported_field_value() {
        let yaml = "name: float\nexpected:\n  - kind: ack\n    command_class: get\n    pid: 1\n    field_values: {level: 0.5}\n";
        let spec = load_spec_str(yaml).unwrap();
        assert!(spec.resolve(&PidStore::builtin()).is_err());
    }
}
