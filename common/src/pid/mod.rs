//! Parameter identifiers and the PID store.
//!
//! The store maps PID names to their 16-bit identifiers and back. One
//! process-wide store is built lazily on first use by [`get_store`] and is
//! read-only afterwards: the standard E1.20 PIDs, optionally extended with
//! manufacturer PIDs from the YAML file named by [`PID_STORE_ENV`].
//!
//! ```yaml
//! pids:
//!   - name: ACME_FAN_SPEED
//!     value: 0x8001
//! ```

mod builtin;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::PidStoreError;

/// Environment variable naming an extra PID file for the process-wide store.
pub const PID_STORE_ENV: &str = "RDM_PID_STORE";

/// Name of the PID used to retrieve queued messages.
pub const QUEUED_MESSAGE: &str = "QUEUED_MESSAGE";

/// A named parameter identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pid {
    /// Upper-case PID name, e.g. `DEVICE_INFO`
    pub name: String,
    /// 16-bit identifier
    pub value: u16,
}

impl Pid {
    /// Create a PID.
    pub fn new(name: impl Into<String>, value: u16) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:04x})", self.name, self.value)
    }
}

#[derive(Debug, Deserialize)]
struct PidFile {
    #[serde(default)]
    pids: Vec<Pid>,
}

/// Name and value index over a set of PIDs.
#[derive(Debug, Clone, Default)]
pub struct PidStore {
    pids: Vec<Pid>,
    by_name: HashMap<String, usize>,
    by_value: HashMap<u16, usize>,
}

impl PidStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the standard PIDs.
    pub fn builtin() -> Self {
        let mut store = Self::new();
        for (name, value) in builtin::STANDARD_PIDS {
            // The table is static and free of duplicates
            if let Err(e) = store.insert(Pid::new(*name, *value)) {
                log::error!("Skipping built-in PID {}: {}", name, e);
            }
        }
        store
    }

    /// Add a PID, rejecting empty names and duplicate names or values.
    pub fn insert(&mut self, pid: Pid) -> Result<(), PidStoreError> {
        if pid.name.trim().is_empty() {
            return Err(PidStoreError::EmptyName(pid.value));
        }
        let key = pid.name.to_ascii_uppercase();
        if self.by_name.contains_key(&key) {
            return Err(PidStoreError::DuplicateName(pid.name));
        }
        if let Some(&existing) = self.by_value.get(&pid.value) {
            return Err(PidStoreError::DuplicateValue {
                value: pid.value,
                existing: self.pids[existing].name.clone(),
                name: pid.name,
            });
        }

        let index = self.pids.len();
        self.by_name.insert(key, index);
        self.by_value.insert(pid.value, index);
        self.pids.push(pid);
        Ok(())
    }

    /// Parse a YAML PID list into a new store.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PidStoreError> {
        let mut store = Self::new();
        store.extend_from_yaml_str(yaml)?;
        Ok(store)
    }

    /// Read a YAML PID list into a new store.
    pub fn from_yaml_file(path: &Path) -> Result<Self, PidStoreError> {
        let mut store = Self::new();
        store.extend_from_yaml_file(path)?;
        Ok(store)
    }

    /// Add every PID of a YAML PID list, returning how many were added.
    ///
    /// All or nothing: on a rejected entry the store is left unchanged.
    pub fn extend_from_yaml_str(&mut self, yaml: &str) -> Result<usize, PidStoreError> {
        let file: PidFile = serde_yaml::from_str(yaml)?;
        let count = file.pids.len();
        let mut extended = self.clone();
        for pid in file.pids {
            extended.insert(pid)?;
        }
        *self = extended;
        Ok(count)
    }

    /// Add every PID of a YAML PID file, see [`PidStore::extend_from_yaml_str`].
    pub fn extend_from_yaml_file(&mut self, path: &Path) -> Result<usize, PidStoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| PidStoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.extend_from_yaml_str(&content)
    }

    /// Resolve a PID by name, ignoring ASCII case.
    pub fn get_name(&self, name: &str) -> Option<&Pid> {
        self.by_name
            .get(&name.to_ascii_uppercase())
            .map(|&index| &self.pids[index])
    }

    /// Resolve a PID by value.
    pub fn get_value(&self, value: u16) -> Option<&Pid> {
        self.by_value.get(&value).map(|&index| &self.pids[index])
    }

    /// Number of PIDs in the store.
    pub fn len(&self) -> usize {
        self.pids.len()
    }

    /// True when the store holds no PID.
    pub fn is_empty(&self) -> bool {
        self.pids.is_empty()
    }

    /// PIDs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Pid> {
        self.pids.iter()
    }
}

lazy_static! {
    static ref PID_STORE: PidStore = load_process_store();
}

/// The process-wide PID store.
///
/// Built on first call and never modified afterwards, so it can be shared
/// freely between threads.
pub fn get_store() -> &'static PidStore {
    &PID_STORE
}

fn load_process_store() -> PidStore {
    let mut store = PidStore::builtin();
    let Ok(path) = std::env::var(PID_STORE_ENV) else {
        log::debug!("Using {} built-in PIDs", store.len());
        return store;
    };

    match store.extend_from_yaml_file(Path::new(&path)) {
        Ok(count) => {
            log::info!("Loaded {} PIDs from {}", count, path);
            store
        }
        Err(e) => {
            log::error!("Ignoring {}={}: {}", PID_STORE_ENV, path, e);
            PidStore::builtin()
        }
    }
}
