//! Process-wide PID store extended from the file named by `RDM_PID_STORE`.
//!
//! Kept alone in its own test binary: the store is built once per process,
//! so the variable must be set before anything touches it.

#![allow(clippy::disallowed_methods)]

use std::fs;

use rdm_common::pid::{get_store, PID_STORE_ENV, QUEUED_MESSAGE};
use tempfile::TempDir;

#[test]
fn test_store_loads_manufacturer_pids_from_env() {
    let _ = env_logger::builder().is_test(true).try_init();

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("manufacturer_pids.yaml");
    fs::write(
        &path,
        "pids:\n  - name: ACME_FAN_SPEED\n    value: 0x8001\n  - name: ACME_PUMP\n    value: 32770\n",
    )
    .unwrap();
    std::env::set_var(PID_STORE_ENV, &path);

    let store = get_store();
    assert_eq!(store.get_name("ACME_FAN_SPEED").unwrap().value, 0x8001);
    assert_eq!(store.get_value(0x8002).unwrap().name, "ACME_PUMP");
    // Built-ins survive the extension
    assert_eq!(store.get_name(QUEUED_MESSAGE).unwrap().value, 0x0020);
    // Same instance on every call
    assert!(std::ptr::eq(store, get_store()));
}
