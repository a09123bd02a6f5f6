//! Tests for two-column config file loading.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use tdt_ingest::read_config_map;
use tdt_model::TranslateError;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn loads_two_column_entries() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_fixture(&dir, "columns.cfg", "id\tvendor_id\namount\tamt\n");

    let load = read_config_map(&path).expect("load config");

    assert_eq!(load.map.len(), 2);
    assert_eq!(load.map.get("id"), Some("vendor_id"));
    assert_eq!(load.map.get("amount"), Some("amt"));
    assert_eq!(load.ignored_lines, 0);
}

#[test]
fn lines_without_exactly_two_fields_are_ignored() {
    let dir = TempDir::new().expect("temp dir");
    let contents = "id\tvendor_id\nno-tab-here\na\tb\tc\namount\tamt\n";
    let path = write_fixture(&dir, "columns.cfg", contents);

    let load = read_config_map(&path).expect("load config");

    assert_eq!(load.map.len(), 2);
    assert!(load.map.contains_key("id"));
    assert!(load.map.contains_key("amount"));
    assert!(!load.map.contains_key("no-tab-here"));
    assert_eq!(load.ignored_lines, 2);
}

#[test]
fn duplicate_keys_keep_the_last_value() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_fixture(&dir, "keys.cfg", "V1\tVENDOR_1\nV1\tVENDOR_ONE\n");

    let load = read_config_map(&path).expect("load config");

    assert_eq!(load.map.len(), 1);
    assert_eq!(load.map.get("V1"), Some("VENDOR_ONE"));
}

#[test]
fn empty_file_loads_an_empty_map() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_fixture(&dir, "empty.cfg", "");

    let load = read_config_map(&path).expect("load config");

    assert!(load.map.is_empty());
    assert_eq!(load.ignored_lines, 0);
}

#[test]
fn missing_file_is_a_config_read_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("does-not-exist.cfg");

    let error = read_config_map(&path).expect_err("missing file must fail");

    assert!(matches!(error, TranslateError::ConfigRead { .. }));
}
