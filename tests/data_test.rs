use indexmap::IndexMap;
use tempfile::TempDir;

use stencil::data::{parse_var, parse_vars, BoundData};
use stencil::error::Error;

#[test]
fn test_parse_var() {
    let (name, value) = parse_var("A=B").unwrap();
    assert_eq!(name, "A");
    assert_eq!(value, "B");
}

#[test]
fn test_parse_var_empty_value() {
    let (name, value) = parse_var("A=").unwrap();
    assert_eq!(name, "A");
    assert_eq!(value, "");
}

#[test]
fn test_parse_var_without_equals_fails() {
    match parse_var("A") {
        Err(Error::UsageError(msg)) => assert!(msg.contains("NAME=VALUE")),
        _ => panic!("Expected UsageError"),
    }
}

#[test]
fn test_parse_vars_last_value_wins() {
    let vars =
        parse_vars(&["A=1".to_string(), "B=2".to_string(), "A=3".to_string()]).unwrap();
    assert_eq!(vars.len(), 2);
    assert_eq!(vars["A"], "3");
    assert_eq!(vars["B"], "2");
}

#[test]
fn test_from_file_with_comments() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(
        &path,
        "// header\n{\"Name\": \"widget\", /* count */ \"N\": 3}\n",
    )
    .unwrap();

    let data = BoundData::from_file(&path, IndexMap::new()).unwrap();
    assert_eq!(data.doc["Name"], "widget");
    assert_eq!(data.doc["N"], 3);
}

#[test]
fn test_from_file_invalid_json_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "{\"a\": }").unwrap();

    match BoundData::from_file(&path, IndexMap::new()) {
        Err(Error::DataError(msg)) => assert!(msg.contains("invalid JSON data")),
        _ => panic!("Expected DataError"),
    }
}

#[test]
fn test_from_file_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    match BoundData::from_file(dir.path().join("absent.json"), IndexMap::new()) {
        Err(Error::DataError(msg)) => assert!(msg.contains("failed to read")),
        _ => panic!("Expected DataError"),
    }
}

#[test]
fn test_context_exposes_doc_and_vars() {
    let mut vars = IndexMap::new();
    vars.insert("A".to_string(), "B".to_string());
    let data = BoundData { doc: serde_json::json!({"Name": "widget"}), vars };

    let context = data.context().unwrap();
    assert_eq!(context["doc"]["Name"], "widget");
    assert_eq!(context["vars"]["A"], "B");
}
