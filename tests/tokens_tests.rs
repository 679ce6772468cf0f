use serde_json::json;
use std::path::Path;
use tokenforge::tokens::{load_sources, resolve_references};

fn fixtures_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

#[test]
fn test_load_sources_flattens_all_fixture_files() {
    let tokens = load_sources(&["tokens".to_string()], fixtures_dir()).unwrap();
    let names: Vec<String> = tokens.iter().map(|t| t.name()).collect();
    // color.json, font.yaml, spacing.json in file-name order,
    // document order within each file.
    assert_eq!(
        names,
        vec![
            "color-base-white",
            "color-base-black",
            "color-base-gray-10",
            "color-base-gray-90",
            "color-text-primary",
            "color-text-secondary",
            "font-size-base",
            "font-size-2xl",
            "font-weight-normal",
            "font-weight-bold",
            "spacing-xs",
            "spacing-sm",
            "spacing-md",
            "padding-xs",
            "padding-sm",
            "padding-md",
        ]
    );
}

#[test]
fn test_load_sources_yaml_preserves_scalar_types() {
    let tokens = load_sources(&["tokens/font.yaml".to_string()], fixtures_dir()).unwrap();
    let weight = tokens
        .iter()
        .find(|t| t.name() == "font-weight-bold")
        .unwrap();
    assert_eq!(weight.value, json!(700));
    let size = tokens.iter().find(|t| t.name() == "font-size-2xl").unwrap();
    assert_eq!(size.value, json!("24px"));
}

#[test]
fn test_load_sources_missing_path_fails() {
    let err = load_sources(&["no-such-dir".to_string()], fixtures_dir()).unwrap_err();
    assert!(err.to_string().contains("no-such-dir"));
}

#[test]
fn test_resolve_references_across_fixture_files() {
    let mut tokens = load_sources(&["tokens".to_string()], fixtures_dir()).unwrap();
    resolve_references(&mut tokens).unwrap();
    let text_primary = tokens
        .iter()
        .find(|t| t.name() == "color-text-primary")
        .unwrap();
    assert_eq!(text_primary.value, json!("#1a202c"));
    assert_eq!(text_primary.original, json!("{color.base.gray.90}"));
    let padding = tokens.iter().find(|t| t.name() == "padding-md").unwrap();
    assert_eq!(padding.value, json!("16px"));
}
