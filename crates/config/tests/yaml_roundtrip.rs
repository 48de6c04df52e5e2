//! Integration tests for YAML load/save round-tripping

use serde::Deserialize;
use std::fs;
use winery_config::{Document, read_document, read_yaml, save_yaml};

#[test]
fn test_save_then_read_round_trips_a_mapping() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.yaml");

    let original: Document = serde_yaml::from_str(
        "data:
  raw: data/01_raw/winequality-red.csv
  interim: data/02_interim/
model:
  random_state: 42
  test_size: 0.2
  layers:
    - 64
    - 32
",
    )
    .unwrap();

    save_yaml(&path, &original).unwrap();
    let reloaded = read_document(&path).unwrap();

    assert_eq!(reloaded, original);
}

#[test]
fn test_saved_yaml_uses_block_style() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("out.yaml");

    let doc: Document = serde_yaml::from_str("model:\n  random_state: 42\n").unwrap();
    save_yaml(&path, &doc).unwrap();

    let rendered = fs::read_to_string(&path).unwrap();
    assert!(rendered.contains("model:\n"));
    assert!(!rendered.contains('{'), "flow style in output: {rendered}");
}

#[test]
fn test_read_document_exposes_nested_values() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.yaml");
    fs::write(&path, "model:\n  random_state: 42\n").unwrap();

    let doc = read_document(&path).unwrap();
    assert_eq!(doc.section("model").unwrap().integer("random_state").unwrap(), 42);
}

#[test]
fn test_read_yaml_into_declared_fields() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct ModelParams {
        random_state: i64,
        test_size: f64,
        n_estimators: i64,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Params {
        model: ModelParams,
    }

    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("params.yaml");
    fs::write(
        &path,
        "model:\n  random_state: 42\n  test_size: 0.2\n  n_estimators: 100\n",
    )
    .unwrap();

    let params: Params = read_yaml(&path).unwrap();
    assert_eq!(
        params,
        Params {
            model: ModelParams {
                random_state: 42,
                test_size: 0.2,
                n_estimators: 100,
            }
        }
    );
}
