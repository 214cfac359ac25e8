mod common;

use clavier::bundle::ResourceBundle;
use clavier::loader::{load, spawn_load};
use clavier::model::{KeyAction, KeyVisual};
use clavier::LoadErrorKind;
use common::{TestBundle, CONFLICTING_ACTION, TWO_LAYOUTS};

#[test]
fn test_loader_reads_bundled_asset() {
    let tb = TestBundle::with_asset(TWO_LAYOUTS);
    let collection = load(&tb.bundle, "keyboards").unwrap();

    assert_eq!(collection.len(), 2);
    let first = collection.layout(0).unwrap();
    assert_eq!(first.rows.len(), 2);
    assert_eq!(first.rows[1].keys[0].action, KeyAction::SwitchToNextLayout);
    assert_eq!(first.rows[1].keys[0].width, Some(80.0));

    let second = collection.layout(1).unwrap();
    assert_eq!(
        second.rows[1].keys[0].visual,
        KeyVisual::VectorGlyph("globe".into())
    );
}

#[test]
fn test_loader_missing_resource() {
    let tb = TestBundle::empty();
    let err = load(&tb.bundle, "keyboards").unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::ResourceNotFound);
}

#[test]
fn test_loader_wrong_resource_name() {
    let tb = TestBundle::with_asset(TWO_LAYOUTS);
    let err = load(&tb.bundle, "layouts").unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::ResourceNotFound);
}

#[test]
fn test_loader_malformed_json() {
    let tb = TestBundle::with_asset("{ \"keyboards\": [ { \"rows\": ");
    let err = load(&tb.bundle, "keyboards").unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::MalformedJson);
}

#[test]
fn test_loader_conflicting_tags_is_schema_violation() {
    let tb = TestBundle::with_asset(CONFLICTING_ACTION);
    let err = load(&tb.bundle, "keyboards").unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::SchemaViolation);
}

#[test]
fn test_loader_empty_collection() {
    let tb = TestBundle::with_asset(r#"{"keyboards": []}"#);
    let err = load(&tb.bundle, "keyboards").unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::EmptyCollection);
}

#[test]
fn test_loader_accepts_layout_without_rows() {
    let tb = TestBundle::with_asset(r#"{"keyboards": [{"rows": []}]}"#);
    let collection = load(&tb.bundle, "keyboards").unwrap();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.keyboards[0].key_count(), 0);
}

#[test]
fn test_spawned_load_delivers_result() {
    let tb = TestBundle::with_asset(TWO_LAYOUTS);
    let pending = spawn_load(tb.bundle.clone(), "keyboards");
    let collection = pending.wait().unwrap();
    assert_eq!(collection.len(), 2);
}

#[test]
fn test_spawned_load_delivers_error() {
    let pending = spawn_load(ResourceBundle::new("/nonexistent/clavier"), "keyboards");
    let err = pending.wait().unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::ResourceNotFound);
}

#[test]
fn test_shipped_asset_loads() {
    let bundle = ResourceBundle::new(concat!(env!("CARGO_MANIFEST_DIR"), "/resources"));
    let collection = load(&bundle, "keyboards").unwrap();
    assert_eq!(collection.len(), 2);
    assert!(bundle.vector_glyph("globe").is_some());
}
