#![allow(dead_code)]

use clavier::bundle::ResourceBundle;
use std::fs;
use tempfile::TempDir;

pub const TWO_LAYOUTS: &str = r#"{
  "keyboards": [
    { "rows": [
      { "keys": [
        { "type": { "character": "A" }, "action": { "insert": "a" } },
        { "type": { "character": "Z" }, "action": { "insert": "z" } }
      ] },
      { "keys": [
        { "type": { "character": "123" }, "action": { "switchToNextKeyboard": {} }, "width": 80 },
        { "type": { "character": "espace" }, "action": { "space": {} } },
        { "type": { "systemImage": "delete.left.fill" }, "action": { "backspace": {} }, "width": 55 }
      ] }
    ] },
    { "rows": [
      { "keys": [
        { "type": { "character": "1" }, "action": { "insert": "1" } }
      ] },
      { "keys": [
        { "type": { "svgImage": "globe" }, "action": { "switchToPreviousKeyboard": {} }, "width": 45 },
        { "type": { "character": "ABC" }, "action": { "switchToNextKeyboard": {} }, "width": 80 }
      ] }
    ] }
  ]
}"#;

pub const CONFLICTING_ACTION: &str = r#"{
  "keyboards": [
    { "rows": [ { "keys": [
      { "type": { "character": "A" }, "action": { "insert": "a", "backspace": {} } }
    ] } ] }
  ]
}"#;

/// A temporary bundle directory holding `keyboards.json`.
pub struct TestBundle {
    pub dir: TempDir,
    pub bundle: ResourceBundle,
}

impl TestBundle {
    pub fn with_asset(json: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("keyboards.json"), json).unwrap();
        let bundle = ResourceBundle::new(dir.path());
        Self { dir, bundle }
    }

    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let bundle = ResourceBundle::new(dir.path());
        Self { dir, bundle }
    }

    pub fn add_svg(&self, name: &str) {
        let svg_dir = self.dir.path().join("SVG");
        fs::create_dir_all(&svg_dir).unwrap();
        fs::write(svg_dir.join(format!("{}.svg", name)), "<svg/>").unwrap();
    }
}
