//! Keyboard data model and its JSON asset encoding.
//!
//! `type` and `action` objects are tagged variants: exactly one recognized
//! member names the variant, and its value carries the payload. Decoding
//! counts the tags present and rejects anything but exactly one.

use crate::error::{LoadError, LoadResult};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

// --- TAGGED VARIANTS ---

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyAction {
    InsertText(String),
    Backspace,
    Space,
    SwitchToNextLayout,
    SwitchToPreviousLayout,
}

impl KeyAction {
    pub const TAGS: &'static [&'static str] = &[
        "insert",
        "backspace",
        "space",
        "switchToNextKeyboard",
        "switchToPreviousKeyboard",
    ];

    /// JSON tag naming this variant.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::InsertText(_) => "insert",
            Self::Backspace => "backspace",
            Self::Space => "space",
            Self::SwitchToNextLayout => "switchToNextKeyboard",
            Self::SwitchToPreviousLayout => "switchToPreviousKeyboard",
        }
    }

    pub fn is_layout_switch(&self) -> bool {
        matches!(self, Self::SwitchToNextLayout | Self::SwitchToPreviousLayout)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyVisual {
    Character(String),
    SystemGlyph(String),
    VectorGlyph(String),
}

impl KeyVisual {
    pub const TAGS: &'static [&'static str] = &["character", "systemImage", "svgImage"];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Character(_) => "character",
            Self::SystemGlyph(_) => "systemImage",
            Self::VectorGlyph(_) => "svgImage",
        }
    }

    /// Short textual label, used by terminal reports.
    pub fn label(&self) -> String {
        match self {
            Self::Character(s) => s.clone(),
            Self::SystemGlyph(name) => format!("[{}]", name),
            Self::VectorGlyph(name) => format!("<{}>", name),
        }
    }
}

trait TaggedVariant: Sized {
    const EXPECTING: &'static str;
    const VARIANT_TAGS: &'static [&'static str];

    fn from_tag(tag: &str, payload: Value) -> Result<Self, String>;
}

impl TaggedVariant for KeyAction {
    const EXPECTING: &'static str = "a key action object with exactly one tag";
    const VARIANT_TAGS: &'static [&'static str] = KeyAction::TAGS;

    fn from_tag(tag: &str, payload: Value) -> Result<Self, String> {
        match tag {
            "insert" => string_payload(tag, payload).map(Self::InsertText),
            "backspace" => unit_payload(tag, payload).map(|_| Self::Backspace),
            "space" => unit_payload(tag, payload).map(|_| Self::Space),
            "switchToNextKeyboard" => unit_payload(tag, payload).map(|_| Self::SwitchToNextLayout),
            "switchToPreviousKeyboard" => {
                unit_payload(tag, payload).map(|_| Self::SwitchToPreviousLayout)
            }
            other => Err(format!("unknown action tag '{}'", other)),
        }
    }
}

impl TaggedVariant for KeyVisual {
    const EXPECTING: &'static str = "a key type object with exactly one tag";
    const VARIANT_TAGS: &'static [&'static str] = KeyVisual::TAGS;

    fn from_tag(tag: &str, payload: Value) -> Result<Self, String> {
        let name = string_payload(tag, payload)?;
        match tag {
            "character" => Ok(Self::Character(name)),
            "systemImage" => Ok(Self::SystemGlyph(name)),
            "svgImage" => Ok(Self::VectorGlyph(name)),
            other => Err(format!("unknown type tag '{}'", other)),
        }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn string_payload(tag: &str, payload: Value) -> Result<String, String> {
    match payload {
        Value::String(s) => Ok(s),
        other => Err(format!("'{}' expects a string, found {}", tag, describe(&other))),
    }
}

// Members of a unit payload are ignored; only its shape is checked.
fn unit_payload(tag: &str, payload: Value) -> Result<(), String> {
    match payload {
        Value::Object(_) => Ok(()),
        other => Err(format!("'{}' expects an object, found {}", tag, describe(&other))),
    }
}

struct TaggedVisitor<T>(PhantomData<T>);

impl<'de, T: TaggedVariant> Visitor<'de> for TaggedVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(T::EXPECTING)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<T, A::Error> {
        let mut found: Vec<(String, Value)> = Vec::with_capacity(1);
        while let Some(key) = map.next_key::<String>()? {
            if !T::VARIANT_TAGS.contains(&key.as_str()) {
                return Err(de::Error::unknown_field(&key, T::VARIANT_TAGS));
            }
            let payload = map.next_value::<Value>()?;
            found.push((key, payload));
        }

        if found.len() != 1 {
            let tags: Vec<&str> = found.iter().map(|(k, _)| k.as_str()).collect();
            return Err(de::Error::custom(format!(
                "expected exactly one of {:?}, found {} ({:?})",
                T::VARIANT_TAGS,
                found.len(),
                tags
            )));
        }

        let (tag, payload) = found.remove(0);
        T::from_tag(&tag, payload).map_err(de::Error::custom)
    }
}

#[derive(Serialize)]
struct EmptyPayload {}

impl Serialize for KeyAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::InsertText(text) => map.serialize_entry(self.tag(), text)?,
            _ => map.serialize_entry(self.tag(), &EmptyPayload {})?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KeyAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TaggedVisitor::<Self>(PhantomData))
    }
}

impl Serialize for KeyVisual {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Character(s) | Self::SystemGlyph(s) | Self::VectorGlyph(s) => {
                map.serialize_entry(self.tag(), s)?
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KeyVisual {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TaggedVisitor::<Self>(PhantomData))
    }
}

// --- KEYS & LAYOUTS ---

static NEXT_KEY_ID: AtomicU64 = AtomicU64::new(1);

/// Synthetic per-instance identity. Never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(u64);

impl KeyId {
    pub fn next() -> Self {
        Self(NEXT_KEY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Key {
    #[serde(skip, default = "KeyId::next")]
    pub id: KeyId,

    #[serde(rename = "type")]
    pub visual: KeyVisual,

    pub action: KeyAction,

    /// Fixed display width. `None` shares the row's remaining width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl Key {
    pub fn new(visual: KeyVisual, action: KeyAction) -> Self {
        Self {
            id: KeyId::next(),
            visual,
            action,
            width: None,
        }
    }

    /// A character key inserting its own lowercase text.
    pub fn character(c: char) -> Self {
        Self::new(
            KeyVisual::Character(c.to_string()),
            KeyAction::InsertText(c.to_lowercase().collect()),
        )
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn is_flexible(&self) -> bool {
        self.width.is_none()
    }
}

// Identity is synthetic and stays out of equality.
impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.visual == other.visual && self.action == other.action && self.width == other.width
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyRow {
    pub keys: Vec<Key>,
}

impl KeyRow {
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyboardLayout {
    pub rows: Vec<KeyRow>,
}

impl KeyboardLayout {
    pub fn new(rows: Vec<KeyRow>) -> Self {
        Self { rows }
    }

    pub fn key_count(&self) -> usize {
        self.rows.iter().map(|r| r.keys.len()).sum()
    }

    pub fn key(&self, row: usize, column: usize) -> Option<&Key> {
        self.rows.get(row).and_then(|r| r.keys.get(column))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyboardCollection {
    pub keyboards: Vec<KeyboardLayout>,
}

impl KeyboardCollection {
    pub fn new(keyboards: Vec<KeyboardLayout>) -> Self {
        Self { keyboards }
    }

    pub fn len(&self) -> usize {
        self.keyboards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyboards.is_empty()
    }

    pub fn layout(&self, index: usize) -> Option<&KeyboardLayout> {
        self.keyboards.get(index)
    }

    /// Checks the constraints the JSON shape alone cannot express.
    pub fn validate(&self) -> LoadResult<()> {
        if self.keyboards.is_empty() {
            return Err(LoadError::EmptyCollection);
        }

        for (l, layout) in self.keyboards.iter().enumerate() {
            for (r, row) in layout.rows.iter().enumerate() {
                for (k, key) in row.keys.iter().enumerate() {
                    if let Some(w) = key.width {
                        if !(w.is_finite() && w > 0.0) {
                            return Err(LoadError::SchemaViolation(format!(
                                "keyboards[{}].rows[{}].keys[{}]: width must be a positive number, got {}",
                                l, r, k, w
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
