use crate::model::{Key, KeyAction, KeyRow, KeyVisual, KeyboardCollection, KeyboardLayout};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Width of the layout-switch key on the bottom row.
pub const SWITCH_KEY_WIDTH: f64 = 80.0;
/// Width of the backspace key on the bottom row.
pub const BACKSPACE_KEY_WIDTH: f64 = 55.0;

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Azerty,
    Qwerty,
    Qwertz,
    Digits,
}

impl KnownLayout {
    // Letter rows, top to bottom.
    pub fn rows(&self) -> &'static [&'static str] {
        match self {
            Self::Azerty => &["AZERTYUIOP", "QSDFGHJKLM", "WXCVBN"],
            Self::Qwerty => &["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"],
            Self::Qwertz => &["QWERTZUIOP", "ASDFGHJKL", "YXCVBNM"],
            Self::Digits => &["1234567890", "-/:;()&@\"", ".,?!'"],
        }
    }

    fn switch_label(&self) -> &'static str {
        match self {
            Self::Digits => "ABC",
            _ => "123",
        }
    }

    /// Character rows plus the bottom row: switch, space, backspace.
    pub fn build(&self) -> KeyboardLayout {
        let mut rows: Vec<KeyRow> = self
            .rows()
            .iter()
            .map(|r| KeyRow::new(r.chars().map(Key::character).collect()))
            .collect();

        rows.push(KeyRow::new(vec![
            Key::new(
                KeyVisual::Character(self.switch_label().to_string()),
                KeyAction::SwitchToNextLayout,
            )
            .with_width(SWITCH_KEY_WIDTH),
            Key::new(KeyVisual::Character("space".to_string()), KeyAction::Space),
            Key::new(
                KeyVisual::SystemGlyph("delete.left.fill".to_string()),
                KeyAction::Backspace,
            )
            .with_width(BACKSPACE_KEY_WIDTH),
        ]));

        KeyboardLayout::new(rows)
    }
}

pub fn collection_of(layouts: &[KnownLayout]) -> KeyboardCollection {
    KeyboardCollection::new(layouts.iter().map(|l| l.build()).collect())
}

pub fn all_layouts() -> KeyboardCollection {
    let all: Vec<KnownLayout> = KnownLayout::iter().collect();
    collection_of(&all)
}
