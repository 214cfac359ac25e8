//! Key frame computation for a layout.
//!
//! Drawing belongs to whatever front end hosts the keyboard; this module
//! only decides where each key goes. Within a row, fixed-width keys take
//! exactly their width and flexible keys split what is left equally.

use crate::bundle::ResourceBundle;
use crate::model::{KeyAction, KeyVisual, KeyboardLayout};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub width: f64,
    pub padding: f64,
    pub key_spacing: f64,
    pub row_spacing: f64,
    pub key_height: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            width: 375.0,
            padding: 16.0,
            key_spacing: 4.0,
            row_spacing: 8.0,
            key_height: 45.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Glyph {
    Text(String),
    Symbol(String),
    Vector { name: String, path: Option<PathBuf> },
}

impl Glyph {
    fn from_visual(visual: &KeyVisual, bundle: Option<&ResourceBundle>) -> Self {
        match visual {
            KeyVisual::Character(s) => Self::Text(s.to_uppercase()),
            KeyVisual::SystemGlyph(name) => Self::Symbol(name.clone()),
            KeyVisual::VectorGlyph(name) => Self::Vector {
                name: name.clone(),
                path: bundle.and_then(|b| b.vector_glyph(name)),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyFrame {
    pub row: usize,
    pub column: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fixed: bool,
    pub glyph: Glyph,
    action: KeyAction,
}

impl KeyFrame {
    /// The action a tap on this key dispatches.
    pub fn tap(&self) -> &KeyAction {
        &self.action
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub keys: Vec<KeyFrame>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLayout {
    pub rows: Vec<RenderedRow>,
    pub width: f64,
    pub height: f64,
}

impl RenderedLayout {
    /// Row lengths, top to bottom.
    pub fn topology(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.keys.len()).collect()
    }

    pub fn key(&self, row: usize, column: usize) -> Option<&KeyFrame> {
        self.rows.get(row).and_then(|r| r.keys.get(column))
    }

    /// Key under a touch point, if any. Gaps between keys hit nothing.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&KeyFrame> {
        self.rows
            .iter()
            .flat_map(|r| r.keys.iter())
            .find(|k| k.contains(x, y))
    }
}

/// Widths for one row: fixed keys as given, flexible keys sharing the rest.
pub fn row_widths(widths: &[Option<f64>], metrics: &LayoutMetrics) -> Vec<f64> {
    let count = widths.len();
    if count == 0 {
        return Vec::new();
    }

    let inner = (metrics.width - 2.0 * metrics.padding).max(0.0);
    let gaps = metrics.key_spacing * (count - 1) as f64;
    let fixed_total: f64 = widths.iter().flatten().sum();
    let flexible = widths.iter().filter(|w| w.is_none()).count();

    let share = if flexible > 0 {
        ((inner - gaps - fixed_total) / flexible as f64).max(0.0)
    } else {
        0.0
    };

    widths.iter().map(|w| w.unwrap_or(share)).collect()
}

pub fn compute(
    layout: &KeyboardLayout,
    metrics: &LayoutMetrics,
    bundle: Option<&ResourceBundle>,
) -> RenderedLayout {
    let mut rows = Vec::with_capacity(layout.rows.len());

    for (r, row) in layout.rows.iter().enumerate() {
        let y = metrics.padding + r as f64 * (metrics.key_height + metrics.row_spacing);
        let requested: Vec<Option<f64>> = row.keys.iter().map(|k| k.width).collect();
        let widths = row_widths(&requested, metrics);

        let mut x = metrics.padding;
        let mut keys = Vec::with_capacity(row.keys.len());
        for (c, (key, width)) in row.keys.iter().zip(widths).enumerate() {
            keys.push(KeyFrame {
                row: r,
                column: c,
                x,
                y,
                width,
                height: metrics.key_height,
                fixed: !key.is_flexible(),
                glyph: Glyph::from_visual(&key.visual, bundle),
                action: key.action.clone(),
            });
            x += width + metrics.key_spacing;
        }
        rows.push(RenderedRow { keys });
    }

    let height = if rows.is_empty() {
        2.0 * metrics.padding
    } else {
        let n = rows.len() as f64;
        2.0 * metrics.padding + n * metrics.key_height + (n - 1.0) * metrics.row_spacing
    };

    RenderedLayout {
        rows,
        width: metrics.width,
        height,
    }
}
