use std::fmt;

use serde::{Deserialize, Serialize};

/// Fallback used when a color name cannot be resolved for display
const UNRESOLVED_RGBA: [u8; 4] = [255, 0, 255, 255];

/// CSS names understood by [`Color::to_rgba`], covering the default palette
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("white", [255, 255, 255]),
    ("black", [0, 0, 0]),
    ("grey", [128, 128, 128]),
    ("gray", [128, 128, 128]),
    ("yellow", [255, 255, 0]),
    ("red", [255, 0, 0]),
    ("blue", [0, 0, 255]),
    ("green", [0, 128, 0]),
    ("brown", [165, 42, 42]),
    ("pink", [255, 192, 203]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
];

/// A color identifier, e.g. `"white"` or `"#ff8800"`.
///
/// Cells store identifiers rather than RGB values so that the palette, the grid and saved snapshots all
/// speak the same vocabulary. Conversion to pixels only happens at the render and export edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Resolves the identifier to RGBA, or `None` if it is neither a known name nor `#rrggbb`
    pub fn try_rgba(&self) -> Option<[u8; 4]> {
        let name = self.0.trim();
        if let Some(hex) = name.strip_prefix('#') {
            return parse_hex(hex);
        }
        NAMED_COLORS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, [r, g, b])| [*r, *g, *b, 255])
    }

    /// Resolves the identifier to RGBA, falling back to magenta so unknown colors stand out
    pub fn to_rgba(&self) -> [u8; 4] {
        self.try_rgba().unwrap_or_else(|| {
            log::warn!("Unknown color `{}`, rendering as magenta", self.0);
            UNRESOLVED_RGBA
        })
    }

    pub fn to_color32(&self) -> egui::Color32 {
        let [r, g, b, a] = self.to_rgba();
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

fn parse_hex(hex: &str) -> Option<[u8; 4]> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?, 255])
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Self(name)
    }
}
