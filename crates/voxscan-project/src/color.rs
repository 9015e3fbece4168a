//! Colors and the semantic label palette.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Linear RGBA color with components in `[0, 1]`.
///
/// Deserializes from either `[r, g, b]` (opaque) or `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(from = "ColorRepr", into = "[f32; 4]")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    // Matches the usual engine yellow, which is not pure (1, 1, 0).
    pub const YELLOW: Self = Self::rgb(1.0, 0.92, 0.016);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque color.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Quantize to 8 bits per channel, clamping out-of-range components.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Rgb([f32; 3]),
    Rgba([f32; 4]),
}

impl From<ColorRepr> for Color {
    fn from(repr: ColorRepr) -> Self {
        match repr {
            ColorRepr::Rgb([r, g, b]) => Self::rgb(r, g, b),
            ColorRepr::Rgba([r, g, b, a]) => Self::rgba(r, g, b, a),
        }
    }
}

/// Mapping from semantic label to color, with a fallback for unknown labels.
///
/// An empty table resolves every label to its default color.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ColorTable {
    #[serde(default)]
    default: Color,
    #[serde(default)]
    labels: BTreeMap<i32, Color>,
}

impl ColorTable {
    /// Empty table that resolves everything to `default`.
    #[must_use]
    pub fn new(default: Color) -> Self {
        Self {
            default,
            labels: BTreeMap::new(),
        }
    }

    /// The scan-completion palette: 0 red, 1 green, 2 blue, 3 yellow, white otherwise.
    #[must_use]
    pub fn semantic() -> Self {
        [
            (0, Color::RED),
            (1, Color::GREEN),
            (2, Color::BLUE),
            (3, Color::YELLOW),
        ]
        .into_iter()
        .collect()
    }

    /// Set the color for `label`, returning the one it replaces.
    pub fn insert(&mut self, label: i32, color: Color) -> Option<Color> {
        self.labels.insert(label, color)
    }

    /// Color explicitly assigned to `label`, if any.
    #[must_use]
    pub fn get(&self, label: i32) -> Option<Color> {
        self.labels.get(&label).copied()
    }

    /// Color for `label`, falling back to the default color.
    #[must_use]
    pub fn resolve(&self, label: i32) -> Color {
        self.get(label).unwrap_or(self.default)
    }

    #[must_use]
    pub fn default_color(&self) -> Color {
        self.default
    }

    pub fn set_default_color(&mut self, color: Color) {
        self.default = color;
    }

    /// Number of labels with an explicit color.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl FromIterator<(i32, Color)> for ColorTable {
    fn from_iter<I: IntoIterator<Item = (i32, Color)>>(iter: I) -> Self {
        Self {
            default: Color::WHITE,
            labels: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_palette() {
        let table = ColorTable::semantic();
        assert_eq!(table.len(), 4);
        assert_eq!(table.resolve(0), Color::RED);
        assert_eq!(table.resolve(1), Color::GREEN);
        assert_eq!(table.resolve(2), Color::BLUE);
        assert_eq!(table.resolve(3), Color::YELLOW);
        assert_eq!(table.resolve(4), Color::WHITE);
        assert_eq!(table.resolve(-1), Color::WHITE);
    }

    #[test]
    fn empty_table_resolves_to_default() {
        let table = ColorTable::new(Color::BLACK);
        assert!(table.is_empty());
        assert_eq!(table.get(0), None);
        assert_eq!(table.resolve(0), Color::BLACK);
        assert_eq!(table.resolve(i32::MAX), Color::BLACK);
    }

    #[test]
    fn insert_replaces() {
        let mut table = ColorTable::default();
        assert_eq!(table.insert(7, Color::RED), None);
        assert_eq!(table.insert(7, Color::BLUE), Some(Color::RED));
        assert_eq!(table.resolve(7), Color::BLUE);

        table.set_default_color(Color::GREEN);
        assert_eq!(table.resolve(8), Color::GREEN);
    }

    #[test]
    fn rgba8_clamps() {
        assert_eq!(Color::RED.to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(Color::rgba(2.0, -1.0, 0.5, 0.0).to_rgba8(), [255, 0, 128, 0]);
    }

    #[test]
    fn deserialize_table() {
        let json = r#"{
            "default": [0.5, 0.5, 0.5],
            "labels": { "0": [1, 0, 0], "5": [0, 0, 1, 0.25] }
        }"#;
        let table: ColorTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.default_color(), Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(table.resolve(0), Color::RED);
        assert_eq!(table.resolve(5), Color::rgba(0.0, 0.0, 1.0, 0.25));
        assert_eq!(table.resolve(1), Color::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn deserialize_defaults_to_white() {
        let table: ColorTable = serde_json::from_str("{}").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.default_color(), Color::WHITE);
    }
}
