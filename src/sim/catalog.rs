//! Fixed color and shape catalogs

use serde::{Deserialize, Serialize};

/// Named display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Green,
    Blue,
    Orange,
    Yellow,
}

/// Full color catalog, in canonical order
pub const COLORS: [Color; 5] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Orange,
    Color::Yellow,
];

impl Color {
    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
            Color::Orange => "ORANGE",
            Color::Yellow => "YELLOW",
        }
    }

    /// 24-bit RGB display value
    pub fn rgb(&self) -> u32 {
        match self {
            Color::Red => 0xFF0000,
            Color::Green => 0x00FF00,
            Color::Blue => 0x0000FF,
            Color::Orange => 0xFFA500,
            Color::Yellow => 0xFFFF00,
        }
    }

    /// Split into (r, g, b) channels
    pub fn channels(&self) -> (u8, u8, u8) {
        let rgb = self.rgb();
        ((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// `#RRGGBB` form for web/CSS style renderers
    pub fn web_hex(&self) -> String {
        format!("#{:06X}", self.rgb())
    }

    pub fn from_name(s: &str) -> Option<Self> {
        COLORS.iter().copied().find(|c| c.name().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Square,
    Triangle,
    Circle,
    Diamond,
    Rectangle,
}

/// Full shape catalog, in canonical order
pub const SHAPES: [ShapeKind; 5] = [
    ShapeKind::Square,
    ShapeKind::Triangle,
    ShapeKind::Circle,
    ShapeKind::Diamond,
    ShapeKind::Rectangle,
];

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Diamond => "Diamond",
            ShapeKind::Rectangle => "Rectangle",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        SHAPES.iter().copied().find(|k| k.name().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
