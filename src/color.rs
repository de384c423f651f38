//! Colors and the palette

use std::collections::HashMap;

/// A pixmap color: an `#RRGGBB` code plus the glyph standing for it
/// in the exported document
///
/// Colors compare and hash by value, so the same code and glyph
/// always intern to a single palette entry.
///
///     use xpix::Color;
///
///     let red = Color::new("#FF0000", "R");
///     assert_eq!(red, Color::new("#FF0000", "R"));
///     assert_eq!(red.width(), 1);
///
#[derive(Debug,Clone,PartialEq,Eq,Hash)]
pub struct Color {
    /// RGB hex code, `#RRGGBB`
    pub code: String,
    /// Character sequence standing for one cell
    pub glyph: String,
}

impl Color {
    /// Create a new color
    pub fn new(code: &str, glyph: &str) -> Self {
        Color {
            code: code.into(),
            glyph: glyph.into(),
        }
    }
    /// Compose the hex code from byte components
    ///
    ///     use xpix::Color;
    ///
    ///     let c = Color::from_rgb(255, 128, 0, "o");
    ///     assert_eq!(c.code, "#ff8000");
    ///
    pub fn from_rgb(r: u8, g: u8, b: u8, glyph: &str) -> Self {
        Self::new(&format!("#{:02x}{:02x}{:02x}", r, g, b), glyph)
    }
    /// Glyph width in characters
    pub fn width(&self) -> usize {
        self.glyph.chars().count()
    }
}

/// Insertion-ordered set of distinct colors
///
/// Interning hands out stable indices; the first index assigned to a
/// color value is the one it keeps.
#[derive(Debug,Default)]
pub struct Palette {
    colors: Vec<Color>,
    index: HashMap<Color, usize>,
}

impl Palette {
    /// Create an empty palette
    pub fn new() -> Self {
        Self::default()
    }
    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }
    /// Whether any color has been interned
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
    /// Add a color if unseen and return its index
    pub fn intern(&mut self, color: &Color) -> usize {
        if let Some(&i) = self.index.get(color) {
            return i;
        }
        let i = self.colors.len();
        self.colors.push(color.clone());
        self.index.insert(color.clone(), i);
        i
    }
    /// Color at an index
    pub fn get(&self, i: usize) -> Option<&Color> {
        self.colors.get(i)
    }
    /// Colors in first-interned order
    pub fn iter(&self) -> std::slice::Iter<Color> {
        self.colors.iter()
    }
}
