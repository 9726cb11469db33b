use std::collections::HashSet;

use crate::color::Color;
use crate::error::PaletteError;

/// Ordered, duplicate-free set of colors the user can paint with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        // Names resolve case-insensitively, so "White" and "white" are the same swatch
        let mut seen = HashSet::with_capacity(colors.len());
        for color in &colors {
            if !seen.insert(color.name().trim().to_ascii_lowercase()) {
                return Err(PaletteError::Duplicate(color.clone()));
            }
        }

        Ok(Self { colors })
    }

    pub fn contains(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(names: &[&str]) -> Vec<Color> {
        names.iter().map(|n| Color::from(*n)).collect()
    }

    #[test]
    fn test_palette_keeps_order() {
        let palette = Palette::new(colors(&["white", "black", "red"])).unwrap();
        assert_eq!(palette.len(), 3);
        let order: Vec<_> = palette.iter().map(Color::name).collect();
        assert_eq!(order, ["white", "black", "red"]);
        assert!(palette.contains(&Color::from("black")));
        assert!(!palette.contains(&Color::from("blue")));
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert_eq!(Palette::new(Vec::new()), Err(PaletteError::Empty));
    }

    #[test]
    fn test_duplicate_color_rejected() {
        assert_eq!(
            Palette::new(colors(&["white", "red", "white"])),
            Err(PaletteError::Duplicate(Color::from("white")))
        );
    }

    #[test]
    fn test_duplicate_check_ignores_case() {
        assert_eq!(
            Palette::new(colors(&["white", "black", "White"])),
            Err(PaletteError::Duplicate(Color::from("White")))
        );
    }
}
