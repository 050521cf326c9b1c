//! Fixed order palette.
//!
//! Twelve entries chosen for perceptual spread. Neighboring indices are
//! deliberately low-contrast pairs, so index order carries no meaning for
//! distinctness; use [`ContrastMatrix`](super::ContrastMatrix) for that.

use serde::Serialize;

/// Number of palette entries.
pub const PALETTE_SIZE: usize = 12;

/// One palette entry, as `#RRGGBB` hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    /// Block fill.
    pub background: &'static str,
    /// Block border accent.
    pub border: &'static str,
    /// Text drawn on top of `background`.
    pub text: &'static str,
}

impl PaletteColor {
    const fn new(background: &'static str, border: &'static str, text: &'static str) -> Self {
        Self {
            background,
            border,
            text,
        }
    }
}

/// The order palette.
pub const PALETTE: [PaletteColor; PALETTE_SIZE] = [
    PaletteColor::new("#2196F3", "#1565C0", "#FFFFFF"), // blue
    PaletteColor::new("#FF9800", "#E65100", "#000000"), // orange
    PaletteColor::new("#4CAF50", "#2E7D32", "#FFFFFF"), // green
    PaletteColor::new("#E91E63", "#C2185B", "#FFFFFF"), // pink
    PaletteColor::new("#9C27B0", "#7B1FA2", "#FFFFFF"), // purple
    PaletteColor::new("#FFEB3B", "#F9A825", "#000000"), // yellow
    PaletteColor::new("#00BCD4", "#0097A7", "#000000"), // cyan
    PaletteColor::new("#FF5722", "#D84315", "#FFFFFF"), // deep orange
    PaletteColor::new("#8BC34A", "#558B2F", "#000000"), // lime
    PaletteColor::new("#673AB7", "#4527A0", "#FFFFFF"), // deep purple
    PaletteColor::new("#009688", "#00695C", "#FFFFFF"), // teal
    PaletteColor::new("#F44336", "#C62828", "#FFFFFF"), // red
];

/// Looks up a palette entry, wrapping out-of-range indices.
#[inline]
pub fn palette_color(color_index: usize) -> &'static PaletteColor {
    &PALETTE[color_index % PALETTE_SIZE]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(s: &str) -> bool {
        s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_palette_entries_are_hex() {
        for color in &PALETTE {
            assert!(is_hex_color(color.background), "{}", color.background);
            assert!(is_hex_color(color.border), "{}", color.border);
            assert!(is_hex_color(color.text), "{}", color.text);
        }
    }

    #[test]
    fn test_palette_backgrounds_unique() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a.background, b.background);
            }
        }
    }

    #[test]
    fn test_palette_color_wraps() {
        assert_eq!(palette_color(0), &PALETTE[0]);
        assert_eq!(palette_color(PALETTE_SIZE), &PALETTE[0]);
        assert_eq!(palette_color(PALETTE_SIZE + 3), &PALETTE[3]);
    }
}
