//! Perceptual contrast between palette entries.
//!
//! Scores run from 0 (identical) to 10 (maximally distinct) and are
//! hand-authored from hue, lightness and saturation differences of the
//! palette colors. They are static data, never computed at runtime.

use super::palette::PALETTE_SIZE;

/// Symmetric contrast scores between palette entries.
///
/// Plays the role a setup-time matrix plays for sequencing: a pairwise
/// cost table looked up by the greedy pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContrastMatrix {
    scores: [[u8; PALETTE_SIZE]; PALETTE_SIZE],
}

impl ContrastMatrix {
    /// Scores for [`PALETTE`](super::PALETTE).
    pub const DEFAULT: Self = Self {
        scores: [
            //0   1   2   3   4   5   6   7   8   9  10  11
            [0, 10, 7, 9, 8, 10, 5, 9, 6, 9, 6, 10],  // 0 blue
            [10, 0, 8, 7, 10, 4, 9, 3, 6, 10, 9, 5],  // 1 orange
            [7, 8, 0, 9, 7, 8, 7, 10, 3, 8, 4, 9],    // 2 green
            [9, 7, 9, 0, 5, 8, 9, 6, 8, 6, 10, 4],    // 3 pink
            [8, 10, 7, 5, 0, 9, 8, 9, 7, 2, 8, 8],    // 4 purple
            [10, 4, 8, 8, 9, 0, 6, 5, 4, 10, 7, 7],   // 5 yellow
            [5, 9, 7, 9, 8, 6, 0, 9, 6, 9, 4, 9],     // 6 cyan
            [9, 3, 10, 6, 9, 5, 9, 0, 7, 10, 10, 2],  // 7 deep orange
            [6, 6, 3, 8, 7, 4, 6, 7, 0, 8, 5, 8],     // 8 lime
            [9, 10, 8, 6, 2, 10, 9, 10, 8, 0, 8, 9],  // 9 deep purple
            [6, 9, 4, 10, 8, 7, 4, 10, 5, 8, 0, 10],  // 10 teal
            [10, 5, 9, 4, 8, 7, 9, 2, 8, 9, 10, 0],   // 11 red
        ],
    };

    /// Builds a matrix from raw scores. No checks are applied; see
    /// [`validate_contrast_matrix`](crate::validation::validate_contrast_matrix).
    pub const fn from_scores(scores: [[u8; PALETTE_SIZE]; PALETTE_SIZE]) -> Self {
        Self { scores }
    }

    /// Contrast between two palette entries.
    #[inline]
    pub fn contrast(&self, a: usize, b: usize) -> u32 {
        u32::from(self.scores[a][b])
    }

    /// Number of palette entries covered.
    #[inline]
    pub fn size(&self) -> usize {
        PALETTE_SIZE
    }
}

impl Default for ContrastMatrix {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_symmetric() {
        let m = ContrastMatrix::DEFAULT;
        for a in 0..m.size() {
            for b in 0..m.size() {
                assert_eq!(m.contrast(a, b), m.contrast(b, a), "({a}, {b})");
            }
        }
    }

    #[test]
    fn test_default_diagonal_zero() {
        let m = ContrastMatrix::default();
        for a in 0..m.size() {
            assert_eq!(m.contrast(a, a), 0);
        }
    }

    #[test]
    fn test_default_off_diagonal_in_range() {
        let m = ContrastMatrix::default();
        for a in 0..m.size() {
            for b in 0..m.size() {
                if a != b {
                    let c = m.contrast(a, b);
                    assert!((1..=10).contains(&c), "({a}, {b}) = {c}");
                }
            }
        }
    }
}
