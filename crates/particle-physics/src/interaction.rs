//! Directional interaction strengths between color tags
//!
//! Positive values attract, negative values repel. The table is read with the
//! acting body's tag as the row and the other body's tag as the column, so
//! `get(Blue, Green)` and `get(Green, Blue)` are independent entries.

use crate::color::{ColorTag, COLOR_COUNT};

/// Seed strengths, rows and columns in `ColorTag::ALL` order:
/// red, blue, green, yellow, purple, cyan, orange, magenta.
const SEED_TABLE: [[f32; COLOR_COUNT]; COLOR_COUNT] = [
    // red
    [-0.5, 2.0, -1.0, 1.0, -2.0, 1.5, -1.5, 0.5],
    // blue
    [-1.0, -0.5, 2.5, -1.5, 1.5, -2.0, 1.0, 0.0],
    // green
    [1.0, -1.0, -0.5, 2.0, 0.0, 1.0, -2.0, -1.5],
    // yellow
    [2.0, 0.5, -1.0, -0.5, 1.5, -1.0, 2.5, -2.0],
    // purple
    [-2.0, 1.0, 0.5, -1.0, -0.5, 2.0, -1.0, 1.5],
    // cyan
    [1.5, -2.0, 1.0, 0.0, -1.0, -0.5, 2.0, -1.0],
    // orange
    [-1.5, 1.0, -2.0, 2.0, -1.0, 1.5, -0.5, 2.5],
    // magenta
    [0.5, 0.0, -1.5, -2.0, 2.0, -1.0, 1.5, -0.5],
];

/// Immutable 8x8 strength lookup, built once and shared by every step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionTable {
    strengths: [[f32; COLOR_COUNT]; COLOR_COUNT],
}

impl InteractionTable {
    /// Build from a full matrix. Every ordered pair must be given, so there is
    /// no missing-entry fallback.
    pub const fn new(strengths: [[f32; COLOR_COUNT]; COLOR_COUNT]) -> Self {
        Self { strengths }
    }

    /// Strength felt by `from` towards `to`
    #[inline]
    pub fn get(&self, from: ColorTag, to: ColorTag) -> f32 {
        self.strengths[from.index()][to.index()]
    }

    pub fn row(&self, from: ColorTag) -> &[f32; COLOR_COUNT] {
        &self.strengths[from.index()]
    }

    /// All 64 `(from, to, strength)` entries in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (ColorTag, ColorTag, f32)> + '_ {
        ColorTag::ALL.into_iter().flat_map(move |from| {
            ColorTag::ALL
                .into_iter()
                .map(move |to| (from, to, self.get(from, to)))
        })
    }

    pub fn is_symmetric(&self) -> bool {
        self.iter().all(|(from, to, s)| s == self.get(to, from))
    }
}

impl Default for InteractionTable {
    fn default() -> Self {
        Self::new(SEED_TABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ColorTag::*;

    #[test]
    fn test_default_covers_all_pairs() {
        let table = InteractionTable::default();
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries.len(), COLOR_COUNT * COLOR_COUNT);
        for (from, to, strength) in entries {
            assert!(strength.is_finite(), "{from}->{to} is not finite");
            assert!((-2.5..=2.5).contains(&strength), "{from}->{to} = {strength}");
        }
    }

    #[test]
    fn test_self_interaction_is_mild_repulsion() {
        let table = InteractionTable::default();
        for tag in ColorTag::ALL {
            assert_eq!(table.get(tag, tag), -0.5);
        }
    }

    #[test]
    fn test_lookup_is_directional() {
        let table = InteractionTable::default();
        assert_eq!(table.get(Blue, Green), 2.5);
        assert_eq!(table.get(Green, Blue), -1.0);
        assert_eq!(table.get(Red, Cyan), 1.5);
        assert_eq!(table.get(Cyan, Red), 1.5);
        assert!(!table.is_symmetric());
    }

    #[test]
    fn test_intentional_zero_entries() {
        let table = InteractionTable::default();
        let zeros: Vec<_> = table
            .iter()
            .filter(|(_, _, s)| *s == 0.0)
            .map(|(from, to, _)| (from, to))
            .collect();
        assert_eq!(
            zeros,
            vec![(Blue, Magenta), (Green, Purple), (Cyan, Yellow), (Magenta, Blue)]
        );
    }

    #[test]
    fn test_row_matches_get() {
        let table = InteractionTable::default();
        let row = table.row(Orange);
        for to in ColorTag::ALL {
            assert_eq!(row[to.index()], table.get(Orange, to));
        }
        assert_eq!(table.get(Orange, Magenta), 2.5);
    }
}
