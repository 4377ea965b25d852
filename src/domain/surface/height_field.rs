// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/surface/height_field.rs
//
// Row-major elevation grid derived from a cropped image region.

/// Scalar elevation grid, one cell per selected pixel.
///
/// Cell `(0, 0)` corresponds to the top-left pixel of the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    width: u32,
    height: u32,
    values: Vec<f32>,
    /// Largest value the source bit depth can produce (255, 65535 or 1.0).
    max_value: f32,
}

impl HeightField {
    /// Build a grid from row-major values.
    ///
    /// Returns `None` when `values` does not hold `width * height` cells.
    pub fn from_values(width: u32, height: u32, values: Vec<f32>, max_value: f32) -> Option<Self> {
        (values.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            values,
            max_value,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    /// Raw row-major cells.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Elevation at column `x`, row `y`.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Elevation at `(x, y)` scaled into `[0, 1]` by the source range.
    #[must_use]
    pub fn normalized(&self, x: u32, y: u32) -> Option<f32> {
        let v = self.get(x, y)?;
        Some(if self.max_value > 0.0 {
            v / self.max_value
        } else {
            0.0
        })
    }

    /// Smallest and largest elevation, `None` for an empty grid.
    #[must_use]
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let mut it = self.values.iter().copied();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> HeightField {
        HeightField::from_values(3, 2, vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0], 255.0).unwrap()
    }

    #[test]
    fn rejects_mismatched_cell_count() {
        assert!(HeightField::from_values(3, 2, vec![0.0; 5], 255.0).is_none());
    }

    #[test]
    fn addresses_cells_by_column_then_row() {
        let field = ramp();
        assert_eq!(field.get(0, 0), Some(0.0));
        assert_eq!(field.get(2, 0), Some(2.0));
        assert_eq!(field.get(1, 1), Some(11.0));
        assert_eq!(field.get(3, 0), None);
        assert_eq!(field.get(0, 2), None);
    }

    #[test]
    fn range_helpers() {
        let field = ramp();
        assert_eq!(field.min_max(), Some((0.0, 12.0)));
        assert_eq!(field.normalized(2, 1), Some(12.0 / 255.0));
        let empty = HeightField::from_values(0, 0, Vec::new(), 255.0).unwrap();
        assert_eq!(empty.min_max(), None);
    }
}
