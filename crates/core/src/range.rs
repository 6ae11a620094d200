//! Cell coordinates and rectangular row/column ranges.
//!
//! Key invariants:
//! - `Range` is produced with `start_row <= end_row` (ascending iteration
//!   order); consumers may rely on it
//! - Indices are 0-based throughout

use serde::{Deserialize, Serialize};

/// A single cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoords {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based)
    pub col: usize,
}

impl CellCoords {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular block of cells, inclusive on all four bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start_row: usize,
    pub end_row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl Range {
    pub fn new(start_row: usize, end_row: usize, start_col: usize, end_col: usize) -> Self {
        debug_assert!(start_row <= end_row, "range rows out of order");
        Self {
            start_row,
            end_row,
            start_col,
            end_col,
        }
    }

    /// Number of rows covered (inclusive bounds).
    pub fn row_span(&self) -> usize {
        self.end_row - self.start_row + 1
    }

    /// Iterate the row indices covered by this range.
    pub fn rows(&self) -> impl Iterator<Item = usize> {
        self.start_row..=self.end_row
    }

    /// A copy of this range with different row bounds, same columns.
    pub fn with_rows(&self, start_row: usize, end_row: usize) -> Self {
        Self::new(start_row, end_row, self.start_col, self.end_col)
    }

    pub fn contains_row(&self, row: usize) -> bool {
        row >= self.start_row && row <= self.end_row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_span_single_row() {
        let r = Range::new(3, 3, 0, 5);
        assert_eq!(r.row_span(), 1);
        assert!(r.contains_row(3));
        assert!(!r.contains_row(4));
    }

    #[test]
    fn test_with_rows_keeps_columns() {
        let r = Range::new(0, 9, 2, 7);
        let sub = r.with_rows(4, 6);
        assert_eq!(sub, Range::new(4, 6, 2, 7));
        assert_eq!(sub.start_col, 2);
        assert_eq!(sub.end_col, 7);
    }

    #[test]
    fn test_rows_iteration() {
        let r = Range::new(2, 5, 0, 0);
        let rows: Vec<usize> = r.rows().collect();
        assert_eq!(rows, vec![2, 3, 4, 5]);
    }
}
