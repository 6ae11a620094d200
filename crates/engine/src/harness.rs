//! Test fixture standing in for the host grid.
//!
//! Provides `GridFixture`, a minimal `GridHost` with a settable row count,
//! selection and row order, so engine behavior can be tested without a
//! real grid.

use gridveil_core::CellCoords;

use crate::translate::IndexTranslator;
use crate::visibility::GridHost;

/// Fake host grid: fixed row count, optional selection, optional reorder.
#[derive(Debug, Clone)]
pub struct GridFixture {
    rows: usize,
    selection: Option<CellCoords>,
    /// external -> logical order table; identity when empty.
    order: Vec<usize>,
}

impl GridFixture {
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            selection: None,
            order: Vec::new(),
        }
    }

    /// Place the host's current selection endpoint.
    pub fn select(&mut self, row: usize, col: usize) {
        self.selection = Some(CellCoords::new(row, col));
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Reorder the external view. `order[external] = logical`.
    pub fn reorder(&mut self, order: Vec<usize>) {
        debug_assert_eq!(order.len(), self.rows, "order table must cover all rows");
        self.order = order;
    }

    pub fn set_row_count(&mut self, rows: usize) {
        self.rows = rows;
    }

    /// Translator reflecting this fixture's current row order.
    pub fn translator(&self) -> IndexTranslator {
        if self.order.is_empty() {
            IndexTranslator::identity()
        } else {
            IndexTranslator::from_order(self.order.clone())
        }
    }
}

impl GridHost for GridFixture {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn selection_anchor(&self) -> Option<CellCoords> {
        self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_defaults() {
        let host = GridFixture::new(8);
        assert_eq!(host.row_count(), 8);
        assert_eq!(host.selection_anchor(), None);
    }

    #[test]
    fn test_fixture_selection() {
        let mut host = GridFixture::new(8);
        host.select(3, 1);
        assert_eq!(host.selection_anchor(), Some(CellCoords::new(3, 1)));
        host.clear_selection();
        assert_eq!(host.selection_anchor(), None);
    }

    #[test]
    fn test_fixture_translator_follows_order() {
        let mut host = GridFixture::new(3);
        host.reorder(vec![2, 0, 1]);
        let translator = host.translator();
        assert_eq!(translator.to_logical(0), 2);
        assert_eq!(translator.to_external(2), 0);
    }
}
