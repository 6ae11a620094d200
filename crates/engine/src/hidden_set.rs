//! Authoritative set of hidden row indices.
//!
//! Key invariants:
//! - Members are LOGICAL row indices (stable identity, pre-reordering)
//! - No duplicates; kept sorted so neighbor queries stay O(log n)
//! - Members are shifted on row insert/remove anywhere in the table

/// Sorted, duplicate-free set of hidden logical row indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenSet {
    rows: Vec<usize>,
}

impl HiddenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Membership test - O(log n).
    pub fn contains(&self, row: usize) -> bool {
        self.rows.binary_search(&row).is_ok()
    }

    /// Insert a row. Returns false if already present (idempotent).
    pub fn insert(&mut self, row: usize) -> bool {
        match self.rows.binary_search(&row) {
            Ok(_) => false,
            Err(pos) => {
                self.rows.insert(pos, row);
                true
            }
        }
    }

    /// Remove a row. Returns false if absent (idempotent).
    pub fn remove(&mut self, row: usize) -> bool {
        match self.rows.binary_search(&row) {
            Ok(pos) => {
                self.rows.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Drop all members (disable/reset).
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Members in ascending order.
    pub fn as_slice(&self) -> &[usize] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    /// Shift members after rows were inserted at `at`.
    ///
    /// Every member `>= at` grows by `amount`; order is preserved.
    pub fn shift_on_insert(&mut self, at: usize, amount: usize) {
        for row in self.rows.iter_mut() {
            if *row >= at {
                *row += amount;
            }
        }
    }

    /// Shift members after rows `[at, at + amount)` were removed.
    ///
    /// Members inside the removed window are dropped entirely (their rows no
    /// longer exist); surviving members `>= at + amount` shrink by `amount`.
    pub fn shift_on_remove(&mut self, at: usize, amount: usize) {
        self.rows.retain(|row| *row < at || *row >= at + amount);
        for row in self.rows.iter_mut() {
            if *row >= at + amount {
                *row -= amount;
            }
        }
    }
}
