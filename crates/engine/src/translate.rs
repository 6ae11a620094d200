//! Logical/external row index translation.
//!
//! The host grid may reorder rows (manual move, sort), so a row has two
//! addresses:
//! - LOGICAL index: position in the unmodified backing dataset
//! - EXTERNAL index: what callers address rows by, post-reordering
//!
//! The mapping is injected as an explicit function pair at construction.
//! Translation is re-resolved on every call - the host can reorder between
//! calls, so results must never be cached.

use std::fmt;

/// Bidirectional row index mapping between external and logical space.
pub struct IndexTranslator {
    to_logical: Box<dyn Fn(usize) -> usize>,
    to_external: Box<dyn Fn(usize) -> usize>,
}

impl IndexTranslator {
    pub fn new(
        to_logical: impl Fn(usize) -> usize + 'static,
        to_external: impl Fn(usize) -> usize + 'static,
    ) -> Self {
        Self {
            to_logical: Box::new(to_logical),
            to_external: Box::new(to_external),
        }
    }

    /// Identity mapping: external and logical spaces coincide.
    pub fn identity() -> Self {
        Self::new(|row| row, |row| row)
    }

    /// Build from an explicit external -> logical order table.
    ///
    /// `order[external] = logical`; the inverse is derived. Indices past the
    /// table pass through unchanged.
    pub fn from_order(order: Vec<usize>) -> Self {
        let mut inverse = vec![0usize; order.len()];
        for (external, &logical) in order.iter().enumerate() {
            if logical < inverse.len() {
                inverse[logical] = external;
            }
        }
        Self::new(
            move |row| order.get(row).copied().unwrap_or(row),
            move |row| inverse.get(row).copied().unwrap_or(row),
        )
    }

    pub fn to_logical(&self, external: usize) -> usize {
        (self.to_logical)(external)
    }

    pub fn to_external(&self, logical: usize) -> usize {
        (self.to_external)(logical)
    }
}

impl Default for IndexTranslator {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for IndexTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexTranslator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let t = IndexTranslator::identity();
        assert_eq!(t.to_logical(7), 7);
        assert_eq!(t.to_external(7), 7);
    }

    #[test]
    fn test_from_order_round_trip() {
        // External view shows logical rows reversed.
        let t = IndexTranslator::from_order(vec![4, 3, 2, 1, 0]);
        assert_eq!(t.to_logical(0), 4);
        assert_eq!(t.to_logical(4), 0);
        assert_eq!(t.to_external(4), 0);
        for external in 0..5 {
            assert_eq!(t.to_external(t.to_logical(external)), external);
        }
    }

    #[test]
    fn test_from_order_out_of_table_passes_through() {
        let t = IndexTranslator::from_order(vec![1, 0]);
        assert_eq!(t.to_logical(9), 9);
        assert_eq!(t.to_external(9), 9);
    }
}
