//! Selection re-anchoring over hidden rows.
//!
//! When a selection endpoint lands on a hidden row it must be moved to the
//! nearest valid visible row while preserving the direction the user was
//! going. The navigator owns the selection anchor: the most recently
//! resolved valid endpoint, read by later resolutions to infer scan
//! direction.
//!
//! Key invariants:
//! - Every scan is an explicit loop bounded by `[0, row_count - 1]`
//! - Start-resolution stores the PRE-gesture anchor; end-resolution stores
//!   the resolved row itself. The asymmetry lets consecutive start/end
//!   resolutions chain: start reads the anchor as prior state, end writes it
//!   as new state.
//! - As long as at least one row is visible, the result is never hidden

/// Resolves selection endpoints to visible rows.
///
/// Holds the only cross-call state in the engine: the last valid selection
/// anchor. `None` until a gesture completes, and again after `reset`.
#[derive(Debug, Clone, Default)]
pub struct RangeNavigator {
    anchor: Option<usize>,
}

impl RangeNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently stored selection anchor, if any.
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Forget the anchor (plugin disable / settings reload).
    pub fn reset(&mut self) {
        self.anchor = None;
    }

    /// Resolve a header-originated selection start.
    ///
    /// Header selection always starts scanning from row 0 downward, so any
    /// request past the top row passes through untouched. From row 0 the
    /// first visible row wins; if every row is hidden the scan fails closed
    /// at row 0.
    pub fn resolve_range_start_only<F>(&self, row: usize, row_count: usize, is_hidden: F) -> usize
    where
        F: Fn(usize) -> bool,
    {
        if row > 0 {
            return row;
        }

        match scan(0, 1, row_count, &is_hidden) {
            Some(found) => found,
            None => {
                log::warn!("all {row_count} rows hidden, selection start stays at row 0");
                0
            }
        }
    }

    /// Resolve a cell-originated selection start.
    ///
    /// Scan direction comes from where the selection sits now: requesting a
    /// row below the host's current anchor scans downward, otherwise (or
    /// with no current selection) upward. The stored anchor is updated to
    /// the host's PRE-gesture selection row before any scanning, so a
    /// following end-resolution can infer its own direction from it.
    ///
    /// A request outside the table falls back to the stored anchor rather
    /// than selecting past grid bounds through a hidden-row chain.
    pub fn resolve_range_start<F>(
        &mut self,
        row: usize,
        row_count: usize,
        selection: Option<usize>,
        is_hidden: F,
    ) -> usize
    where
        F: Fn(usize) -> bool,
    {
        let direction: i64 = match selection {
            Some(anchor_row) if row > anchor_row => 1,
            _ => -1,
        };

        if let Some(anchor_row) = selection {
            self.anchor = Some(anchor_row);
        }

        if row >= row_count {
            return self.anchor.unwrap_or(0);
        }

        if let Some(found) = scan(row, direction, row_count, &is_hidden) {
            return found;
        }
        // Ran off the table edge: the nearest visible row is on the other
        // side of the requested row.
        if let Some(found) = scan(row, -direction, row_count, &is_hidden) {
            return found;
        }

        log::warn!("all {row_count} rows hidden, selection start falls back to anchor");
        self.anchor.unwrap_or(0)
    }

    /// Resolve a selection end.
    ///
    /// When the target is hidden, search backward (toward row 0) if the
    /// stored anchor lies past the target or the target is the last table
    /// row - the user is shrinking toward a hidden block, or the hidden
    /// block is the table tail and visible rows above it are preferred.
    /// Otherwise search forward. A search that exhausts its side of the
    /// table continues on the other side of the target.
    ///
    /// The resolved row becomes the new stored anchor.
    pub fn resolve_range_end<F>(&mut self, row: usize, row_count: usize, is_hidden: F) -> usize
    where
        F: Fn(usize) -> bool,
    {
        if row_count == 0 {
            log::warn!("selection end requested on empty table");
            return 0;
        }

        let row = if row >= row_count {
            log::warn!("selection end {row} past last row, clamping");
            row_count - 1
        } else {
            row
        };

        let resolved = if !is_hidden(row) {
            row
        } else {
            let backward =
                self.anchor.map_or(false, |anchor| anchor > row) || row == row_count - 1;
            let direction: i64 = if backward { -1 } else { 1 };

            scan(row, direction, row_count, &is_hidden)
                .or_else(|| scan(row, -direction, row_count, &is_hidden))
                .unwrap_or_else(|| {
                    log::warn!("all {row_count} rows hidden, selection end falls back to anchor");
                    self.anchor.unwrap_or(0)
                })
        };

        self.anchor = Some(resolved);
        resolved
    }
}

/// Step from `row` by `direction` until a visible row or the table edge.
fn scan<F>(row: usize, direction: i64, row_count: usize, is_hidden: &F) -> Option<usize>
where
    F: Fn(usize) -> bool,
{
    let mut candidate = row as i64;
    while candidate >= 0 && candidate < row_count as i64 {
        let current = candidate as usize;
        if !is_hidden(current) {
            return Some(current);
        }
        candidate += direction;
    }
    None
}
