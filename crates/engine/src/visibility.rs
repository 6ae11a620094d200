//! Public row-visibility contract.
//!
//! `RowVisibility` composes the hidden set, the index translator and the
//! range navigator behind the surface the host grid calls. It never touches
//! grid data: every operation returns adjusted coordinates, partitioned
//! ranges or a plain answer for the host to act on.
//!
//! Key invariants:
//! - Stored hidden indices are LOGICAL; every external-index entry point
//!   translates before testing membership
//! - Host state (row count, current selection) is read through `GridHost`
//!   on every call, never cached
//! - Out-of-range hide/show arguments are dropped with a warning instead of
//!   failing the host's synchronous pipeline

use gridveil_core::{CellCoords, Range};

use crate::copy_range;
use crate::hidden_set::HiddenSet;
use crate::navigate::RangeNavigator;
use crate::settings::HiddenRowsSettings;
use crate::translate::IndexTranslator;

/// Height the host should render hidden rows with.
///
/// Non-zero so the renderer keeps the row element around (borders collapse
/// correctly); small enough to be invisible.
pub const COLLAPSED_ROW_HEIGHT: f64 = 0.1;

/// Host grid state the engine reads on every call.
pub trait GridHost {
    fn row_count(&self) -> usize;

    /// The most recent selection endpoint, if a selection exists.
    fn selection_anchor(&self) -> Option<CellCoords>;
}

/// Row-visibility engine for one grid instance.
#[derive(Debug)]
pub struct RowVisibility {
    settings: HiddenRowsSettings,
    hidden: HiddenSet,
    translator: IndexTranslator,
    navigator: RangeNavigator,
    enabled: bool,
}

impl Default for RowVisibility {
    fn default() -> Self {
        Self::new(HiddenRowsSettings::default(), IndexTranslator::identity())
    }
}

impl RowVisibility {
    pub fn new(settings: HiddenRowsSettings, translator: IndexTranslator) -> Self {
        Self {
            settings,
            hidden: HiddenSet::new(),
            translator,
            navigator: RangeNavigator::new(),
            enabled: false,
        }
    }

    pub fn settings(&self) -> &HiddenRowsSettings {
        &self.settings
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Apply the configured initial hidden set and start serving queries.
    pub fn enable(&mut self, host: &impl GridHost) {
        if self.enabled {
            return;
        }
        let initial = self.settings.rows.clone();
        self.hide_rows(&initial, host);
        self.enabled = true;
        log::debug!("row visibility enabled, {} rows hidden", self.hidden.len());
    }

    /// Drop all hidden state and the selection anchor.
    pub fn disable(&mut self) {
        self.hidden.clear();
        self.navigator.reset();
        self.enabled = false;
        log::debug!("row visibility disabled");
    }

    /// Replace settings and re-apply from scratch (host settings reload).
    pub fn update(&mut self, settings: HiddenRowsSettings, host: &impl GridHost) {
        self.disable();
        self.settings = settings;
        self.enable(host);
    }

    // -------------------------------------------------------------------------
    // Hidden set
    // -------------------------------------------------------------------------

    /// Check if a row is hidden. `row` is an external index unless
    /// `is_logical` says otherwise.
    pub fn is_hidden(&self, row: usize, is_logical: bool) -> bool {
        let logical = if is_logical {
            row
        } else {
            self.translator.to_logical(row)
        };
        self.hidden.contains(logical)
    }

    /// Hide rows given by external index. Already-hidden rows are no-ops.
    pub fn hide_rows(&mut self, rows: &[usize], host: &impl GridHost) {
        let row_count = host.row_count();
        for &row in rows {
            if row >= row_count {
                log::warn!("ignoring hide request for row {row}, table has {row_count}");
                continue;
            }
            self.hidden.insert(self.translator.to_logical(row));
        }
    }

    /// Show rows given by external index. Already-visible rows are no-ops.
    pub fn show_rows(&mut self, rows: &[usize], host: &impl GridHost) {
        let row_count = host.row_count();
        for &row in rows {
            if row >= row_count {
                log::warn!("ignoring show request for row {row}, table has {row_count}");
                continue;
            }
            self.hidden.remove(self.translator.to_logical(row));
        }
    }

    /// Hidden logical indices in ascending order.
    pub fn hidden_rows(&self) -> &[usize] {
        self.hidden.as_slice()
    }

    // -------------------------------------------------------------------------
    // Row-count change notifications
    // -------------------------------------------------------------------------

    pub fn on_rows_inserted(&mut self, at: usize, amount: usize) {
        self.hidden.shift_on_insert(at, amount);
    }

    pub fn on_rows_removed(&mut self, at: usize, amount: usize) {
        self.hidden.shift_on_remove(at, amount);
    }

    // -------------------------------------------------------------------------
    // Rendering and paste queries
    // -------------------------------------------------------------------------

    /// Height override: collapsed sentinel for hidden rows, input height
    /// otherwise.
    pub fn row_height(&self, height: f64, row: usize) -> f64 {
        if self.is_hidden(row, false) {
            COLLAPSED_ROW_HEIGHT
        } else {
            height
        }
    }

    /// Whether paste should skip this row. Only when copy/paste of hidden
    /// rows is disabled.
    pub fn skip_row_on_paste(&self, row: usize) -> bool {
        !self.settings.copy_paste_enabled && self.is_hidden(row, false)
    }

    /// Is the row directly below a hidden row? (indicator decoration)
    pub fn is_after_hidden(&self, row: usize) -> bool {
        row > 0 && self.is_hidden(row - 1, false)
    }

    /// Is the row directly above a hidden row? (indicator decoration)
    pub fn is_before_hidden(&self, row: usize) -> bool {
        self.is_hidden(row + 1, false)
    }

    /// Is every row above this one hidden? True for row 0. Marks the first
    /// visible row of the table for border styling.
    pub fn only_hidden_above(&self, row: usize) -> bool {
        (0..row).all(|above| self.is_hidden(above, false))
    }

    // -------------------------------------------------------------------------
    // Selection re-anchoring
    // -------------------------------------------------------------------------

    /// Re-anchor a header-originated selection start. See
    /// [`RangeNavigator::resolve_range_start_only`].
    pub fn resolve_range_start_only(&self, row: usize, host: &impl GridHost) -> usize {
        let hidden = &self.hidden;
        let translator = &self.translator;
        self.navigator.resolve_range_start_only(row, host.row_count(), |candidate| {
            hidden.contains(translator.to_logical(candidate))
        })
    }

    /// Re-anchor a cell-originated selection start. See
    /// [`RangeNavigator::resolve_range_start`].
    pub fn resolve_range_start(&mut self, row: usize, host: &impl GridHost) -> usize {
        let hidden = &self.hidden;
        let translator = &self.translator;
        let selection = host.selection_anchor().map(|coords| coords.row);
        self.navigator
            .resolve_range_start(row, host.row_count(), selection, |candidate| {
                hidden.contains(translator.to_logical(candidate))
            })
    }

    /// Re-anchor a selection end. See [`RangeNavigator::resolve_range_end`].
    pub fn resolve_range_end(&mut self, row: usize, host: &impl GridHost) -> usize {
        let hidden = &self.hidden;
        let translator = &self.translator;
        self.navigator
            .resolve_range_end(row, host.row_count(), |candidate| {
                hidden.contains(translator.to_logical(candidate))
            })
    }

    // -------------------------------------------------------------------------
    // Copy ranges
    // -------------------------------------------------------------------------

    /// Filter copy ranges down to visible rows.
    ///
    /// Active only when `copy_paste_enabled` is off; otherwise the input
    /// passes through so hidden rows still reach the clipboard.
    pub fn split_copy_ranges(&self, ranges: &[Range]) -> Vec<Range> {
        if self.settings.copy_paste_enabled {
            return ranges.to_vec();
        }
        copy_range::split_ranges(ranges, |row| self.is_hidden(row, false))
    }
}
