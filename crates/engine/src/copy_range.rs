//! Copy range splitting.
//!
//! Copying a selection that spans hidden rows must not copy the hidden
//! rows, so each contiguous input range is split into the maximal runs of
//! visible rows. Column bounds carry over unchanged onto every emitted
//! sub-range.

use gridveil_core::Range;

/// Split ranges into maximal visible-only sub-ranges.
///
/// Emitted sub-ranges are ordered by ascending `start_row`, pairwise
/// non-overlapping, contain no hidden row, and row-wise union exactly to
/// the visible rows of the inputs.
pub fn split_ranges<F>(ranges: &[Range], is_hidden: F) -> Vec<Range>
where
    F: Fn(usize) -> bool,
{
    let mut out = Vec::new();

    for range in ranges {
        // Run tracker: starts as if inside a hidden run so the first
        // visible row opens a sub-range.
        let mut in_hidden_run = true;
        let mut run_start = range.start_row;

        for row in range.rows() {
            if is_hidden(row) {
                if !in_hidden_run {
                    out.push(range.with_rows(run_start, row - 1));
                }
                in_hidden_run = true;
            } else {
                if in_hidden_run {
                    run_start = row;
                }
                if row == range.end_row {
                    out.push(range.with_rows(run_start, row));
                }
                in_hidden_run = false;
            }
        }
    }

    out
}
