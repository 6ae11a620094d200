//! `gridveil-engine` — Row visibility engine for a tabular data grid.
//!
//! Lets a host grid hide arbitrary rows without touching the backing
//! dataset, and keeps row-indexed subsystems consistent with the hidden
//! set: selection endpoints are re-anchored onto visible rows, copy ranges
//! are split around hidden blocks, hidden indices track row insert/remove,
//! and rendering gets a collapsed-height sentinel.
//!
//! Pure engine crate: reads host state through [`visibility::GridHost`],
//! returns adjusted coordinates and ranges, never mutates grid data.

pub mod copy_range;
pub mod date_sort;
pub mod hidden_set;
pub mod navigate;
pub mod settings;
pub mod translate;
pub mod visibility;

#[cfg(test)]
pub mod harness;

pub use copy_range::split_ranges;
pub use date_sort::{date_sort, DateColumnMeta};
pub use hidden_set::HiddenSet;
pub use navigate::RangeNavigator;
pub use settings::HiddenRowsSettings;
pub use translate::IndexTranslator;
pub use visibility::{GridHost, RowVisibility, COLLAPSED_ROW_HEIGHT};
