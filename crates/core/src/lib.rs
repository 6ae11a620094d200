//! `gridveil-core` — Shared plain types for the gridveil engine.
//!
//! Pure data crate: coordinates, ranges, sort order. No behavior beyond
//! construction helpers and invariant checks.

pub mod range;
pub mod sort;

pub use range::{CellCoords, Range};
pub use sort::SortOrder;
