// Plugin settings
// Deserialized from the host grid's configuration blob

use serde::{Deserialize, Serialize};

/// Recognized hidden-rows options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiddenRowsSettings {
    /// When false, hidden rows are excluded from copy output and skipped
    /// on paste.
    pub copy_paste_enabled: bool,

    /// Initial hidden set, in the host's external index space.
    pub rows: Vec<usize>,

    /// Draw hidden-row indicators on neighboring headers. Cosmetic; the
    /// engine only answers the neighbor queries behind it.
    pub indicators: bool,
}

impl Default for HiddenRowsSettings {
    fn default() -> Self {
        Self {
            copy_paste_enabled: true,
            rows: Vec::new(),
            indicators: false,
        }
    }
}
