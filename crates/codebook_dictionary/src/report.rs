//! Load reports.

use codebook_foundation::LoadWarning;

/// Summary of a dictionary load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Meaningful lines compiled (blank and comment lines excluded).
    pub lines: usize,
    /// Warnings recorded while loading. Only filled in strict mode.
    pub warnings: Vec<LoadWarning>,
}

impl LoadReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no warnings were recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Folds another report into this one.
    pub fn merge(&mut self, other: LoadReport) {
        self.lines += other.lines;
        self.warnings.extend(other.warnings);
    }

    /// Logs a warning and records it when `strict` is set.
    pub(crate) fn warn(&mut self, warning: LoadWarning, strict: bool) {
        if strict {
            tracing::warn!(%warning, "dictionary warning");
            self.warnings.push(warning);
        } else {
            tracing::debug!(%warning, "dictionary warning ignored");
        }
    }
}
