use crate::classify;
use crate::types::ViewLabel;

/// Descriptor for one decoded study image
///
/// Built once when the study is decoded and used only for display
/// ordering; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ImageDescriptor {
    /// Source filename the preview links back to
    pub filename: String,

    /// Classified view label
    pub label: ViewLabel,
}

impl ImageDescriptor {
    /// Builds a descriptor from raw decoder attributes
    pub fn new(
        filename: impl Into<String>,
        laterality: Option<&str>,
        view_position: Option<&str>,
    ) -> Self {
        Self {
            filename: filename.into(),
            label: classify::classify_label(laterality, view_position),
        }
    }

    /// Canonical display label ("R-CC", ... or "Unknown")
    pub fn canonical_label(&self) -> String {
        self.label.canonical()
    }

    /// Rank in the four-view presentation order
    pub fn display_rank(&self) -> usize {
        self.label.display_rank()
    }
}
