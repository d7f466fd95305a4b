use super::{Laterality, ViewPosition};
use std::fmt;

/// Sentinel label for images whose metadata is not clinically meaningful
pub const UNKNOWN_LABEL: &str = "Unknown";

/// View label combining laterality and view position
///
/// Drives the canonical display label ("R-CC", "L-MLO", ...) and the
/// four-view presentation ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ViewLabel {
    pub laterality: Laterality,
    pub view: ViewPosition,
}

impl ViewLabel {
    /// Creates a new ViewLabel
    pub fn new(laterality: Laterality, view: ViewPosition) -> Self {
        Self { laterality, view }
    }

    /// Returns whether both sides of the label are known
    pub fn is_known(&self) -> bool {
        !self.laterality.is_unknown() && !self.view.is_unknown()
    }

    /// Canonical display label
    ///
    /// `"{laterality}-{view}"` when both fields are known; the single
    /// sentinel `"Unknown"` otherwise. Partial metadata never yields a
    /// partial label such as "R-Unknown".
    pub fn canonical(&self) -> String {
        if self.is_known() {
            format!("{}-{}", self.laterality.code(), self.view.code())
        } else {
            UNKNOWN_LABEL.to_string()
        }
    }

    /// Rank of this label in the canonical presentation order
    ///
    /// R-CC, L-CC, R-MLO and L-MLO rank 0..=3; every other label
    /// (including Unknown) ranks after all four.
    pub fn display_rank(&self) -> usize {
        DISPLAY_ORDER
            .iter()
            .position(|label| label == self)
            .unwrap_or(DISPLAY_ORDER.len())
    }
}

impl fmt::Display for ViewLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

/// Canonical four-view presentation order for a bilateral study
pub const DISPLAY_ORDER: [ViewLabel; 4] = [
    ViewLabel {
        laterality: Laterality::Right,
        view: ViewPosition::Cc,
    },
    ViewLabel {
        laterality: Laterality::Left,
        view: ViewPosition::Cc,
    },
    ViewLabel {
        laterality: Laterality::Right,
        view: ViewPosition::Mlo,
    },
    ViewLabel {
        laterality: Laterality::Left,
        view: ViewPosition::Mlo,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_label() {
        let label = ViewLabel::new(Laterality::Right, ViewPosition::Cc);
        assert_eq!(label.canonical(), "R-CC");

        let label = ViewLabel::new(Laterality::Left, ViewPosition::Mlo);
        assert_eq!(label.canonical(), "L-MLO");
    }

    #[test]
    fn test_partial_metadata_collapses_to_unknown() {
        let label = ViewLabel::new(Laterality::Right, ViewPosition::Unknown);
        assert_eq!(label.canonical(), UNKNOWN_LABEL);

        let label = ViewLabel::new(Laterality::Unknown, ViewPosition::Cc);
        assert_eq!(label.canonical(), UNKNOWN_LABEL);

        let label = ViewLabel::new(Laterality::Unknown, ViewPosition::Unknown);
        assert_eq!(label.canonical(), UNKNOWN_LABEL);
    }

    #[test]
    fn test_display_rank_table() {
        assert_eq!(
            ViewLabel::new(Laterality::Right, ViewPosition::Cc).display_rank(),
            0
        );
        assert_eq!(
            ViewLabel::new(Laterality::Left, ViewPosition::Cc).display_rank(),
            1
        );
        assert_eq!(
            ViewLabel::new(Laterality::Right, ViewPosition::Mlo).display_rank(),
            2
        );
        assert_eq!(
            ViewLabel::new(Laterality::Left, ViewPosition::Mlo).display_rank(),
            3
        );
    }

    #[test]
    fn test_unranked_labels_sort_last() {
        let unknown = ViewLabel::new(Laterality::Unknown, ViewPosition::Unknown);
        assert_eq!(unknown.display_rank(), 4);

        // Non-standard views are never in the rank table
        let r_ml = ViewLabel::new(Laterality::Right, ViewPosition::Ml);
        assert_eq!(r_ml.display_rank(), 4);
    }
}
