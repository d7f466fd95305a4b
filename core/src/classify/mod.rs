//! Metadata classification for display ordering
//!
//! Normalizes the laterality and view-position attributes supplied by the
//! external decoder into canonical enums and the combined [`ViewLabel`].

pub mod laterality;
pub mod view_position;

pub use laterality::classify_laterality;
pub use view_position::classify_view_position;

use crate::types::ViewLabel;

/// Builds the combined view label from raw attribute values
pub fn classify_label(laterality: Option<&str>, view_position: Option<&str>) -> ViewLabel {
    ViewLabel::new(
        classify_laterality(laterality),
        classify_view_position(view_position),
    )
}
