//! Destructive region edits over a raw sample grid
//!
//! Both operations produce a brand-new grid; a failed edit leaves the
//! source untouched. The orchestration layer regenerates the preview after
//! every successful edit.

pub mod crop;
pub mod mask;

pub use crop::crop;
pub use mask::mask_polygon;

use crate::error::Result;
use crate::grid::SampleGrid;
use crate::types::{PhotometricInterpretation, RegionRequest};

/// Applies a region edit, dispatching on the request variant
pub fn apply_region(
    grid: &SampleGrid,
    request: &RegionRequest,
    photometric: PhotometricInterpretation,
) -> Result<SampleGrid> {
    match request {
        RegionRequest::Rectangle(rect) => crop(grid, rect),
        RegionRequest::Polygon { points } => mask_polygon(grid, points, photometric),
    }
}
