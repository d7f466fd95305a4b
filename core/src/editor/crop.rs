use log::info;

use crate::error::{MammoeditError, Result};
use crate::grid::SampleGrid;
use crate::types::Rect;

/// Destructively crops a rectangular region out of a grid
///
/// The rectangle is clamped into the grid first, then the sub-region
/// `[y, y+height) x [x, x+width)` is extracted into a brand-new grid whose
/// `rows = height` and `columns = width`. This is a true crop — the derived
/// study takes the new dimensions — and samples are copied exactly, never
/// resampled. The source grid is left untouched.
///
/// # Errors
///
/// Returns `EmptyRegion` if the clamped width or height is zero.
pub fn crop(grid: &SampleGrid, rect: &Rect) -> Result<SampleGrid> {
    let (rows, columns) = grid.dimensions();
    let clamped = rect.clamp_to(columns, rows);
    if clamped.is_empty() {
        return Err(MammoeditError::EmptyRegion(format!(
            "rectangle {} clamps to zero extent in a {}x{} grid",
            rect, rows, columns
        )));
    }

    info!(
        "cropping {}x{} grid to {}x{} at ({}, {})",
        rows, columns, clamped.height, clamped.width, clamped.x, clamped.y
    );
    grid.sub_grid(clamped.x, clamped.y, clamped.width, clamped.height)
}
