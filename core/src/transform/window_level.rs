use crate::grid::SampleGrid;
use crate::types::WindowSpec;

/// Mid-gray fill used when the window range is degenerate
const MID_GRAY: i32 = 128;

/// Inversion threshold on the rescaled 8-bit mean
const INVERSION_MEAN: f64 = 127.0;

/// Result of window/level normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowedGrid {
    /// 8-bit normalized grid
    pub grid: SampleGrid,
    /// Whether the inversion heuristic flipped the output
    pub was_inverted: bool,
}

/// Maps a raw sample grid to an 8-bit displayable grid
///
/// Steps, in order, each pure:
/// 1. Clip every sample to `[center - width/2, center + width/2]`.
/// 2. Rescale the window range linearly to `[0, 255]`, truncating to
///    integer. A degenerate window (upper bound == lower bound) yields a
///    uniform mid-gray grid instead of dividing by zero.
/// 3. If the mean of the rescaled grid exceeds 127, invert every sample.
///    The heuristic runs on the already-rescaled 8-bit grid, not the raw
///    samples, so it tracks what a viewer would actually display.
pub fn apply(grid: &SampleGrid, window: &WindowSpec) -> WindowedGrid {
    let (lo, hi) = window.bounds();
    let span = hi - lo;

    if span <= 0.0 {
        let samples = vec![MID_GRAY; grid.len()];
        let grid = SampleGrid::new(samples, grid.rows(), grid.columns(), 8)
            .expect("dimensions unchanged");
        return WindowedGrid {
            grid,
            was_inverted: false,
        };
    }

    let rescaled: Vec<i32> = grid
        .samples()
        .iter()
        .map(|&sample| {
            let clipped = (sample as f64).clamp(lo, hi);
            ((clipped - lo) * 255.0 / span) as i32
        })
        .collect();

    let count = rescaled.len().max(1);
    let mean = rescaled.iter().map(|&v| v as i64).sum::<i64>() as f64 / count as f64;
    let was_inverted = mean > INVERSION_MEAN;

    let samples = if was_inverted {
        rescaled.into_iter().map(|v| 255 - v).collect()
    } else {
        rescaled
    };

    let grid =
        SampleGrid::new(samples, grid.rows(), grid.columns(), 8).expect("dimensions unchanged");
    WindowedGrid { grid, was_inverted }
}
