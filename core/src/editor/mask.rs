use log::info;

use crate::error::{MammoeditError, Result};
use crate::grid::SampleGrid;
use crate::types::{PhotometricInterpretation, Point};

/// Masks everything outside a polygon region
///
/// Points are each clamped non-negative; a point exactly on the far grid
/// boundary (`x == columns` or `y == rows`) is tolerated, anything beyond is
/// an error. The polygon interior is rasterized with scanline fill sampled
/// at pixel centers, plus the outline cells so edge pixels are included.
/// Samples outside the coverage are replaced by the photometric
/// interpretation's clear value; dimensions are unchanged and the source
/// grid is left untouched.
///
/// # Errors
///
/// - `EmptyRegion` for fewer than 3 points
/// - `DimensionMismatch` for a point beyond the grid bounds
pub fn mask_polygon(
    grid: &SampleGrid,
    points: &[Point],
    photometric: PhotometricInterpretation,
) -> Result<SampleGrid> {
    if points.len() < 3 {
        return Err(MammoeditError::EmptyRegion(format!(
            "polygon needs at least 3 points, got {}",
            points.len()
        )));
    }

    let (rows, columns) = grid.dimensions();
    let clamped: Vec<Point> = points.iter().map(Point::clamp_non_negative).collect();
    for point in &clamped {
        if point.x as usize > columns || point.y as usize > rows {
            return Err(MammoeditError::DimensionMismatch(format!(
                "polygon point ({}, {}) lies outside the {}x{} grid",
                point.x, point.y, rows, columns
            )));
        }
    }

    let coverage = rasterize(&clamped, rows, columns);
    let clear = photometric.mask_clear_value();
    info!(
        "masking {}x{} grid outside a {}-point polygon (clear value {})",
        rows,
        columns,
        clamped.len(),
        clear
    );
    grid.replace_where(&coverage, clear)
}

/// Rasterizes the filled polygon into a per-pixel coverage mask
fn rasterize(points: &[Point], rows: usize, columns: usize) -> Vec<bool> {
    let mut coverage = vec![false; rows * columns];
    if coverage.is_empty() {
        return coverage;
    }
    scan_fill(points, rows, columns, &mut coverage);
    trace_outline(points, rows, columns, &mut coverage);
    coverage
}

/// Scanline fill sampled at pixel centers
///
/// For each row, edges crossing the horizontal line through the pixel
/// centers contribute intersection points; sorted pairwise they bound the
/// interior spans. Sampling at centers (y + 0.5) keeps integer-coordinate
/// vertices off the scanline, so no degenerate crossings arise.
fn scan_fill(points: &[Point], rows: usize, columns: usize, coverage: &mut [bool]) {
    let n = points.len();
    for row in 0..rows {
        let yc = row as f64 + 0.5;

        let mut crossings: Vec<f64> = Vec::new();
        for i in 0..n {
            let p = points[i];
            let q = points[(i + 1) % n];
            let (py, qy) = (p.y as f64, q.y as f64);
            if (py > yc) != (qy > yc) {
                let t = (yc - py) / (qy - py);
                crossings.push(p.x as f64 + t * (q.x as f64 - p.x as f64));
            }
        }
        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let start = (pair[0] - 0.5).ceil().max(0.0) as usize;
            let end = (pair[1] - 0.5).floor();
            if end < 0.0 {
                continue;
            }
            let end = (end as usize).min(columns - 1);
            for col in start..=end {
                coverage[row * columns + col] = true;
            }
        }
    }
}

/// Marks the cells along each polygon edge (Bresenham)
fn trace_outline(points: &[Point], rows: usize, columns: usize, coverage: &mut [bool]) {
    let n = points.len();
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];

        let (mut x0, mut y0) = (p.x as i64, p.y as i64);
        let (x1, y1) = (q.x as i64, q.y as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            // Points may legally sit on the far boundary; those cells are
            // outside the grid and simply not marked.
            if (x0 as usize) < columns && (y0 as usize) < rows {
                coverage[y0 as usize * columns + x0 as usize] = true;
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_grid(rows: usize, columns: usize) -> SampleGrid {
        let samples = (0..rows * columns).map(|i| i as i32 + 1).collect();
        SampleGrid::new(samples, rows, columns, 16).unwrap()
    }

    fn square(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
        vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    #[test]
    fn test_square_mask_coverage() {
        let grid = ramp_grid(10, 10);
        let masked = mask_polygon(
            &grid,
            &square(2, 2, 7, 7),
            PhotometricInterpretation::Monochrome2,
        )
        .unwrap();

        assert_eq!(masked.dimensions(), grid.dimensions());
        for row in 0..10 {
            for col in 0..10 {
                let inside = (2..=7).contains(&row) && (2..=7).contains(&col);
                let expected = if inside { grid.get(row, col).unwrap() } else { 0 };
                assert_eq!(
                    masked.get(row, col).unwrap(),
                    expected,
                    "cell ({}, {})",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_clear_value_follows_photometric() {
        let grid = ramp_grid(6, 6);
        let points = square(1, 1, 4, 4);

        let mono2 = mask_polygon(&grid, &points, PhotometricInterpretation::Monochrome2).unwrap();
        assert_eq!(mono2.get(5, 5), Some(0));

        let mono1 = mask_polygon(&grid, &points, PhotometricInterpretation::Monochrome1).unwrap();
        assert_eq!(mono1.get(5, 5), Some(-1));
    }

    #[test]
    fn test_triangle_interior_preserved() {
        let grid = ramp_grid(10, 10);
        let points = vec![Point::new(0, 0), Point::new(9, 0), Point::new(0, 9)];
        let masked =
            mask_polygon(&grid, &points, PhotometricInterpretation::Monochrome2).unwrap();

        // Strictly inside the triangle
        assert_eq!(masked.get(2, 2), grid.get(2, 2));
        // Strictly outside, far corner
        assert_eq!(masked.get(9, 9), Some(0));
        assert_eq!(masked.get(5, 9), Some(0));
    }

    #[test]
    fn test_too_few_points() {
        let grid = ramp_grid(4, 4);
        let points = vec![Point::new(0, 0), Point::new(3, 3)];
        assert!(matches!(
            mask_polygon(&grid, &points, PhotometricInterpretation::Monochrome2),
            Err(MammoeditError::EmptyRegion(_))
        ));
    }

    #[test]
    fn test_boundary_point_tolerated() {
        // Points exactly on the far boundary are legal; the whole grid is
        // covered, so nothing is cleared.
        let grid = ramp_grid(10, 10);
        let masked = mask_polygon(
            &grid,
            &square(0, 0, 10, 10),
            PhotometricInterpretation::Monochrome2,
        )
        .unwrap();
        assert_eq!(masked, grid);
    }

    #[test]
    fn test_point_beyond_boundary_errors() {
        let grid = ramp_grid(10, 10);
        assert!(matches!(
            mask_polygon(
                &grid,
                &square(0, 0, 11, 5),
                PhotometricInterpretation::Monochrome2
            ),
            Err(MammoeditError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_negative_points_clamped() {
        // (-5, -5) clamps to (0, 0), making this a legal square
        let grid = ramp_grid(8, 8);
        let masked = mask_polygon(
            &grid,
            &square(-5, -5, 4, 4),
            PhotometricInterpretation::Monochrome2,
        )
        .unwrap();
        assert_eq!(masked.get(2, 2), grid.get(2, 2));
        assert_eq!(masked.get(6, 6), Some(0));
    }

    #[test]
    fn test_source_untouched_on_failure() {
        let grid = ramp_grid(4, 4);
        let before = grid.clone();
        let _ = mask_polygon(
            &grid,
            &square(0, 0, 20, 20),
            PhotometricInterpretation::Monochrome2,
        );
        assert_eq!(grid, before);
    }
}
