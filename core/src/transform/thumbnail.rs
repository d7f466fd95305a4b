use std::io::Cursor;
use std::path::Path;

use image::{imageops, GrayImage, ImageFormat};
use log::debug;

use crate::error::{MammoeditError, Result};
use crate::grid::SampleGrid;
use crate::transform::window_level;
use crate::types::WindowSpec;

/// Bounding box for generated previews
pub const THUMBNAIL_BOUND: u32 = 200;

/// An encoded-ready 8-bit grayscale preview
#[derive(Debug, Clone)]
pub struct Preview {
    pub image: GrayImage,
    /// Whether the window/level stage flipped the image
    pub was_inverted: bool,
}

impl Preview {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Encodes the preview as PNG bytes
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.image.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// Writes the preview to disk, format chosen by file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }
}

/// Renders a bounded preview of a decoded grid
///
/// Runs window/level normalization (deriving a window from grid statistics
/// when none is supplied), then shrinks the result to fit within
/// [`THUMBNAIL_BOUND`] on both axes while preserving aspect ratio. Images
/// already inside the bound are never upscaled.
pub fn render_preview(grid: &SampleGrid, window: Option<&WindowSpec>) -> Result<Preview> {
    if grid.is_empty() {
        return Err(MammoeditError::EncodingError(
            "cannot render a preview of an empty grid".to_string(),
        ));
    }

    let derived;
    let window = match window {
        Some(w) => w,
        None => {
            derived = WindowSpec::derive(grid);
            &derived
        }
    };

    let windowed = window_level::apply(grid, window);
    let (rows, columns) = windowed.grid.dimensions();

    let bytes: Vec<u8> = windowed
        .grid
        .samples()
        .iter()
        .map(|&v| v.clamp(0, 255) as u8)
        .collect();
    let full = GrayImage::from_raw(columns as u32, rows as u32, bytes).ok_or_else(|| {
        MammoeditError::EncodingError("sample buffer does not match grid dimensions".to_string())
    })?;

    let (target_w, target_h) = fit_within(columns as u32, rows as u32, THUMBNAIL_BOUND);
    let image = if (target_w, target_h) == (columns as u32, rows as u32) {
        full
    } else {
        debug!(
            "downscaling preview {}x{} -> {}x{}",
            columns, rows, target_w, target_h
        );
        imageops::thumbnail(&full, target_w, target_h)
    };

    Ok(Preview {
        image,
        was_inverted: windowed.was_inverted,
    })
}

/// Shrink-to-fit dimensions within a square bound, never upscaling
fn fit_within(width: u32, height: u32, bound: u32) -> (u32, u32) {
    if width <= bound && height <= bound {
        return (width, height);
    }
    let scale = (bound as f64 / width as f64).min(bound as f64 / height as f64);
    let w = ((width as f64 * scale).round() as u32).clamp(1, bound);
    let h = ((height as f64 * scale).round() as u32).clamp(1, bound);
    (w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_grid(rows: usize, columns: usize) -> SampleGrid {
        let samples = (0..rows * columns).map(|i| i as i32).collect();
        SampleGrid::new(samples, rows, columns, 16).unwrap()
    }

    #[test]
    fn test_fit_within_never_upscales() {
        assert_eq!(fit_within(100, 80, 200), (100, 80));
        assert_eq!(fit_within(200, 200, 200), (200, 200));
    }

    #[test]
    fn test_fit_within_preserves_aspect() {
        assert_eq!(fit_within(400, 100, 200), (200, 50));
        assert_eq!(fit_within(100, 400, 200), (50, 200));
        assert_eq!(fit_within(1000, 1000, 200), (200, 200));
    }

    #[test]
    fn test_render_preview_small_grid_keeps_dimensions() {
        let grid = ramp_grid(10, 10);
        let preview = render_preview(&grid, None).unwrap();
        assert_eq!(preview.width(), 10);
        assert_eq!(preview.height(), 10);
    }

    #[test]
    fn test_render_preview_downscales_large_grid() {
        let grid = ramp_grid(400, 100);
        let preview = render_preview(&grid, None).unwrap();
        assert_eq!(preview.height(), 200);
        assert_eq!(preview.width(), 50);
    }

    #[test]
    fn test_render_preview_empty_grid_errors() {
        let grid = SampleGrid::new(vec![], 0, 0, 8).unwrap();
        assert!(render_preview(&grid, None).is_err());
    }

    #[test]
    fn test_encode_png_magic() {
        let grid = ramp_grid(4, 4);
        let preview = render_preview(&grid, None).unwrap();
        let bytes = preview.encode_png().unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_save_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.png");

        let grid = ramp_grid(8, 8);
        let preview = render_preview(&grid, None).unwrap();
        preview.save(&path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
}
