//! Region geometry for destructive edit requests
//!
//! Requests arrive from the edit UI with untrusted coordinates; everything
//! here is clamped before the editor touches pixel data.

use std::fmt;

/// A vertex of a polygon region, in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamps both coordinates to be non-negative
    pub fn clamp_non_negative(&self) -> Point {
        Point {
            x: self.x.max(0),
            y: self.y.max(0),
        }
    }
}

/// A rectangle as supplied by the client, before clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clamps this rectangle into a grid of the given extent
    ///
    /// Coordinates are clamped non-negative and the extents are clamped so
    /// the region never exceeds the grid: `width = min(columns - x, width)`,
    /// same for height. Clamping is idempotent. A rectangle entirely
    /// outside the grid clamps to zero extent.
    pub fn clamp_to(&self, columns: usize, rows: usize) -> ClampedRect {
        let x = (self.x.max(0) as usize).min(columns);
        let y = (self.y.max(0) as usize).min(rows);
        let width = (self.width.max(0) as usize).min(columns - x);
        let height = (self.height.max(0) as usize).min(rows - y);
        ClampedRect {
            x,
            y,
            width,
            height,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}

/// A rectangle known to lie within grid bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl ClampedRect {
    /// Returns whether the clamped region has zero extent
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A destructive edit region: rectangle crop or polygon mask
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum RegionRequest {
    Rectangle(Rect),
    Polygon { points: Vec<Point> },
}

impl RegionRequest {
    /// Convenience constructor for a rectangular crop request
    pub fn rectangle(x: i32, y: i32, width: i32, height: i32) -> Self {
        RegionRequest::Rectangle(Rect::new(x, y, width, height))
    }

    /// Convenience constructor for a polygon mask request
    pub fn polygon<I: IntoIterator<Item = (i32, i32)>>(points: I) -> Self {
        RegionRequest::Polygon {
            points: points.into_iter().map(|(x, y)| Point::new(x, y)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_is_identity() {
        let rect = Rect::new(2, 3, 4, 5);
        let clamped = rect.clamp_to(10, 10);
        assert_eq!(
            clamped,
            ClampedRect {
                x: 2,
                y: 3,
                width: 4,
                height: 5
            }
        );
        assert!(!clamped.is_empty());
    }

    #[test]
    fn test_clamp_negative_origin() {
        let rect = Rect::new(-5, -2, 8, 8);
        let clamped = rect.clamp_to(10, 10);
        assert_eq!(clamped.x, 0);
        assert_eq!(clamped.y, 0);
        assert_eq!(clamped.width, 8);
        assert_eq!(clamped.height, 8);
    }

    #[test]
    fn test_clamp_extent_to_grid() {
        let rect = Rect::new(6, 7, 100, 100);
        let clamped = rect.clamp_to(10, 10);
        assert_eq!(clamped.width, 4);
        assert_eq!(clamped.height, 3);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let rect = Rect::new(-3, 4, 50, 50);
        let once = rect.clamp_to(12, 9);
        let again = Rect::new(
            once.x as i32,
            once.y as i32,
            once.width as i32,
            once.height as i32,
        )
        .clamp_to(12, 9);
        assert_eq!(once, again);
    }

    #[test]
    fn test_clamp_outside_grid_is_empty() {
        let rect = Rect::new(20, 20, 5, 5);
        let clamped = rect.clamp_to(10, 10);
        assert!(clamped.is_empty());

        let rect = Rect::new(2, 2, 0, 5);
        assert!(rect.clamp_to(10, 10).is_empty());

        let rect = Rect::new(2, 2, -4, 5);
        assert!(rect.clamp_to(10, 10).is_empty());
    }

    #[test]
    fn test_point_clamp_non_negative() {
        assert_eq!(Point::new(-3, 7).clamp_non_negative(), Point::new(0, 7));
        assert_eq!(Point::new(3, -7).clamp_non_negative(), Point::new(3, 0));
        assert_eq!(Point::new(3, 7).clamp_non_negative(), Point::new(3, 7));
    }
}
