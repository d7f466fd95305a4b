use crate::grid::SampleGrid;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Display window for mapping raw samples to 8-bit grayscale
///
/// `width` must be positive for a meaningful mapping; a degenerate width is
/// handled by the transform's mid-gray default rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct WindowSpec {
    pub center: f64,
    pub width: f64,
}

impl WindowSpec {
    /// Creates a new WindowSpec
    pub fn new(center: f64, width: f64) -> Self {
        Self { center, width }
    }

    /// Derives a window from grid statistics
    ///
    /// Used when the source carries no window attributes:
    /// `center = mean(samples)`, `width = max - min`, floored at 1.0 so the
    /// width is never zero.
    pub fn derive(grid: &SampleGrid) -> Self {
        let (min_v, max_v) = grid.min_max().unwrap_or((0, 0));
        let width = ((max_v - min_v) as f64).max(1.0);
        Self {
            center: grid.mean(),
            width,
        }
    }

    /// Lower and upper bounds of the window range
    pub fn bounds(&self) -> (f64, f64) {
        let half = self.width / 2.0;
        (self.center - half, self.center + half)
    }

    /// Parses the first numeric value of a possibly multi-valued attribute
    ///
    /// Window attributes arrive as strings like "40", "40\\400",
    /// "[40, 400]" or exponential notation; the first value wins.
    pub fn parse_first(s: &str) -> Option<f64> {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"[-+]?\d*\.?\d+(?:[eE][-+]?\d+)?").expect("Failed to compile regex")
        });

        re.find(s).and_then(|m| m.as_str().parse::<f64>().ok())
    }

    /// Builds a window from raw center/width attribute strings
    ///
    /// Returns `None` when either attribute has no parseable value.
    pub fn from_attributes(center: &str, width: &str) -> Option<Self> {
        Some(Self {
            center: Self::parse_first(center)?,
            width: Self::parse_first(width)?,
        })
    }
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c={} w={}", self.center, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_from_grid() {
        let grid = SampleGrid::new(vec![10, 20, 30, 40], 2, 2, 16).unwrap();
        let window = WindowSpec::derive(&grid);
        assert_eq!(window.center, 25.0);
        assert_eq!(window.width, 30.0);
    }

    #[test]
    fn test_derive_floors_width() {
        // Uniform grid would otherwise derive a zero width
        let grid = SampleGrid::new(vec![7; 9], 3, 3, 8).unwrap();
        let window = WindowSpec::derive(&grid);
        assert_eq!(window.center, 7.0);
        assert_eq!(window.width, 1.0);
    }

    #[test]
    fn test_bounds() {
        let window = WindowSpec::new(100.0, 200.0);
        assert_eq!(window.bounds(), (0.0, 200.0));
    }

    #[test]
    fn test_parse_first_single_value() {
        assert_eq!(WindowSpec::parse_first("40"), Some(40.0));
        assert_eq!(WindowSpec::parse_first(" 2048.5 "), Some(2048.5));
    }

    #[test]
    fn test_parse_first_multi_valued() {
        assert_eq!(WindowSpec::parse_first("40\\400"), Some(40.0));
        assert_eq!(WindowSpec::parse_first("[40, 400]"), Some(40.0));
    }

    #[test]
    fn test_parse_first_exponential() {
        assert_eq!(WindowSpec::parse_first("1.5e+2"), Some(150.0));
    }

    #[test]
    fn test_parse_first_invalid() {
        assert_eq!(WindowSpec::parse_first(""), None);
        assert_eq!(WindowSpec::parse_first("invalid"), None);
    }

    #[test]
    fn test_from_attributes() {
        let window = WindowSpec::from_attributes("40\\80", "400").unwrap();
        assert_eq!(window.center, 40.0);
        assert_eq!(window.width, 400.0);

        assert!(WindowSpec::from_attributes("", "400").is_none());
    }
}
