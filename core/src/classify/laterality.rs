use crate::types::Laterality;

/// Classifies the laterality attribute of a decoded image
///
/// The decoder hands over the raw attribute value when present; absent or
/// blank values map to `Unknown`. Resolution happens once at decode time —
/// downstream code works with the enum, never the raw string.
pub fn classify_laterality(value: Option<&str>) -> Laterality {
    match value {
        Some(s) if !s.trim().is_empty() => Laterality::from_str(s),
        _ => Laterality::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_present_values() {
        assert_eq!(classify_laterality(Some("R")), Laterality::Right);
        assert_eq!(classify_laterality(Some("L")), Laterality::Left);
        assert_eq!(classify_laterality(Some(" right ")), Laterality::Right);
    }

    #[test]
    fn test_classify_absent_or_blank() {
        assert_eq!(classify_laterality(None), Laterality::Unknown);
        assert_eq!(classify_laterality(Some("")), Laterality::Unknown);
        assert_eq!(classify_laterality(Some("   ")), Laterality::Unknown);
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(classify_laterality(Some("BOTH")), Laterality::Unknown);
    }
}
