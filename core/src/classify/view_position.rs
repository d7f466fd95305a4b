use crate::types::ViewPosition;

/// Classifies the view position attribute of a decoded image
///
/// Accepts the standard codes ("CC", "MLO", ...) and the descriptive names
/// used by view code sequences; absent, blank or unrecognized values map to
/// `Unknown`.
pub fn classify_view_position(value: Option<&str>) -> ViewPosition {
    match value {
        Some(s) if !s.trim().is_empty() => ViewPosition::from_str(s),
        _ => ViewPosition::Unknown,
    }
}
