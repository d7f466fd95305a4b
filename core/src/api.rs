use log::info;

use crate::editor;
use crate::error::{MammoeditError, Result};
use crate::repository::{DecodedStudy, StudyId, StudyRepository};
use crate::transform::{render_preview, Preview};
use crate::types::RegionRequest;

/// Outcome of a successful destructive edit
///
/// Carries the derived study (awaiting a fresh identity from the
/// repository) together with its regenerated preview.
#[derive(Debug)]
pub struct EditOutcome {
    pub study: DecodedStudy,
    pub preview: Preview,
}

/// High-level edit pipeline over decoded studies
///
/// Every operation is a pure function over immutable inputs; nothing here
/// blocks or retries. The one invariant the surrounding system must uphold
/// is at most one in-flight edit per source study at a time — an edit reads
/// and then independently supersedes the same identity, and concurrent
/// edits of one study are a race the core does not arbitrate.
pub struct StudyEditor;

impl StudyEditor {
    /// Renders the display preview for a decoded study
    ///
    /// Derives a window from grid statistics when the source carries none.
    pub fn preview(study: &DecodedStudy) -> Result<Preview> {
        render_preview(&study.grid, study.window.as_ref())
    }

    /// Applies a destructive region edit to a study
    ///
    /// A rectangle crop replaces the study dimensions; a polygon mask keeps
    /// them and clears everything outside the region. On success the
    /// preview is regenerated from the derived grid — a documented side
    /// effect of every edit. On failure the source study is untouched.
    pub fn apply(study: &DecodedStudy, request: &RegionRequest) -> Result<EditOutcome> {
        let grid = editor::apply_region(&study.grid, request, study.photometric)?;

        let mut derived = study.clone();
        derived.grid = grid;

        let preview = render_preview(&derived.grid, derived.window.as_ref())?;
        Ok(EditOutcome {
            study: derived,
            preview,
        })
    }
}

/// Edits a stored study, inserting the derived image under a fresh identity
///
/// The original study is retained as-is; whether to discard it afterwards
/// is the caller's decision.
///
/// # Errors
///
/// Returns `StudyNotFound` for an unknown id, or any edit failure; a failed
/// edit leaves the repository unchanged.
pub fn edit_study<R: StudyRepository>(
    repo: &mut R,
    id: &StudyId,
    request: &RegionRequest,
) -> Result<(StudyId, Preview)> {
    let study = repo
        .get(id)
        .ok_or_else(|| MammoeditError::StudyNotFound(id.to_string()))?;

    let outcome = StudyEditor::apply(study, request)?;
    let derived_id = repo.insert(outcome.study);
    info!("edit of {} derived {}", id, derived_id);
    Ok((derived_id, outcome.preview))
}
