pub mod api;
pub mod classify;
pub mod cli;
pub mod editor;
pub mod error;
pub mod grid;
pub mod ordering;
pub mod repository;
pub mod transform;
pub mod types;

pub use api::{edit_study, EditOutcome, StudyEditor};
pub use error::{MammoeditError, Result};
pub use grid::SampleGrid;
pub use ordering::{sort_for_display, ImageDescriptor};
pub use repository::{DecodedStudy, InMemoryStudyRepository, StudyId, StudyRepository};
pub use transform::{render_preview, Preview, WindowedGrid, THUMBNAIL_BOUND};
pub use types::*;
