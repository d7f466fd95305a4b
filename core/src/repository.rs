use std::collections::HashMap;
use std::fmt;

use crate::grid::SampleGrid;
use crate::ordering::ImageDescriptor;
use crate::types::{PhotometricInterpretation, WindowSpec};

/// Opaque study identifier
///
/// The core never assumes a filesystem path convention; studies are keyed
/// by whatever identity the surrounding system hands out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct StudyId(String);

impl StudyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A decoded study image as supplied by the external decoder
///
/// This is the decoder boundary: the container format has already been
/// parsed elsewhere, and only the sample grid plus the handful of
/// attributes the pipeline needs arrive here.
#[derive(Debug, Clone)]
pub struct DecodedStudy {
    /// Source filename, carried through for display
    pub filename: String,

    /// Raw sample grid
    pub grid: SampleGrid,

    /// Display window, when the source carried one
    pub window: Option<WindowSpec>,

    /// Photometric interpretation of the samples
    pub photometric: PhotometricInterpretation,

    /// Raw laterality attribute, when present
    pub laterality: Option<String>,

    /// Raw view position attribute, when present
    pub view_position: Option<String>,
}

impl DecodedStudy {
    /// Builds the display descriptor for this study image
    pub fn descriptor(&self) -> ImageDescriptor {
        ImageDescriptor::new(
            self.filename.clone(),
            self.laterality.as_deref(),
            self.view_position.as_deref(),
        )
    }
}

/// Storage boundary for decoded studies
///
/// `insert` must hand back a fresh identity for every study it accepts —
/// derived images are always distinguishable from their sources. How the
/// identity is minted (UUID, content hash, counter) is the implementer's
/// concern, as is any re-serialization to the source format.
pub trait StudyRepository {
    /// Looks up a study by id
    fn get(&self, id: &StudyId) -> Option<&DecodedStudy>;

    /// Stores a study under a fresh identity and returns it
    fn insert(&mut self, study: DecodedStudy) -> StudyId;

    /// Removes a study, returning it if present
    fn remove(&mut self, id: &StudyId) -> Option<DecodedStudy>;

    /// All stored identities, in insertion order
    fn ids(&self) -> Vec<StudyId>;
}

/// In-memory repository backing tests and the CLI
#[derive(Debug, Default)]
pub struct InMemoryStudyRepository {
    next_id: u64,
    order: Vec<StudyId>,
    studies: HashMap<StudyId, DecodedStudy>,
}

impl InMemoryStudyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl StudyRepository for InMemoryStudyRepository {
    fn get(&self, id: &StudyId) -> Option<&DecodedStudy> {
        self.studies.get(id)
    }

    fn insert(&mut self, study: DecodedStudy) -> StudyId {
        let id = StudyId::new(format!("study-{:06}", self.next_id));
        self.next_id += 1;
        self.order.push(id.clone());
        self.studies.insert(id.clone(), study);
        id
    }

    fn remove(&mut self, id: &StudyId) -> Option<DecodedStudy> {
        self.order.retain(|stored| stored != id);
        self.studies.remove(id)
    }

    fn ids(&self) -> Vec<StudyId> {
        self.order.clone()
    }
}
