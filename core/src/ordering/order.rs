use crate::ordering::descriptor::ImageDescriptor;

/// Sorts study images into the canonical clinical presentation order
///
/// R-CC, L-CC, R-MLO, L-MLO, then everything else. The sort is stable, so
/// unranked images (including those labeled "Unknown") keep their original
/// encounter order — never alphabetical.
pub fn sort_for_display(descriptors: &mut [ImageDescriptor]) {
    descriptors.sort_by_key(|descriptor| descriptor.display_rank());
}
