use crate::ordering::ImageDescriptor;
use std::fmt;

/// Text report for an ordered set of study images
pub struct TextReport<'a> {
    descriptors: &'a [ImageDescriptor],
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(descriptors: &'a [ImageDescriptor]) -> Self {
        Self { descriptors }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Display Order")?;
        writeln!(f, "=============")?;
        writeln!(f)?;

        for (position, descriptor) in self.descriptors.iter().enumerate() {
            writeln!(
                f,
                "{}. {:<10} {}",
                position + 1,
                descriptor.canonical_label(),
                descriptor.filename
            )?;
        }

        Ok(())
    }
}
