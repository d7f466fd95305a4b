//! Display ordering of classified study images

pub mod descriptor;
pub mod order;

pub use descriptor::ImageDescriptor;
pub use order::sort_for_display;
