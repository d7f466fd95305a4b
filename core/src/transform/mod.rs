//! Pixel transforms: window/level normalization and preview rendering

pub mod thumbnail;
pub mod window_level;

pub use thumbnail::{render_preview, Preview, THUMBNAIL_BOUND};
pub use window_level::{apply as apply_window_level, WindowedGrid};
