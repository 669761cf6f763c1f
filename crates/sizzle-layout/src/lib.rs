//! Resolves abstract layout templates (`hero-center`, `split-panel`,
//! `masonry-grid`, `full-bleed`, `device-mockup`) plus their config and the
//! canvas size into pixel-slot rectangles (spec §4.3).

pub mod config;
pub mod error;
pub mod resolve;

pub use error::LayoutError;
pub use resolve::resolve_layout;
