pub mod geometry;
pub mod locate;

pub use geometry::{ApertureGeometry, HotspotBounds};
pub use locate::locate;
