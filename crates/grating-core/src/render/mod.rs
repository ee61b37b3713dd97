pub mod chart;
pub mod overlay;

pub use chart::{render_chart, wavelength_to_color};
pub use overlay::draw_overlay;
