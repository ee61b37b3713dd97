use serde::{Deserialize, Serialize};

use crate::error::{GratingError, Result};

/// Raw hotspot bounds found by the locator, in pixel coordinates.
///
/// `left`/`right` are the first below-threshold columns on the image's
/// horizontal midline; `top`/`bottom` are the last in-threshold rows seen in
/// the aperture's center column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotspotBounds {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

/// Location and extent of the zero-order hotspot.
///
/// Computed once per image by [`locate`](super::locate) and never mutated.
/// A zero `peak_luminance` means no hotspot was found; check with
/// [`validate`](Self::validate) before scanning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApertureGeometry {
    pub center_x: u32,
    pub center_y: u32,
    /// Vertical extent after the height-reduction shrink.
    pub height: u32,
    pub peak_luminance: u32,
    /// Column of the first peak on the horizontal midline.
    pub brightest_x: u32,
    /// Minimum luminance still considered inside the hotspot.
    pub threshold: u32,
    pub bounds: HotspotBounds,
}

impl ApertureGeometry {
    pub fn is_detected(&self) -> bool {
        self.peak_luminance > 0
    }

    pub fn half_height(&self) -> f64 {
        self.height as f64 / 2.0
    }

    /// Turn the soft-failure cases into errors.
    pub fn validate(&self) -> Result<()> {
        if !self.is_detected() {
            return Err(GratingError::NoHotspot);
        }
        if self.height == 0 {
            return Err(GratingError::DegenerateAperture {
                center_x: self.center_x,
                center_y: self.center_y,
                height: self.height,
            });
        }
        Ok(())
    }
}
