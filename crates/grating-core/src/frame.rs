use image::RgbImage;
use ndarray::Array3;

/// Read-only access to an 8-bit RGB raster.
///
/// Coordinates are `(x, y)` with `0 <= x < width()` and `0 <= y < height()`.
/// Callers stay inside those bounds; implementations may panic otherwise.
pub trait PixelSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Channel intensities `[r, g, b]` at `(x, y)`.
    fn rgb(&self, x: u32, y: u32) -> [u8; 3];

    /// Additive brightness proxy `r + g + b`, in `[0, 765]`.
    fn luminance(&self, x: u32, y: u32) -> u32 {
        let [r, g, b] = self.rgb(x, y);
        r as u32 + g as u32 + b as u32
    }

    /// Horizontal midpoint, `width / 2`.
    fn midpoint_x(&self) -> u32 {
        self.width() / 2
    }

    /// Vertical midpoint, `height / 2`.
    fn midpoint_y(&self) -> u32 {
        self.height() / 2
    }

    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width() as i64 && y < self.height() as i64
    }
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).0
    }
}

/// Row-major `(height, width, 3)` array of RGB bytes.
impl PixelSource for Array3<u8> {
    fn width(&self) -> u32 {
        self.dim().1 as u32
    }

    fn height(&self) -> u32 {
        self.dim().0 as u32
    }

    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let (row, col) = (y as usize, x as usize);
        [
            self[[row, col, 0]],
            self[[row, col, 1]],
            self[[row, col, 2]],
        ]
    }
}
