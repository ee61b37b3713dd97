/// Maximum additive luminance of an 8-bit RGB pixel (255 * 3).
pub const MAX_LUMINANCE: u32 = 765;

/// Fraction of the peak luminance a pixel must reach to count as part of the hotspot.
pub const DEFAULT_DIMMING_CONSTANT: f64 = 0.9;

/// Shrink factor applied to the measured hotspot height so the scan window
/// stays clear of the hotspot's noisy edges.
pub const DEFAULT_HEIGHT_REDUCTION: f64 = 0.9;

/// Consecutive below-threshold pixels tolerated by the vertical bound search.
pub const DEFAULT_MAX_GAP_HEIGHT: u32 = 64;

/// Nanometers per pixel of horizontal offset for a 1000 lines/mm grating.
pub const DEFAULT_WAVELENGTH_SCALE: f64 = 0.892;

/// Tilt of the spectrum on the sensor, in radians.
pub const DEFAULT_SCAN_ANGLE: f64 = 0.03;

/// Shortest wavelength (nm) the optics are calibrated for.
pub const DEFAULT_MIN_WAVELENGTH: f64 = 380.0;

/// Longest wavelength (nm) the optics are calibrated for.
pub const DEFAULT_MAX_WAVELENGTH: f64 = 1000.0;

/// Fraction of the distance to the aperture that is scanned. The remainder
/// sits too close to the hotspot to hold usable spectrum.
pub const DEFAULT_SCAN_FRACTION: f64 = 7.0 / 8.0;

/// Wavelength (nm) at which the linear grating efficiency curve equals 1.0.
pub const DEFAULT_EFFICIENCY_ORIGIN: f64 = 250.0;

/// Span (nm) over which grating efficiency falls from 1.0 to 0.0.
pub const DEFAULT_EFFICIENCY_SPAN: f64 = 800.0;

/// Lower clamp on grating efficiency.
pub const DEFAULT_EFFICIENCY_FLOOR: f64 = 0.3;

/// Center (nm) of the yellow dip notch.
pub const YELLOW_NOTCH_CENTER: f64 = 575.0;

/// Center (nm) of the orange rise notch.
pub const ORANGE_NOTCH_CENTER: f64 = 588.0;

/// Half-width (nm) of both efficiency notches.
pub const NOTCH_HALF_WIDTH: f64 = 10.0;

/// Peak relative strength of both efficiency notches.
pub const NOTCH_STRENGTH: f64 = 0.1;

/// Rows at either edge of the integration window that are down-weighted.
pub const DEFAULT_EDGE_ROWS: f64 = 2.0;

/// Weight applied to edge rows of the integration window.
pub const DEFAULT_EDGE_WEIGHT: f64 = 0.5;

/// Weight of the green channel in scan amplitudes (Bayer sensors carry two
/// green photosites per cell).
pub const DEFAULT_GREEN_WEIGHT: f64 = 2.0;

/// Minimum number of scan offsets before the scanner fans out across rayon.
pub const PARALLEL_OFFSET_THRESHOLD: usize = 256;

/// Lower bound of the ideal exposure (peak amplitude / MAX_LUMINANCE).
pub const EXPOSURE_IDEAL_MIN: f64 = 0.15;

/// Upper bound of the ideal exposure (peak amplitude / MAX_LUMINANCE).
pub const EXPOSURE_IDEAL_MAX: f64 = 0.30;

/// JPEG quality for saved overlay images.
pub const OVERLAY_JPEG_QUALITY: u8 = 80;

/// Amplitude that maps to a full half-aperture of trace height on the overlay.
pub const OVERLAY_TRACE_SCALE: f64 = 50.0;

/// Spacing (nm) of labelled tick marks on the overlay and chart.
pub const MAJOR_TICK_STEP: u32 = 50;

/// Spacing (nm) of minor tick marks on the chart.
pub const MINOR_TICK_STEP: u32 = 10;

/// First and last tick wavelength (nm).
pub const TICK_RANGE: (u32, u32) = (400, 1000);

/// Output chart size in pixels (width, height).
pub const CHART_SIZE: (u32, u32) = (600, 300);

/// Supersampling factor used when rendering the chart.
pub const CHART_ANTIALIAS: u32 = 4;

/// Height (output pixels) reserved below the chart baseline for ticks.
pub const CHART_AXIS_HEIGHT: u32 = 20;

/// Wavelength range (nm) covered by the chart's color background.
pub const CHART_WAVELENGTH_RANGE: (f64, f64) = (380.0, 780.0);
