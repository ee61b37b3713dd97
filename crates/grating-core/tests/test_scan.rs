mod common;

use grating_core::aperture::locate;
use grating_core::calibration::CalibrationConfig;
use grating_core::error::GratingError;
use grating_core::spectrum::scan::{
    integrate_column, sample_column, scan_limit, scan_line_y, wavelength_at,
};
use grating_core::spectrum::{scan, Spectrum, WavelengthSample};
use image::{Rgb, RgbImage};

use common::{aperture_at, reference_capture, spectrum_capture, uniform_image};

fn level_config() -> CalibrationConfig {
    CalibrationConfig {
        scan_angle: 0.0,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Geometry helpers
// ---------------------------------------------------------------------------

#[test]
fn test_scan_limit_excludes_last_eighth() {
    let config = CalibrationConfig::default();
    assert_eq!(scan_limit(&aperture_at(700, 100, 40), &config), 612);
    assert_eq!(scan_limit(&aperture_at(1048, 469, 164), &config), 917);
    assert_eq!(scan_limit(&aperture_at(0, 0, 0), &config), 0);
}

#[test]
fn test_wavelength_at_scales_distance() {
    let config = CalibrationConfig::default();
    assert!((wavelength_at(567, 140, &config) - 427.0 * 0.892).abs() < 1e-12);
    assert_eq!(wavelength_at(100, 100, &config), 0.0);
}

#[test]
fn test_scan_line_passes_through_aperture_center() {
    let config = CalibrationConfig::default();
    let aperture = aperture_at(500, 200, 40);
    assert!((scan_line_y(&aperture, 500.0, &config) - 200.0).abs() < 1e-12);
    let expected = 0.03_f64.tan() * 500.0 + 200.0;
    assert!((scan_line_y(&aperture, 0.0, &config) - expected).abs() < 1e-12);
}

// ---------------------------------------------------------------------------
// Integration window
// ---------------------------------------------------------------------------

#[test]
fn test_integrate_uniform_column_halves_edge_rows() {
    let img = uniform_image(10, 200, Rgb([10, 20, 30]));
    // q = 10 + 30 + 2 * 20 = 80; rows 80, 81, 118 and 119 count half.
    let mean = integrate_column(&img, 3, 100.0, 20.0, &level_config());
    assert!((mean - 76.0).abs() < 1e-12, "got {mean}");
}

#[test]
fn test_integrate_skips_rows_outside_image() {
    let img = uniform_image(10, 200, Rgb([10, 20, 30]));
    // Rows -15..0 fall off the top; 23 full rows and 2 half rows remain.
    let mean = integrate_column(&img, 0, 5.0, 20.0, &level_config());
    assert!((mean - 76.8).abs() < 1e-12, "got {mean}");
}

#[test]
fn test_integrate_empty_window_is_zero() {
    let img = uniform_image(10, 200, Rgb([255, 255, 255]));
    assert_eq!(integrate_column(&img, 0, 100.0, 0.0, &level_config()), 0.0);
}

#[test]
fn test_green_weight_is_configurable() {
    let img = uniform_image(10, 200, Rgb([0, 10, 0]));
    let config = CalibrationConfig {
        green_weight: 1.0,
        edge_weight: 1.0,
        ..level_config()
    };
    let mean = integrate_column(&img, 0, 100.0, 20.0, &config);
    assert!((mean - 10.0).abs() < 1e-12, "got {mean}");
}

// ---------------------------------------------------------------------------
// Full scan
// ---------------------------------------------------------------------------

#[test]
fn test_uniform_scan_amplitudes_follow_efficiency() {
    let img = uniform_image(800, 200, Rgb([10, 20, 30]));
    let config = level_config();
    let spectrum = scan(&img, &aperture_at(700, 100, 40), &config);

    assert_eq!(spectrum.len(), 274);
    for sample in &spectrum {
        let expected = 76.0 / config.efficiency.efficiency(sample.wavelength);
        assert!(
            (sample.amplitude - expected).abs() < 1e-9,
            "at {} nm: {} vs {}",
            sample.wavelength,
            sample.amplitude,
            expected
        );
    }
}

#[test]
fn test_scan_respects_wavelength_band() {
    let img = uniform_image(800, 200, Rgb([10, 20, 30]));
    let config = CalibrationConfig {
        wavelength_scale: 2.0,
        ..level_config()
    };
    let spectrum = scan(&img, &aperture_at(700, 100, 40), &config);

    assert_eq!(spectrum.len(), 311);
    let first = spectrum.samples().first().unwrap();
    let last = spectrum.samples().last().unwrap();
    assert_eq!(first.wavelength, 380.0);
    assert_eq!(last.wavelength, 1000.0);
}

#[test]
fn test_wavelengths_strictly_increase() {
    let img = spectrum_capture();
    let config = CalibrationConfig::default();
    let aperture = locate(&img, &config);
    let spectrum = scan(&img, &aperture, &config);

    assert!(!spectrum.is_empty());
    for pair in spectrum.samples().windows(2) {
        assert!(pair[0].wavelength < pair[1].wavelength);
    }
}

#[test]
fn test_parallel_scan_matches_sequential_order() {
    let img = spectrum_capture();
    let config = CalibrationConfig::default();
    let aperture = locate(&img, &config);
    let limit = scan_limit(&aperture, &config);
    assert!(limit >= 256, "expected the parallel path, limit = {limit}");

    let expected: Vec<WavelengthSample> = (0..limit)
        .rev()
        .filter_map(|x| sample_column(&img, &aperture, &config, x))
        .collect();
    let spectrum = scan(&img, &aperture, &config);

    assert_eq!(spectrum.samples(), expected.as_slice());
}

#[test]
fn test_sequential_scan_below_parallel_threshold() {
    let img = uniform_image(300, 200, Rgb([10, 20, 30]));
    let config = CalibrationConfig {
        wavelength_scale: 4.0,
        ..level_config()
    };
    let aperture = aperture_at(200, 100, 40);
    assert!(scan_limit(&aperture, &config) < 256);

    let spectrum = scan(&img, &aperture, &config);
    assert_eq!(spectrum.len(), 106);
    assert_eq!(spectrum.samples()[0].wavelength, 380.0);
}

#[test]
fn test_scan_is_deterministic() {
    let img = spectrum_capture();
    let config = CalibrationConfig::default();
    let aperture = locate(&img, &config);
    let first = scan(&img, &aperture, &config);
    assert_eq!(scan(&img, &aperture, &config), first);
}

#[test]
fn test_amplitude_is_translation_invariant_in_y() {
    let img = uniform_image(800, 300, Rgb([40, 80, 20]));
    let config = CalibrationConfig::default();
    let low = scan(&img, &aperture_at(700, 100, 40), &config);
    let high = scan(&img, &aperture_at(700, 130, 40), &config);

    assert_eq!(low.len(), high.len());
    for (a, b) in low.iter().zip(high.iter()) {
        assert_eq!(a.wavelength, b.wavelength);
        assert!((a.amplitude - b.amplitude).abs() < 1e-9);
    }
}

// ---------------------------------------------------------------------------
// Degenerate input
// ---------------------------------------------------------------------------

#[test]
fn test_zero_height_aperture_yields_zero_amplitudes() {
    let img = uniform_image(800, 200, Rgb([255, 255, 255]));
    let spectrum = scan(&img, &aperture_at(700, 100, 0), &CalibrationConfig::default());

    assert_eq!(spectrum.len(), 274);
    assert!(spectrum.iter().all(|s| s.amplitude == 0.0));
    assert_eq!(spectrum.max_amplitude(), 0.0);
    assert!(matches!(spectrum.normalize(), Err(GratingError::EmptySpectrum)));
}

#[test]
fn test_all_dark_image_scans_to_empty_spectrum() {
    let img = RgbImage::new(200, 100);
    let config = CalibrationConfig::default();
    let aperture = locate(&img, &config);
    let spectrum = scan(&img, &aperture, &config);

    assert_eq!(spectrum, Spectrum::default());
    assert!(spectrum.normalize().is_err());
}

#[test]
fn test_reference_capture_has_no_spectrum_light() {
    let img = reference_capture();
    let config = CalibrationConfig::default();
    let aperture = locate(&img, &config);
    let spectrum = scan(&img, &aperture, &config);

    assert_eq!(spectrum.len(), 622);
    assert_eq!(spectrum.max_amplitude(), 0.0);
}
