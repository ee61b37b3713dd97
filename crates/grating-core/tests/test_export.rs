use grating_core::io::csv::{save_csv, write_csv, CSV_HEADER};
use grating_core::io::image_io::{load_rgb_image, save_png, save_rgb_image};
use grating_core::spectrum::{Spectrum, WavelengthSample};
use image::{Rgb, RgbImage};

fn sample_spectrum() -> Spectrum {
    Spectrum::from_samples(vec![
        WavelengthSample {
            wavelength: 380.884,
            amplitude: 0.5,
        },
        WavelengthSample {
            wavelength: 381.776,
            amplitude: 1.0,
        },
        WavelengthSample {
            wavelength: 382.668,
            amplitude: 0.12345,
        },
    ])
}

#[test]
fn test_csv_format() {
    let mut buf = Vec::new();
    write_csv(&sample_spectrum(), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert_eq!(
        text,
        "wavelength,amplitude\n380.884,0.500\n381.776,1.000\n382.668,0.123\n"
    );
}

#[test]
fn test_csv_empty_spectrum_has_header_only() {
    let mut buf = Vec::new();
    write_csv(&Spectrum::default(), &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), format!("{CSV_HEADER}\n"));
}

#[test]
fn test_save_csv_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spectrum.csv");

    save_csv(&sample_spectrum(), &path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 4);
    assert!(contents.starts_with(CSV_HEADER));
}

#[test]
fn test_png_roundtrip_is_lossless() {
    let mut img = RgbImage::new(6, 4);
    img.put_pixel(2, 1, Rgb([10, 200, 30]));
    img.put_pixel(5, 3, Rgb([255, 255, 255]));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capture.png");
    save_png(&img, &path).unwrap();

    let loaded = load_rgb_image(&path).unwrap();
    assert_eq!(loaded, img);
}

#[test]
fn test_save_by_extension_defaults_to_jpeg() {
    let img = RgbImage::from_pixel(16, 16, Rgb([120, 60, 30]));
    let dir = tempfile::tempdir().unwrap();

    let jpg = dir.path().join("overlay.jpg");
    save_rgb_image(&img, &jpg).unwrap();
    let loaded = load_rgb_image(&jpg).unwrap();
    assert_eq!(loaded.dimensions(), (16, 16));

    let png = dir.path().join("overlay.png");
    save_rgb_image(&img, &png).unwrap();
    assert_eq!(load_rgb_image(&png).unwrap(), img);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_rgb_image(&dir.path().join("missing.jpg")).is_err());
}
