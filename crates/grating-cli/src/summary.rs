use std::path::Path;

use console::Style;
use grating_core::aperture::ApertureGeometry;
use grating_core::consts::{EXPOSURE_IDEAL_MAX, EXPOSURE_IDEAL_MIN};
use grating_core::exposure::{ExposureAdvice, ExposureReport};
use grating_core::pipeline::config::PipelineConfig;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    good: Style,
    warning: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            good: Style::new().green(),
            warning: Style::new().yellow().bold(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_aperture(file: &Path, dimensions: (u32, u32), aperture: &ApertureGeometry) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Aperture"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(8)));
    println!();
    println!("  {:<14}{}", s.label.apply_to("File"), s.path.apply_to(file.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{}x{}", dimensions.0, dimensions.1))
    );

    if !aperture.is_detected() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Hotspot"),
            s.warning.apply_to("not found")
        );
        println!();
        return;
    }

    println!(
        "  {:<14}{}",
        s.label.apply_to("Center"),
        s.value.apply_to(format!("({}, {})", aperture.center_x, aperture.center_y))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Height"),
        s.value.apply_to(format!("{} px", aperture.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Peak"),
        s.value.apply_to(format!(
            "{} at x={} (threshold {})",
            aperture.peak_luminance, aperture.brightest_x, aperture.threshold
        ))
    );
    let b = aperture.bounds;
    println!(
        "  {:<14}{}",
        s.label.apply_to("Bounds"),
        s.value.apply_to(format!(
            "x {}..{}  y {}..{}",
            b.left, b.right, b.top, b.bottom
        ))
    );
    println!();
}

pub fn print_scan_summary(config: &PipelineConfig) {
    let s = Styles::new();
    let cal = &config.calibration;

    println!();
    println!("  {}", s.title.apply_to("Grating Scan"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(12)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!();

    println!("  {}", s.header.apply_to("Calibration"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{} nm/px", cal.wavelength_scale))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Angle"),
        s.value.apply_to(format!("{} rad", cal.scan_angle))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Band"),
        s.value.apply_to(format!("{}-{} nm", cal.min_wavelength, cal.max_wavelength))
    );
    if cal.efficiency.notches.is_empty() {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Notches"),
            s.disabled.apply_to("none")
        );
    } else {
        for notch in &cal.efficiency.notches {
            println!(
                "    {:<12}{}",
                s.label.apply_to("Notch"),
                s.value.apply_to(notch)
            );
        }
    }
    println!();

    let outputs = [
        ("Overlay", config.outputs.overlay),
        ("CSV", config.outputs.csv),
        ("Chart", config.outputs.chart),
    ];
    println!("  {}", s.header.apply_to("Outputs"));
    for (name, enabled) in outputs {
        let state = if enabled {
            s.good.apply_to("yes")
        } else {
            s.disabled.apply_to("no")
        };
        println!("    {:<12}{}", s.label.apply_to(name), state);
    }
    println!();
}

pub fn print_exposure(report: &ExposureReport) {
    let s = Styles::new();
    let style = match report.advice {
        ExposureAdvice::Good => &s.good,
        _ => &s.warning,
    };
    println!(
        "  {:<14}{}  {}",
        s.label.apply_to("Exposure"),
        s.value.apply_to(format!("{:.3}", report.exposure)),
        s.label.apply_to(format!(
            "(ideal {EXPOSURE_IDEAL_MIN:.2}-{EXPOSURE_IDEAL_MAX:.2})"
        ))
    );
    println!("  {:<14}{}", "", style.apply_to(report.advice));
    println!();
}
