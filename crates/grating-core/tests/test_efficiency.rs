use approx::assert_relative_eq;
use grating_core::error::GratingError;
use grating_core::spectrum::efficiency::{EfficiencyCurve, NotchCorrection};

#[test]
fn test_base_curve_is_linear_from_origin() {
    let curve = EfficiencyCurve::default();
    assert_relative_eq!(curve.base(250.0), 1.0);
    assert_relative_eq!(curve.base(650.0), 0.5);
    assert_relative_eq!(curve.base(450.0), 0.75);
}

#[test]
fn test_base_curve_is_clamped_to_floor() {
    let curve = EfficiencyCurve::default();
    assert_relative_eq!(curve.base(900.0), 0.3);
    assert_relative_eq!(curve.base(1000.0), 0.3);
}

#[test]
fn test_outside_notches_efficiency_equals_base() {
    let curve = EfficiencyCurve::default();
    for wl in [400.0, 500.0, 565.0, 598.0, 700.0] {
        assert_eq!(curve.efficiency(wl), curve.base(wl), "at {wl} nm");
    }
}

#[test]
fn test_yellow_notch_suppresses_at_center() {
    let curve = EfficiencyCurve::default();
    assert_relative_eq!(curve.efficiency(575.0), 0.59375 * 0.9, epsilon = 1e-12);
}

#[test]
fn test_orange_notch_boosts_at_center() {
    let curve = EfficiencyCurve::default();
    assert_relative_eq!(curve.efficiency(588.0), 0.5775 * 1.1, epsilon = 1e-12);
}

#[test]
fn test_overlapping_notches_compound() {
    let curve = EfficiencyCurve::default();
    // 5 nm from the yellow notch, 8 nm from the orange notch.
    let expected = 0.5875 * 0.95 * 1.02;
    assert_relative_eq!(curve.efficiency(580.0), expected, epsilon = 1e-12);
}

#[test]
fn test_notch_window_is_open() {
    let notch = NotchCorrection {
        center: 575.0,
        half_width: 10.0,
        gain: -0.1,
    };
    assert_eq!(notch.factor(565.0), 1.0);
    assert_eq!(notch.factor(585.0), 1.0);
    assert!(notch.factor(565.5) < 1.0);
}

#[test]
fn test_efficiency_without_notches() {
    let curve = EfficiencyCurve {
        notches: vec![],
        ..Default::default()
    };
    assert_eq!(curve.efficiency(575.0), curve.base(575.0));
}

#[test]
fn test_notch_display() {
    let notch = NotchCorrection {
        center: 588.0,
        half_width: 10.0,
        gain: 0.1,
    };
    let s = format!("{notch}");
    assert!(s.contains("588 nm"), "got: {s}");
    assert!(s.contains("+10%"), "got: {s}");
}

#[test]
fn test_validate_rejects_bad_curves() {
    let zero_span = EfficiencyCurve {
        span: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        zero_span.validate(),
        Err(GratingError::InvalidCalibration(_))
    ));

    let zero_floor = EfficiencyCurve {
        floor: 0.0,
        ..Default::default()
    };
    assert!(zero_floor.validate().is_err());

    let mut narrow = EfficiencyCurve::default();
    narrow.notches[0].half_width = 0.0;
    assert!(narrow.validate().is_err());

    let mut deep = EfficiencyCurve::default();
    deep.notches[0].gain = -1.0;
    assert!(deep.validate().is_err());

    assert!(EfficiencyCurve::default().validate().is_ok());
}
