// File: crates/chart-core/tests/scale.rs
// Purpose: Coordinate mapping: monotonicity, affinity, and degenerate-domain guards.

use chart_core::{map_value, BandScale, Domain, PointScale, Rect, ValidationError, ValueScale};

#[test]
fn vertical_mapping_is_decreasing() {
    let mut prev = f64::INFINITY;
    for v in [0.0, 12.5, 40.0, 77.0, 100.0] {
        let px = map_value(v, 0.0, 100.0, 50.0, 450.0).unwrap();
        assert!(px < prev, "{v} mapped to {px}, not below {prev}");
        prev = px;
    }
    assert_eq!(map_value(0.0, 0.0, 100.0, 50.0, 450.0).unwrap(), 450.0);
    assert_eq!(map_value(100.0, 0.0, 100.0, 50.0, 450.0).unwrap(), 50.0);
}

#[test]
fn vertical_mapping_is_affine() {
    let f = |v: f64| map_value(v, 0.0, 100.0, 50.0, 450.0).unwrap();
    let d1 = f(30.0) - f(20.0);
    let d2 = f(80.0) - f(70.0);
    assert!((d1 - d2).abs() < 1e-9);
    assert!((d1 + 40.0).abs() < 1e-9, "10 units should be 40px up, got {d1}");
}

#[test]
fn zero_width_domain_is_rejected() {
    let err = map_value(5.0, 10.0, 10.0, 0.0, 100.0).unwrap_err();
    assert_eq!(err, ValidationError::InvalidDomain { min: 10.0, max: 10.0 });
    assert!(Domain::new(0.0, f64::NAN).is_err());
    assert!(Domain::new(f64::NEG_INFINITY, 1.0).is_err());
    assert!(Domain::new(3.0, 1.0).is_err());
    // finite bounds whose span overflows
    assert_eq!(
        Domain::new(-f64::MAX, f64::MAX).unwrap_err(),
        ValidationError::InvalidDomain { min: -f64::MAX, max: f64::MAX }
    );
    assert!(map_value(1e300, -f64::MAX, f64::MAX, 0.0, 100.0).is_err());
    assert!(Domain::new(0.0, f64::MAX).is_ok());
}

#[test]
fn horizontal_scale_round_trips_pixels() {
    let area = Rect::from_ltrb(50.0, 50.0, 750.0, 450.0);
    let s = ValueScale::horizontal(Domain::new(0.0, 7.0).unwrap(), &area);
    assert_eq!(s.to_px(0.0), 50.0);
    assert!((s.to_px(7.0) - 750.0).abs() < 1e-9);
    assert!((s.from_px(s.to_px(3.5)) - 3.5).abs() < 1e-9);
}

#[test]
fn point_scale_needs_two_points() {
    assert_eq!(PointScale::new(50.0, 750.0, 1).unwrap_err(), ValidationError::TooFewPoints(1));
    let s = PointScale::new(50.0, 750.0, 7).unwrap();
    assert!((s.step - 700.0 / 6.0).abs() < 1e-9);
    assert!((s.to_px(6) - 750.0).abs() < 1e-9);
}

#[test]
fn band_scale_centers_bands_in_slots() {
    let s = BandScale::new(0.0, 100.0, 4).unwrap();
    let (l, r) = s.band(1, 0.7);
    assert!((l - 28.75).abs() < 1e-9);
    assert!((r - 46.25).abs() < 1e-9);
    assert!(((l + r) * 0.5 - s.center(1)).abs() < 1e-9);
    assert!(BandScale::new(0.0, 100.0, 0).is_err());
}
