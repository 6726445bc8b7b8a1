// File: crates/linegraph-core/tests/scale.rs
// Purpose: Domain derivation, padding, pixel bounds and the degenerate-domain guards.

use linegraph_core::{PixelMapping, ScaleMapper, Series, ViewConfig, XOrigin};

fn scenario() -> Series {
    Series::from_triples([(0.0, 10.0, 0), (1.0, 20.0, 1000), (2.0, 5.0, 2000)]).expect("valid series")
}

fn mapper(series: &Series) -> ScaleMapper {
    ScaleMapper::new(series, &ViewConfig::default(), XOrigin::Zero).expect("valid view")
}

#[test]
fn domains_use_first_last_x_and_padded_y_scan() {
    let s = mapper(&scenario());
    assert_eq!(s.x_domain().min, 0.0);
    assert_eq!(s.x_domain().max, 2.0);
    // 150 * 0.025 = 3.75 on each side of [5, 20]
    assert_eq!(s.y_domain().min, 1.25);
    assert_eq!(s.y_domain().max, 23.75);
}

#[test]
fn x_domain_is_not_a_scan() {
    // Out-of-order x: the domain still comes from the first and last points.
    let series = Series::from_triples([(1.0, 1.0, 0), (5.0, 2.0, 0), (3.0, 3.0, 0)]).unwrap();
    let s = mapper(&series);
    assert_eq!(s.x_domain().min, 1.0);
    assert_eq!(s.x_domain().max, 3.0);
}

#[test]
fn pixel_y_matches_formula() {
    let s = mapper(&scenario());
    assert_eq!(s.to_px_y(20.0), 25.0);
    assert_eq!(s.to_px_y(5.0), 125.0);
    assert!((s.to_px_y(10.0) - 2062.5 / 22.5).abs() < 1e-9);
    assert_eq!(s.baseline_y(), 150.0);
}

#[test]
fn pixel_y_stays_on_surface_for_unpadded_values() {
    let cases: Vec<Vec<(f64, f64, i64)>> = vec![
        vec![(0.0, 10.0, 0), (1.0, 20.0, 0), (2.0, 5.0, 0)],
        vec![(0.0, -300.0, 0), (1.0, 4_000.0, 0), (2.0, 12.5, 0), (3.0, 0.0, 0)],
        vec![(0.0, 0.001, 0), (1.0, 0.002, 0)],
        (0..50).map(|i| (i as f64, (i as f64 * 0.3).sin() * 1e6, 0)).collect(),
    ];
    for (w, h) in [(300.0, 150.0), (640.0, 20.0), (1.0, 1.0)] {
        let view = ViewConfig::new(w, h);
        for data in &cases {
            let series = Series::from_triples(data.iter().copied()).unwrap();
            let s = ScaleMapper::new(&series, &view, XOrigin::Zero).unwrap();
            for p in &series {
                let py = s.to_px_y(p.y);
                assert!((0.0..=h).contains(&py), "y={} mapped to {py} outside [0, {h}]", p.y);
            }
        }
    }
}

#[test]
fn pixel_x_brackets_width_when_domain_starts_at_zero() {
    let series = scenario();
    let s = mapper(&series);
    assert_eq!(s.to_px_x(series.first().x), 0.0);
    assert_eq!(s.to_px_x(series.last().x), 300.0);
    assert_eq!(s.to_px_x(1.0), 150.0);
}

#[test]
fn zero_origin_keeps_offset_free_mapping() {
    let series = Series::from_triples([(10.0, 1.0, 0), (20.0, 2.0, 0)]).unwrap();
    let s = ScaleMapper::new(&series, &ViewConfig::default(), XOrigin::Zero).unwrap();
    // first point lands mid-surface: x / x_max * width
    assert_eq!(s.to_px_x(10.0), 150.0);
    assert_eq!(s.to_px_x(20.0), 300.0);
}

#[test]
fn domain_min_origin_starts_at_left_edge() {
    let series = Series::from_triples([(10.0, 1.0, 0), (20.0, 2.0, 0)]).unwrap();
    let s = ScaleMapper::new(&series, &ViewConfig::default(), XOrigin::DomainMin).unwrap();
    assert_eq!(s.to_px_x(10.0), 0.0);
    assert_eq!(s.to_px_x(15.0), 150.0);
    assert_eq!(s.to_px_x(20.0), 300.0);
    assert_eq!(s.from_px_x(150.0), 15.0);
}

#[test]
fn from_px_x_inverts_zero_origin() {
    let s = mapper(&scenario());
    assert_eq!(s.from_px_x(150.0), 1.0);
    assert_eq!(s.from_px_x(300.0), 2.0);
}

#[test]
fn flat_series_gets_minimum_height_domain() {
    let series = Series::from_triples([(0.0, 5.0, 0), (1.0, 5.0, 1000)]).unwrap();
    let s = mapper(&series);
    let span = s.y_domain().span();
    assert!((span - 150.0 * 0.05).abs() < 1e-12, "span was {span}");
    let py = s.to_px_y(5.0);
    assert!(py.is_finite());
    assert_eq!(py, 75.0);
}

#[test]
fn single_point_at_zero_does_not_divide_by_zero() {
    let series = Series::from_triples([(0.0, 42.0, 0)]).unwrap();
    for origin in [XOrigin::Zero, XOrigin::DomainMin] {
        let s = ScaleMapper::new(&series, &ViewConfig::default(), origin).unwrap();
        assert_eq!(s.to_px_x(0.0), 0.0);
        assert!(s.to_px_y(42.0).is_finite());
        assert_eq!(s.from_px_x(100.0), 0.0);
    }
}

#[test]
fn invalid_view_is_rejected() {
    let series = scenario();
    for view in [ViewConfig::new(0.0, 150.0), ViewConfig::new(300.0, -1.0), ViewConfig::new(f64::NAN, 10.0)] {
        assert!(ScaleMapper::new(&series, &view, XOrigin::Zero).is_err());
    }
}
