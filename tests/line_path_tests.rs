use fin_chart::core::{DataPoint, Dimensions, PixelCalc, Series, YAxis};
use fin_chart::render::{
    GRAPH_CURVINESS, LinePathOptions, PathPoint, SegmentKind, build_line_path, control_points,
};

fn calc() -> PixelCalc {
    PixelCalc::new(
        Dimensions::new(100.0, 100.0)
            .with_x_range(0.0, 10.0)
            .with_y_range(0.0, 10.0),
    )
}

fn series(points: &[(f64, f64)]) -> Series {
    points.iter().copied().map(DataPoint::from).collect()
}

#[test]
fn straight_path_joins_consecutive_points() {
    let path = build_line_path(
        &series(&[(0.0, 0.0), (5.0, 5.0), (10.0, 2.0)]),
        &calc(),
        None,
        LinePathOptions::default(),
    );

    assert_eq!(path.len(), 2);
    assert_eq!(path.to_path_data(), "M0,100 L50,50 L100,80");
}

#[test]
fn anchors_are_rounded_to_one_decimal() {
    let calc = PixelCalc::new(
        Dimensions::new(100.0, 100.0)
            .with_x_range(0.0, 3.0)
            .with_y_range(0.0, 10.0),
    );
    let path = build_line_path(
        &series(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]),
        &calc,
        None,
        LinePathOptions::default(),
    );

    assert_eq!(path.to_path_data(), "M0,100 L33.3,100 L66.7,100");
}

#[test]
fn smoothing_uses_quadratic_ends_and_cubic_interior() {
    let path = build_line_path(
        &series(&[(0.0, 0.0), (2.0, 8.0), (6.0, 2.0), (10.0, 10.0)]),
        &calc(),
        None,
        LinePathOptions::default().smooth(true),
    );

    assert_eq!(
        path.to_path_data(),
        "M0,100 Q10,23 20,20 C28,17 49,83 60,80 Q73,77 100,0"
    );
}

#[test]
fn smoothed_segments_are_continuous() {
    let path = build_line_path(
        &series(&[(0.0, 0.0), (2.0, 8.0), (6.0, 2.0), (10.0, 10.0)]),
        &calc(),
        None,
        LinePathOptions::default().smooth(true),
    );
    let segments = path.segments();

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1].start, PathPoint::new(20.0, 20.0));
    for pair in segments.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start);
    }
    assert!(matches!(segments[0].kind, SegmentKind::Quadratic { .. }));
    assert!(matches!(segments[1].kind, SegmentKind::Cubic { .. }));
    assert!(matches!(segments[2].kind, SegmentKind::Quadratic { .. }));
}

#[test]
fn smoothing_needs_three_points() {
    let path = build_line_path(
        &series(&[(0.0, 0.0), (10.0, 10.0)]),
        &calc(),
        None,
        LinePathOptions::default().smooth(true),
    );
    assert_eq!(path.to_path_data(), "M0,100 L100,0");
}

#[test]
fn zero_curviness_pins_controls_to_vertices() {
    let path = build_line_path(
        &series(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)]),
        &calc(),
        None,
        LinePathOptions::default().smooth(true).curviness(0.0),
    );
    assert_eq!(path.to_path_data(), "M0,100 Q50,50 50,50 Q50,50 100,100");
}

#[test]
fn endpoints_have_no_control_points() {
    let pixels = [
        PathPoint::new(0.0, 0.0),
        PathPoint::new(10.0, 10.0),
        PathPoint::new(20.0, 0.0),
    ];
    let controls = control_points(&pixels, GRAPH_CURVINESS);

    assert_eq!(controls.len(), 3);
    assert!(controls[0].is_none());
    assert!(controls[2].is_none());
    let pair = controls[1].expect("interior control pair");
    assert_eq!(pair.incoming, PathPoint::new(7.0, 10.0));
    assert_eq!(pair.outgoing, PathPoint::new(13.0, 10.0));
}

#[test]
fn fill_without_stack_closes_to_zero_baseline() {
    let path = build_line_path(
        &series(&[(0.0, 0.0), (5.0, 5.0), (10.0, 2.0)]),
        &calc(),
        None,
        LinePathOptions::default().fill(true),
    );

    assert_eq!(path.to_path_data(), "M0,100 L50,50 L100,80 L100,100 L0,100");
}

#[test]
fn fill_with_stack_walks_the_floor_backwards() {
    let stack = vec![series(&[(0.0, 1.0), (5.0, 1.0), (10.0, 1.0)])];
    let path = build_line_path(
        &series(&[(0.0, 1.0), (5.0, 2.0), (10.0, 1.0)]),
        &calc(),
        Some(stack.as_slice()),
        LinePathOptions::default().fill(true),
    );

    assert_eq!(
        path.to_path_data(),
        "M0,80 L50,70 L100,80 L100,90 L50,90 L0,90"
    );
}

#[test]
fn stacked_line_without_fill_is_lifted() {
    let stack = vec![series(&[(0.0, 1.0), (10.0, 1.0)])];
    let path = build_line_path(
        &series(&[(0.0, 1.0), (10.0, 1.0)]),
        &calc(),
        Some(stack.as_slice()),
        LinePathOptions::default(),
    );
    assert_eq!(path.to_path_data(), "M0,80 L100,80");
}

#[test]
fn secondary_axis_uses_secondary_range() {
    let calc = PixelCalc::new(
        Dimensions::new(100.0, 100.0)
            .with_x_range(0.0, 10.0)
            .with_y_range(0.0, 10.0)
            .with_secondary_y_range(0.0, 100.0),
    );
    let path = build_line_path(
        &series(&[(0.0, 0.0), (10.0, 50.0)]),
        &calc,
        None,
        LinePathOptions::default().axis(YAxis::Secondary),
    );
    assert_eq!(path.to_path_data(), "M0,100 L100,50");
}

#[test]
fn flat_zero_range_suppresses_the_path() {
    let calc = PixelCalc::new(
        Dimensions::new(100.0, 100.0)
            .with_x_range(0.0, 10.0)
            .with_y_range(0.0, 0.0),
    );
    let path = build_line_path(
        &series(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]),
        &calc,
        None,
        LinePathOptions::default().fill(true),
    );
    assert!(path.is_empty());
}

#[test]
fn short_series_produce_no_segments() {
    assert!(build_line_path(&[], &calc(), None, LinePathOptions::default()).is_empty());
    assert!(
        build_line_path(
            &series(&[(5.0, 5.0)]),
            &calc(),
            None,
            LinePathOptions::default().smooth(true),
        )
        .is_empty()
    );
}

#[test]
fn path_description_serializes_tagged_segments() {
    let path = build_line_path(
        &series(&[(0.0, 0.0), (10.0, 10.0)]),
        &calc(),
        None,
        LinePathOptions::default(),
    );
    let json = serde_json::to_value(&path).expect("serialize");

    assert_eq!(
        json,
        serde_json::json!([
            { "start": { "x": 0.0, "y": 100.0 }, "type": "line", "to": { "x": 100.0, "y": 0.0 } }
        ])
    );
}

#[test]
fn non_finite_pixel_suppresses_the_path() {
    let data = series(&[(0.0, 1.0), (5.0, f64::INFINITY), (10.0, 2.0)]);

    for options in [
        LinePathOptions::default(),
        LinePathOptions::default().smooth(true),
        LinePathOptions::default().fill(true),
    ] {
        let path = build_line_path(&data, &calc(), None, options);
        assert!(path.is_empty(), "{options:?} produced {}", path.to_path_data());
    }
}

#[test]
fn non_finite_stack_layer_suppresses_the_fill() {
    let data = series(&[(0.0, 1.0), (5.0, 2.0), (10.0, 3.0)]);
    let stack = vec![series(&[(0.0, 1.0), (5.0, f64::NAN), (10.0, 1.0)])];

    let path = build_line_path(
        &data,
        &calc(),
        Some(stack.as_slice()),
        LinePathOptions::default().fill(true),
    );
    assert!(path.is_empty());
}
