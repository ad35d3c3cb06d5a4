use barline::{Chart, ChartError, ChartKind, DrawOp, PointPx, RectPx, RecordingSurface, Rgb};

fn reference_line_chart() -> Chart {
    let mut chart = Chart::new(ChartKind::Line);
    chart.set_graph_area(400, 300);
    chart.set_x_coordinates([0, 1, 2, 3]);
    chart
        .add_y_coordinates(vec![10.0, -5.0, 20.0, 0.0], Rgb::new(0, 0, 200), "volume")
        .expect("series matches the X axis");
    chart
}

#[test]
fn mismatched_series_length_is_rejected_and_nothing_is_stored() {
    let mut chart = Chart::new(ChartKind::Line);
    chart.set_graph_area(400, 300);
    chart.set_x_coordinates([0, 1, 2, 3]);

    let err = chart
        .add_y_coordinates(vec![1.0, 2.0, 3.0], Rgb::BLACK, "short")
        .expect_err("three values against four categories");

    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(chart.y_coordinates().is_empty());
    assert!(!chart.last_error().is_empty());
}

#[test]
fn non_finite_values_are_rejected() {
    let mut chart = Chart::new(ChartKind::Line);
    chart.set_graph_area(400, 300);
    chart.set_x_coordinates([0, 1]);

    let err = chart
        .add_y_coordinates(vec![1.0, f64::NAN], Rgb::BLACK, "bad")
        .expect_err("NaN value");

    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(chart.y_coordinates().is_empty());
}

#[test]
fn removing_a_series_shifts_the_rest_and_ignores_bad_indexes() {
    let mut chart = Chart::new(ChartKind::Line);
    chart.set_graph_area(400, 300);
    chart.set_x_coordinates([0, 1]);
    chart
        .add_y_coordinates(vec![1.0, 2.0], Rgb::new(255, 0, 0), "first")
        .expect("first series");
    chart
        .add_y_coordinates(vec![3.0, 4.0], Rgb::new(0, 255, 0), "second")
        .expect("second series");

    chart.remove_y_coordinates(5);
    assert_eq!(chart.y_coordinates().len(), 2);

    chart.remove_y_coordinates(0);
    assert_eq!(chart.y_coordinates().len(), 1);
    assert_eq!(chart.y_coordinates()[0].caption, "second");
}

#[test]
fn replacing_the_categories_drops_mismatched_series() {
    let mut chart = Chart::new(ChartKind::Line);
    chart.set_graph_area(400, 300);
    chart.set_x_coordinates([0, 1]);
    chart
        .add_y_coordinates(vec![1.0, 2.0], Rgb::BLACK, "pair")
        .expect("matching series");

    chart.set_x_coordinates([0, 1, 2]);
    assert!(chart.y_coordinates().is_empty());

    chart.set_x_coordinates([4, 5]);
    assert!(chart.y_coordinates().is_empty(), "dropped series stay gone");
}

#[test]
fn missing_font_file_is_reported() {
    let mut chart = Chart::new(ChartKind::Line);

    let err = chart
        .set_font_file("/nonexistent/caption-font.ttf")
        .expect_err("font file does not exist");

    assert!(matches!(err, ChartError::FontNotFound { .. }));
    assert!(!chart.last_error().is_empty());
}

#[test]
fn line_chart_derives_the_expected_scale_state() {
    let chart = reference_line_chart();

    let scale = chart.scale();
    assert_eq!(scale.zero_row(), 180);
    assert_eq!(scale.px_per_unit(), 9);
    assert_eq!(scale.units_per_step(), 1);
    assert_eq!(scale.value_span(), 25.0);
}

#[test]
fn line_chart_draws_baseline_data_and_legend() {
    let mut chart = reference_line_chart();
    let mut surface = RecordingSurface::new();

    chart.draw_onto(&mut surface).expect("chart draws");

    // The only fill before the legend swatch is the zero baseline.
    let fills = surface.filled_rects();
    assert_eq!(fills[0], (RectPx::from_ltrb(40, 189, 320, 189), Rgb::BLACK));

    // Segment from category 0 (row 90) to category 1 (row 225), shifted by
    // the caption column and top margin.
    let segment = DrawOp::Line {
        from: PointPx::new(40, 99),
        to: PointPx::new(110, 234),
        color: Rgb::new(0, 0, 200),
    };
    assert!(surface.ops.contains(&segment));

    let captions: Vec<(i32, &str)> = surface
        .drawn_labels()
        .iter()
        .map(|&(x, _, text)| (x, text))
        .collect();
    assert!(captions.contains(&(340, "volume")), "legend caption drawn");
}

#[test]
fn stacked_blocks_nearest_to_zero_are_drawn_last() {
    let mut chart = Chart::new(ChartKind::StackedBar);
    chart.set_graph_area(400, 300);
    chart.set_x_coordinates(["alpha", "beta"]);
    let tall = Rgb::new(200, 0, 0);
    let short = Rgb::new(0, 0, 200);
    chart
        .add_y_coordinates(vec![10.0, 10.0], tall, "tall")
        .expect("tall series");
    chart
        .add_y_coordinates(vec![5.0, 5.0], short, "short")
        .expect("short series");

    let mut surface = RecordingSurface::new();
    chart.draw_onto(&mut surface).expect("chart draws");

    let fills = surface.filled_rects();
    // Per category: far-from-zero block first, nearest-zero block on top.
    assert_eq!(fills[0], (RectPx::from_ltrb(40, 15, 180, 255), tall));
    assert_eq!(fills[1], (RectPx::from_ltrb(40, 135, 180, 255), short));
    assert_eq!(fills[2], (RectPx::from_ltrb(180, 15, 320, 255), tall));
    assert_eq!(fills[3], (RectPx::from_ltrb(180, 135, 320, 255), short));
    // Thickened zero baseline follows the data blocks.
    assert_eq!(fills[4], (RectPx::from_ltrb(40, 254, 320, 256), Rgb::BLACK));
}

#[test]
fn stacked_blocks_grow_away_from_zero_on_both_sides() {
    let mut chart = Chart::new(ChartKind::StackedBar);
    chart.set_graph_area(400, 300);
    chart.set_x_coordinates(["only"]);
    let up = Rgb::new(200, 0, 0);
    let down = Rgb::new(0, 0, 200);
    chart
        .add_y_coordinates(vec![10.0], up, "up")
        .expect("positive series");
    chart
        .add_y_coordinates(vec![-5.0], down, "down")
        .expect("negative series");

    let mut surface = RecordingSurface::new();
    chart.draw_onto(&mut surface).expect("chart draws");

    let fills = surface.filled_rects();
    assert_eq!(fills[0], (RectPx::from_ltrb(40, 169, 320, 249), down));
    assert_eq!(fills[1], (RectPx::from_ltrb(40, 9, 320, 169), up));
}

#[test]
fn an_empty_chart_still_draws_its_frames_and_axes() {
    let mut chart = Chart::new(ChartKind::Line);
    chart.set_graph_area(400, 300);

    let mut surface = RecordingSurface::new();
    chart.draw_onto(&mut surface).expect("empty chart draws");
    assert!(!surface.ops.is_empty());
}

#[test]
fn stacked_chart_without_categories_skips_the_label_axis() {
    let mut chart = Chart::new(ChartKind::StackedBar);
    chart.set_graph_area(400, 300);

    let mut surface = RecordingSurface::new();
    chart.draw_onto(&mut surface).expect("empty stacked chart draws");
}
