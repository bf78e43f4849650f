use chart_geometry::core::{
    Area, BarOrientation, BarRect, Series, SeriesSet, project_bars, resolve_categorical_scales,
};
use chart_geometry::ChartError;

fn two_series() -> SeriesSet {
    let mut set = SeriesSet::new();
    set.extend_checked(vec![
        Series::new("dataset1", [(0.0, 1.0), (1.0, 1.0), (2.0, 3.0)]).expect("series"),
        Series::new("dataset2", [(0.0, 2.0), (1.0, 0.0), (3.0, 4.0)]).expect("series"),
    ])
    .expect("insert");
    set
}

fn assert_rect(bar: &BarRect, expected: (f64, f64, f64, f64)) {
    let (x, y, w, h) = expected;
    assert!((bar.x - x).abs() <= 1e-9, "x of {bar:?}");
    assert!((bar.y - y).abs() <= 1e-9, "y of {bar:?}");
    assert!((bar.w - w).abs() <= 1e-9, "w of {bar:?}");
    assert!((bar.h - h).abs() <= 1e-9, "h of {bar:?}");
}

#[test]
fn vertical_bars_split_each_slot_between_series() {
    let set = two_series();
    let scales = resolve_categorical_scales(&set, None, None).expect("scales");
    assert_eq!(scales.x.range, 3.0);
    assert!((scales.x.scale - 0.25).abs() <= 1e-9);
    assert!((scales.y.scale - 0.25).abs() <= 1e-9);

    let geometry = project_bars(&set, scales, BarOrientation::Vertical, 0.75).expect("bars");
    assert!((geometry.metrics.bar_width - 0.1875).abs() <= 1e-9);
    assert!((geometry.metrics.width_for_set - 0.09375).abs() <= 1e-9);
    assert!((geometry.metrics.margin - 0.03125).abs() <= 1e-9);

    let bars = &geometry.bars;
    assert_eq!(bars.len(), 6);
    assert_rect(&bars[0], (0.03125, 0.75, 0.09375, 0.25));
    assert_rect(&bars[1], (0.28125, 0.75, 0.09375, 0.25));
    assert_rect(&bars[2], (0.53125, 0.25, 0.09375, 0.75));
    assert_rect(&bars[3], (0.125, 0.5, 0.09375, 0.5));
    assert_rect(&bars[4], (0.375, 1.0, 0.09375, 0.0));
    assert_rect(&bars[5], (0.875, 0.0, 0.09375, 1.0));
    assert_eq!(bars[5].series_name, "dataset2");
    assert_eq!((bars[5].xval, bars[5].yval), (3.0, 4.0));
}

#[test]
fn horizontal_bars_grow_left_to_right() {
    let set = two_series();
    let scales = resolve_categorical_scales(&set, None, None).expect("scales");
    let geometry = project_bars(&set, scales, BarOrientation::Horizontal, 0.75).expect("bars");

    let bars = &geometry.bars;
    assert_eq!(bars.len(), 6);
    assert_rect(&bars[0], (0.0, 0.03125, 0.25, 0.09375));
    assert_rect(&bars[1], (0.0, 0.28125, 0.25, 0.09375));
    assert_rect(&bars[2], (0.0, 0.53125, 0.75, 0.09375));
    assert_rect(&bars[3], (0.0, 0.125, 0.5, 0.09375));
    assert_rect(&bars[4], (0.0, 0.375, 0.0, 0.09375));
    assert_rect(&bars[5], (0.0, 0.875, 1.0, 0.09375));
}

#[test]
fn horizontal_negative_values_extend_left_of_zero_line() {
    let mut set = SeriesSet::new();
    set.push(
        Series::new("dataset1", [(0.0, -3.0), (1.0, -1.0), (2.0, 3.0), (3.0, 5.0)])
            .expect("series"),
    )
    .expect("insert");
    let scales = resolve_categorical_scales(&set, None, None).expect("scales");
    assert_eq!(scales.y.range, 8.0);
    assert!((scales.y.scale - 0.125).abs() <= 1e-9);
    assert!((scales.origin - 0.375).abs() <= 1e-9);

    let geometry = project_bars(&set, scales, BarOrientation::Horizontal, 0.75).expect("bars");
    assert!((geometry.metrics.width_for_set - 0.1875).abs() <= 1e-9);
    assert!((geometry.metrics.margin - 0.03125).abs() <= 1e-9);

    let bars = &geometry.bars;
    assert_rect(&bars[0], (0.0, 0.03125, 0.375, 0.1875));
    assert_rect(&bars[1], (0.25, 0.28125, 0.125, 0.1875));
    assert_rect(&bars[2], (0.375, 0.53125, 0.375, 0.1875));
    assert_rect(&bars[3], (0.375, 0.78125, 0.625, 0.1875));
}

#[test]
fn vertical_negative_values_hang_below_zero_line() {
    let mut set = SeriesSet::new();
    set.push(Series::new("signed", [(0.0, -2.0), (1.0, 2.0)]).expect("series"))
        .expect("insert");
    let scales = resolve_categorical_scales(&set, None, None).expect("scales");
    let geometry = project_bars(&set, scales, BarOrientation::Vertical, 1.0).expect("bars");

    // y spans [-2, 2]: zero sits halfway.
    assert_rect(&geometry.bars[0], (0.0, 0.5, 0.5, 0.5));
    assert_rect(&geometry.bars[1], (0.5, 0.0, 0.5, 0.5));
}

#[test]
fn bars_outside_explicit_range_are_dropped() {
    let set = two_series();
    let scales = resolve_categorical_scales(&set, Some([0.0, 2.0]), None).expect("scales");
    let geometry = project_bars(&set, scales, BarOrientation::Vertical, 0.75).expect("bars");
    assert!(geometry.bars.iter().all(|bar| bar.xval <= 2.0));
    assert_eq!(geometry.bars.len(), 5);
}

#[test]
fn single_sample_series_share_one_category() {
    let mut set = SeriesSet::new();
    set.extend_checked(vec![
        Series::new("a", [(7.0, 1.0)]).expect("series"),
        Series::new("b", [(7.0, 2.0)]).expect("series"),
    ])
    .expect("insert");
    let scales = resolve_categorical_scales(&set, None, None).expect("scales");
    assert_eq!(scales.x.range, 0.0);
    assert_eq!(scales.x.scale, 1.0);

    let geometry = project_bars(&set, scales, BarOrientation::Vertical, 0.5).expect("bars");
    assert_rect(&geometry.bars[0], (0.25, 0.5, 0.25, 0.5));
    assert_rect(&geometry.bars[1], (0.5, 0.0, 0.25, 1.0));
}

#[test]
fn invalid_fill_fraction_is_rejected() {
    let set = two_series();
    let scales = resolve_categorical_scales(&set, None, None).expect("scales");
    let err = project_bars(&set, scales, BarOrientation::Vertical, 1.5).expect_err("bad fill");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn bar_area_maps_into_plot() {
    let bar = BarRect {
        x: 0.25,
        y: 0.5,
        w: 0.25,
        h: 0.5,
        xval: 1.0,
        yval: 2.0,
        series_name: "s".to_owned(),
    };
    let plot = Area::new(10.0, 20.0, 400.0, 300.0);
    assert_eq!(bar.to_area(plot), Area::new(110.0, 170.0, 100.0, 150.0));
}
