use approx::assert_abs_diff_eq;
use chart_geometry::core::{
    BarOrientation, BarRect, Series, SeriesSet, project_stacked_bars, resolve_stacked_scales,
};

fn dataset(entries: Vec<(&str, Vec<(f64, f64)>)>) -> SeriesSet {
    let mut set = SeriesSet::new();
    let batch = entries
        .into_iter()
        .map(|(name, points)| Series::new(name, points).expect("series"))
        .collect();
    set.extend_checked(batch).expect("insert");
    set
}

fn assert_rect(bar: &BarRect, x: f64, y: f64, w: f64, h: f64) {
    assert_abs_diff_eq!(bar.x, x, epsilon = 1e-9);
    assert_abs_diff_eq!(bar.y, y, epsilon = 1e-9);
    assert_abs_diff_eq!(bar.w, w, epsilon = 1e-9);
    assert_abs_diff_eq!(bar.h, h, epsilon = 1e-9);
}

#[test]
fn stacked_value_axis_spans_tallest_stack() {
    let set = dataset(vec![
        ("dataset1", vec![(0.0, 1.0), (1.0, 2.0)]),
        ("dataset2", vec![(0.0, 3.0), (1.0, 1.0)]),
    ]);
    let scales = resolve_stacked_scales(&set, None, None).expect("scales");
    assert_eq!(scales.y.range, 4.0);
    assert_abs_diff_eq!(scales.y.scale, 0.25, epsilon = 1e-12);

    let geometry =
        project_stacked_bars(&set, scales, BarOrientation::Vertical, 0.75).expect("bars");
    assert_abs_diff_eq!(geometry.metrics.bar_width, 0.375, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.metrics.margin, 0.0625, epsilon = 1e-9);
}

#[test]
fn vertical_segments_stack_in_series_order() {
    let set = dataset(vec![
        (
            "dataset1",
            vec![(0.0, 3.0), (1.0, 4.0), (2.0, 2.0), (3.0, 5.0), (4.0, 3.5)],
        ),
        (
            "dataset2",
            vec![(0.0, 2.0), (1.0, 3.0), (2.0, 1.0), (3.0, 5.0), (4.0, 2.5)],
        ),
    ]);
    let scales = resolve_stacked_scales(&set, None, None).expect("scales");
    assert_eq!(scales.x.range, 4.0);
    assert_abs_diff_eq!(scales.x.scale, 0.2, epsilon = 1e-12);
    assert_eq!(scales.y.range, 10.0);

    let geometry =
        project_stacked_bars(&set, scales, BarOrientation::Vertical, 0.75).expect("bars");
    assert_abs_diff_eq!(geometry.metrics.bar_width, 0.15, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.metrics.margin, 0.025, epsilon = 1e-9);

    let expected = [
        (0.025, 0.700, 0.150, 0.300),
        (0.225, 0.600, 0.150, 0.400),
        (0.425, 0.800, 0.150, 0.200),
        (0.625, 0.500, 0.150, 0.500),
        (0.825, 0.650, 0.150, 0.350),
        (0.025, 0.500, 0.150, 0.200),
        (0.225, 0.300, 0.150, 0.300),
        (0.425, 0.700, 0.150, 0.100),
        (0.625, 0.000, 0.150, 0.500),
        (0.825, 0.400, 0.150, 0.250),
    ];
    assert_eq!(geometry.bars.len(), expected.len());
    for (bar, (x, y, w, h)) in geometry.bars.iter().zip(expected) {
        assert_rect(bar, x, y, w, h);
    }
    assert_eq!(geometry.bars[9].series_name, "dataset2");
    assert_eq!(geometry.bars[9].yval, 2.5);
}

#[test]
fn negative_values_stack_downward_from_zero() {
    let set = dataset(vec![
        ("dataset1", vec![(0.0, 2.0), (1.0, -1.0)]),
        ("dataset2", vec![(0.0, -3.0), (1.0, -2.0)]),
    ]);
    let scales = resolve_stacked_scales(&set, None, None).expect("scales");
    assert_eq!((scales.y.min, scales.y.max), (-3.0, 2.0));
    assert_abs_diff_eq!(scales.y.scale, 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(scales.origin, 0.6, epsilon = 1e-12);

    let geometry =
        project_stacked_bars(&set, scales, BarOrientation::Vertical, 0.75).expect("bars");
    let bars = &geometry.bars;
    assert_eq!(bars.len(), 4);
    // dataset1, category 0 then 1; dataset2, category 0 then 1.
    assert_rect(&bars[0], bars[0].x, 0.0, bars[0].w, 0.4);
    assert_rect(&bars[1], bars[1].x, 0.4, bars[1].w, 0.2);
    assert_rect(&bars[2], bars[2].x, 0.4, bars[2].w, 0.6);
    assert_rect(&bars[3], bars[3].x, 0.6, bars[3].w, 0.4);
}

#[test]
fn horizontal_segments_use_full_bar_height() {
    let set = dataset(vec![
        ("dataset1", vec![(0.0, 1.0), (1.0, 2.0)]),
        ("dataset2", vec![(0.0, 3.0), (1.0, 1.0)]),
    ]);
    let scales = resolve_stacked_scales(&set, None, None).expect("scales");
    let geometry =
        project_stacked_bars(&set, scales, BarOrientation::Horizontal, 0.75).expect("bars");

    let bars = &geometry.bars;
    assert_rect(&bars[0], 0.0, 0.0625, 0.25, 0.375);
    assert_rect(&bars[1], 0.0, 0.5625, 0.5, 0.375);
    assert_rect(&bars[2], 0.25, 0.0625, 0.75, 0.375);
    assert_rect(&bars[3], 0.5, 0.5625, 0.25, 0.375);
}

#[test]
fn segments_are_clipped_to_explicit_value_range() {
    let set = dataset(vec![
        ("dataset1", vec![(0.0, 3.0)]),
        ("dataset2", vec![(0.0, 3.0)]),
    ]);
    let scales = resolve_stacked_scales(&set, None, Some([0.0, 4.0])).expect("scales");
    let geometry =
        project_stacked_bars(&set, scales, BarOrientation::Vertical, 0.75).expect("bars");

    let top = &geometry.bars[1];
    assert_abs_diff_eq!(top.y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(top.h, 0.25, epsilon = 1e-9);
}
