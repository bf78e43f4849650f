use chart_geometry::core::{
    BarOrientation, Series, SeriesSet, project_bars, project_stacked_bars,
    resolve_categorical_scales, resolve_stacked_scales,
};
use proptest::prelude::*;

fn build_set(columns: &[Vec<f64>]) -> SeriesSet {
    let mut set = SeriesSet::new();
    for (index, values) in columns.iter().enumerate() {
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(x, y)| (x as f64, *y))
            .collect();
        set.push(Series::new(format!("series{index}"), points).expect("series"))
            .expect("insert");
    }
    set
}

fn orientation_strategy() -> impl Strategy<Value = BarOrientation> {
    prop_oneof![
        Just(BarOrientation::Vertical),
        Just(BarOrientation::Horizontal),
    ]
}

proptest! {
    #[test]
    fn side_by_side_bars_stay_inside_plot(
        columns in prop::collection::vec(
            prop::collection::vec(-1_000.0f64..1_000.0, 1..12),
            1..5
        ),
        fill in 0.05f64..=1.0,
        orientation in orientation_strategy()
    ) {
        let set = build_set(&columns);
        let scales = resolve_categorical_scales(&set, None, None).expect("scales");
        let geometry = project_bars(&set, scales, orientation, fill).expect("bars");

        prop_assert_eq!(geometry.bars.len(), set.total_points());
        let tolerance = 1e-9;
        for bar in &geometry.bars {
            prop_assert!(bar.w >= 0.0 && bar.h >= 0.0);
            prop_assert!((0.0..=1.0).contains(&bar.x));
            prop_assert!((0.0..=1.0).contains(&bar.y));
            prop_assert!(bar.x + bar.w <= 1.0 + tolerance);
            prop_assert!(bar.y + bar.h <= 1.0 + tolerance);
        }
    }

    #[test]
    fn stacked_segments_add_up_to_category_totals(
        columns in prop::collection::vec(
            prop::collection::vec(0.0f64..100.0, 3),
            1..5
        ),
        fill in 0.05f64..=1.0
    ) {
        let set = build_set(&columns);
        let scales = resolve_stacked_scales(&set, None, None).expect("scales");
        let geometry = project_stacked_bars(&set, scales, BarOrientation::Vertical, fill)
            .expect("bars");
        prop_assert_eq!(geometry.bars.len(), set.total_points());

        for category in 0..3 {
            let expected: f64 = columns.iter().map(|values| values[category]).sum();
            let stacked: f64 = geometry
                .bars
                .iter()
                .filter(|bar| bar.xval == category as f64)
                .map(|bar| bar.h)
                .sum();
            prop_assert!((stacked - expected * scales.y.scale).abs() <= 1e-9);
        }
    }
}
