use chart_geometry::core::{
    AxisDirection, AxisRange, Series, SeriesSet, TickRules, generate_ticks, project_line_points,
    resolve_scales,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn resolved_scale_is_finite_and_non_zero(
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 1..64)
    ) {
        let mut set = SeriesSet::new();
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(index, value)| (index as f64, *value))
            .collect();
        set.push(Series::new("generated", points).expect("series")).expect("insert");

        let scales = resolve_scales(&set, None, None).expect("scales");
        prop_assert!(scales.y.scale.is_finite());
        prop_assert!(scales.y.scale != 0.0);
        prop_assert!(scales.y.min <= scales.y.max);
        prop_assert!((0.0..=1.0).contains(&scales.origin));
    }

    #[test]
    fn projected_line_points_stay_in_unit_square(
        values in prop::collection::vec(-500.0f64..500.0, 1..64),
        x_shift in -100.0f64..100.0
    ) {
        let mut set = SeriesSet::new();
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(index, value)| (x_shift + index as f64, *value))
            .collect();
        set.push(Series::new("generated", points).expect("series")).expect("insert");

        let scales = resolve_scales(&set, None, None).expect("scales");
        for point in project_line_points(&set, scales) {
            prop_assert!((0.0..=1.0).contains(&point.x));
            prop_assert!((0.0..=1.0).contains(&point.y));
        }
    }

    #[test]
    fn generated_ticks_stay_on_axis(
        min in -10_000.0f64..10_000.0,
        span in 0.0f64..10_000.0,
        tick_count in 0usize..25,
        precision in 0u32..6,
        vertical in any::<bool>()
    ) {
        let axis = AxisRange::new(min, min + span).expect("axis");
        let rules = TickRules {
            tick_count,
            precision,
            ..TickRules::default()
        };
        let direction = if vertical {
            AxisDirection::Vertical
        } else {
            AxisDirection::Horizontal
        };
        let ticks = generate_ticks(&rules, axis, direction);
        prop_assert!(ticks.len() <= tick_count + 1);
        for tick in ticks {
            prop_assert!((0.0..=1.0).contains(&tick.position));
        }
    }

    #[test]
    fn interval_ticks_are_bounded_and_ordered(
        min in -1_000.0f64..1_000.0,
        span in 0.1f64..1_000.0,
        interval in 0.5f64..100.0
    ) {
        let axis = AxisRange::new(min, min + span).expect("axis");
        let rules = TickRules {
            interval,
            precision: 2,
            ..TickRules::default()
        };
        let ticks = generate_ticks(&rules, axis, AxisDirection::Horizontal);
        prop_assert!(ticks.len() <= 1000);
        for pair in ticks.windows(2) {
            prop_assert!(pair[0].position < pair[1].position);
        }
    }
}
