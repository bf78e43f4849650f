use std::f64::consts::FRAC_PI_2;

use chart_geometry::core::radial::{SPOKE_OVERHANG, slot_angle};
use chart_geometry::core::{
    Area, Series, SeriesSet, Tick, project_radial_points, radial_rings, radial_spokes,
    radial_tick_labels, resolve_scales,
};

fn ramp() -> SeriesSet {
    let mut set = SeriesSet::new();
    set.push(
        Series::new("ramp", [(0.0, 1.0), (1.0, 2.0), (2.0, 3.0), (3.0, 4.0)]).expect("series"),
    )
    .expect("insert");
    set
}

#[test]
fn samples_advance_clockwise_from_top() {
    let set = ramp();
    let scales = resolve_scales(&set, None, None).expect("scales");
    let points = project_radial_points(&set, scales);
    assert_eq!(points.len(), 4);

    assert!((points[0].angle - FRAC_PI_2).abs() <= 1e-12);
    assert!(points[1].angle.abs() <= 1e-12);
    assert!((points[1].radius_fraction - 0.5).abs() <= 1e-12);
    assert!((points[3].radius_fraction - 1.0).abs() <= 1e-12);

    let area = Area::new(0.0, 0.0, 200.0, 200.0);
    let (x, y) = points[1].position(area);
    assert!((x - 50.0).abs() <= 1e-9);
    assert!((y - 100.0).abs() <= 1e-9);
}

#[test]
fn samples_outside_explicit_value_range_are_dropped() {
    let set = ramp();
    let scales = resolve_scales(&set, None, Some([0.0, 3.0])).expect("scales");
    let points = project_radial_points(&set, scales);
    assert_eq!(points.len(), 3);
    assert!(points.iter().all(|point| point.yval <= 3.0));
}

#[test]
fn rings_invert_top_down_tick_positions() {
    let ticks = vec![Tick::new(1.0, "0"), Tick::new(0.5, "2"), Tick::new(0.0, "4")];
    let rings = radial_rings(&ticks);
    let fractions: Vec<f64> = rings.iter().map(|ring| ring.radius_fraction).collect();
    assert_eq!(fractions, vec![0.0, 0.5, 1.0]);
    assert_eq!(rings[2].label, "4");
    assert_eq!(rings[1].radius(Area::new(0.0, 0.0, 300.0, 200.0)), 50.0);
}

#[test]
fn spokes_extend_past_outer_ring() {
    let ticks: Vec<Tick> = (0..4).map(|i| Tick::new(i as f64 / 4.0, i.to_string())).collect();
    let area = Area::new(0.0, 0.0, 200.0, 200.0);
    let spokes = radial_spokes(&ticks, area);
    assert_eq!(spokes.len(), 4);
    assert_eq!(spokes[0].start, (100.0, 100.0));
    assert!((spokes[0].end.0 - 100.0).abs() <= 1e-9);
    assert!((spokes[0].end.1 - (-SPOKE_OVERHANG)).abs() <= 1e-9);
    assert!((spokes[2].angle - slot_angle(2, 4)).abs() <= 1e-12);
}

#[test]
fn labels_on_lower_half_are_turned_upright() {
    let ticks: Vec<Tick> = (0..6).map(|i| Tick::new(0.0, format!("c{i}"))).collect();
    let labels = radial_tick_labels(&ticks, Area::new(0.0, 0.0, 200.0, 200.0));
    let flipped: Vec<bool> = labels.iter().map(|label| label.flipped).collect();
    assert_eq!(flipped, vec![false, false, true, true, true, false]);

    let top = &labels[0];
    assert!(top.rotation.abs() <= 1e-12);
    assert!((top.y - (-10.0)).abs() <= 1e-9);
    assert_eq!(top.baseline_shift, 0.0);
    assert_eq!(labels[3].label, "c3");
}

#[test]
fn slot_angle_handles_empty_category_set() {
    assert_eq!(slot_angle(0, 0), FRAC_PI_2);
    assert!((slot_angle(1, 2) - (FRAC_PI_2 - std::f64::consts::PI)).abs() <= 1e-12);
}
