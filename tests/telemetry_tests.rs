use chart_geometry::telemetry::{DEFAULT_FILTER, init_default_tracing, init_tracing_with_filter};

#[test]
fn tracing_installs_at_most_once() {
    let _ = init_default_tracing();
    assert!(!init_tracing_with_filter("chart_geometry=trace"));
    assert!(DEFAULT_FILTER.starts_with("chart_geometry"));
}
