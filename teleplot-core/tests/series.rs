use teleplot_core::{AxisBounds, Sample, SeriesStore};

fn sample(time_ms: f64, measurements: &[(&str, f64)]) -> Sample {
    Sample {
        time_ms,
        measurements: measurements
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect(),
    }
}

#[test]
fn empty_store_has_no_bounds() {
    let store = SeriesStore::new();
    assert!(store.is_empty());
    assert!(store.time_bounds().is_none());
    assert!(store.value_bounds().is_none());
}

#[test]
fn append_creates_buffers_in_first_seen_order() {
    let mut store = SeriesStore::new();
    let created = store.append(&sample(0.0, &[("Gyro, X", 1.0), ("Gyro, Y", 2.0)]));
    assert_eq!(created, vec![0, 1]);
    assert_eq!(store.name(0), "Gyro, X");
    assert_eq!(store.name(1), "Gyro, Y");

    let created = store.append(&sample(10.0, &[("Gyro, Y", 3.0), ("Accel, Z", 4.0)]));
    assert_eq!(created, vec![2]);
    assert_eq!(store.name(2), "Accel, Z");
    assert_eq!(store.len(), 3);
}

#[test]
fn buffers_stay_aligned_and_append_only() {
    let mut store = SeriesStore::new();
    store.append(&sample(0.0, &[("A", 1.0), ("B", 5.0)]));
    store.append(&sample(10.0, &[("A", 2.0)]));
    store.append(&sample(20.0, &[("A", 3.0), ("B", 6.0)]));

    let a = store.buffer(0);
    assert_eq!(a.times, vec![0.0, 10.0, 20.0]);
    assert_eq!(a.values, vec![1.0, 2.0, 3.0]);

    let b = store.buffer(1);
    assert_eq!(b.times, vec![0.0, 20.0]);
    assert_eq!(b.values, vec![5.0, 6.0]);
}

#[test]
fn value_bounds_apply_five_percent_margin_each_side() {
    let mut store = SeriesStore::new();
    store.append(&sample(0.0, &[("A", 1.0), ("pad", 0.0)]));
    store.append(&sample(10.0, &[("A", 2.0)]));
    store.append(&sample(20.0, &[("A", 3.0)]));

    // Only series A matters for the max; pad holds the min at 0.0.
    let bounds = store.value_bounds().expect("nonzero span");
    assert_eq!(
        bounds,
        AxisBounds {
            min: 0.0 - 3.0 * 0.05,
            max: 3.0 + 3.0 * 0.05
        }
    );
}

#[test]
fn value_bounds_for_unit_step_series() {
    let mut store = SeriesStore::new();
    store.append(&sample(0.0, &[("A", 1.0)]));
    store.append(&sample(10.0, &[("A", 2.0)]));
    store.append(&sample(20.0, &[("A", 3.0)]));
    let bounds = store.value_bounds().expect("span of 2.0");
    assert!((bounds.min - 0.9).abs() < 1e-12);
    assert!((bounds.max - 3.1).abs() < 1e-12);
}

#[test]
fn bounds_are_global_across_all_series() {
    let mut store = SeriesStore::new();
    store.append(&sample(0.0, &[("A", 10.0)]));
    store.append(&sample(100.0, &[("B", -10.0)]));
    let time = store.time_bounds().expect("time span");
    assert!((time.min - (-5.0)).abs() < 1e-12);
    assert!((time.max - 105.0).abs() < 1e-12);
    let value = store.value_bounds().expect("value span");
    assert!((value.min - (-11.0)).abs() < 1e-12);
    assert!((value.max - 11.0).abs() < 1e-12);
}

#[test]
fn zero_span_leaves_axis_unchanged() {
    let mut store = SeriesStore::new();
    store.append(&sample(5.0, &[("A", 1.0)]));
    // Single point: both spans are exactly zero.
    assert!(store.time_bounds().is_none());
    assert!(store.value_bounds().is_none());

    store.append(&sample(5.0, &[("A", 2.0)]));
    // Time span still zero, value span now 1.0.
    assert!(store.time_bounds().is_none());
    assert!(store.value_bounds().is_some());
}
