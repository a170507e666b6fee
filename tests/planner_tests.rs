mod common;
use chrono::TimeDelta;
use common::{drivers, range, ts};
use dlverify::core::FetchPlan;
use dlverify::core::planner::{driver_batches, time_windows};
use dlverify::models::DateRange;

#[test]
fn test_windows_cover_range_contiguously() {
    let r = range("2025-01-01T00:00:00Z", "2025-01-31T00:00:00Z");
    let windows = time_windows(&r, 14);

    assert_eq!(windows.len(), 3);
    assert_eq!(windows[0].from, r.from());
    assert_eq!(windows[2].to, r.to());
    for pair in windows.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
    assert_eq!(windows[0].to - windows[0].from, TimeDelta::days(14));
    assert_eq!(windows[1].to - windows[1].from, TimeDelta::days(14));
    // last window is clipped
    assert_eq!(windows[2].to - windows[2].from, TimeDelta::days(2));
}

#[test]
fn test_short_range_is_a_single_window() {
    let r = range("2025-03-14T00:00:00Z", "2025-03-14T23:59:59Z");
    let windows = time_windows(&r, 14);
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].from, r.from());
    assert_eq!(windows[0].to, r.to());
}

#[test]
fn test_range_of_exact_chunks_has_no_empty_tail() {
    let r = range("2025-01-01T00:00:00Z", "2025-01-29T00:00:00Z");
    assert_eq!(time_windows(&r, 14).len(), 2);
}

#[test]
fn test_empty_or_inverted_range_is_rejected() {
    let t = ts("2025-01-01T00:00:00Z");
    assert!(DateRange::new(t, t).is_err());
    assert!(DateRange::new(t, t - TimeDelta::hours(1)).is_err());
}

#[test]
fn test_driver_batches_keep_order_and_cap_size() {
    let ds = drivers(120);
    let batches = driver_batches(&ds, 50);

    assert_eq!(batches.iter().map(|b| b.len()).collect::<Vec<_>>(), vec![50, 50, 20]);
    assert_eq!(batches[0][0].id, "d0");
    assert_eq!(batches[2][19].id, "d119");
}

#[test]
fn test_no_drivers_means_no_batches() {
    let ds = drivers(0);
    assert!(driver_batches(&ds, 50).is_empty());

    let r = range("2025-01-01T00:00:00Z", "2025-01-31T00:00:00Z");
    let plan = FetchPlan::new(&r, &ds, 14, 50);
    assert!(plan.is_empty());
    assert_eq!(plan.units().count(), 0);
}

#[test]
fn test_plan_is_window_major() {
    let ds = drivers(3);
    let r = range("2025-01-01T00:00:00Z", "2025-01-29T00:00:00Z");
    let plan = FetchPlan::new(&r, &ds, 14, 2);

    assert_eq!(plan.total_units(), 4);
    let order: Vec<(usize, usize, usize)> = plan
        .units()
        .map(|u| (u.window_index, u.batch_index, u.drivers.len()))
        .collect();
    assert_eq!(order, vec![(0, 0, 2), (0, 1, 1), (1, 0, 2), (1, 1, 1)]);
}

#[test]
fn test_hundred_twenty_drivers_over_ten_days() {
    let ds = drivers(120);
    let r = range("2025-01-01T00:00:00Z", "2025-01-11T00:00:00Z");
    let plan = FetchPlan::new(&r, &ds, 14, 50);

    assert_eq!(plan.windows().len(), 1);
    assert_eq!(plan.batches().len(), 3);
    assert_eq!(plan.total_units(), 3);
}

#[test]
fn test_batch_count_is_ceiling() {
    for (n, b) in [(1, 50), (50, 50), (51, 50), (7, 3), (9, 3)] {
        let ds = drivers(n);
        let batches = driver_batches(&ds, b);
        assert_eq!(batches.len(), n.div_ceil(b));
        let last = if n % b == 0 { b } else { n % b };
        assert_eq!(batches.last().unwrap().len(), last);
    }
}
