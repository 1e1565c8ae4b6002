#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use infinite_gateway::obs::metrics::{CounterVec, HistogramVec, ServiceMetrics};

#[test]
fn counter_creates_series_at_zero_and_ignores_label_order() {
    let c = CounterVec::default();
    assert_eq!(c.get(&[("a", "1")]), 0);
    c.inc(&[("a", "1"), ("b", "2")]);
    c.inc(&[("b", "2"), ("a", "1")]);
    assert_eq!(c.get(&[("a", "1"), ("b", "2")]), 2);
    assert_eq!(c.series(), 1);
}

#[test]
fn concurrent_increments_are_not_lost() {
    const THREADS: usize = 16;
    const PER_THREAD: usize = 500;
    let m = ServiceMetrics::default();

    std::thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..PER_THREAD {
                    m.http_requests
                        .inc(&[("method", "GET"), ("endpoint", "health"), ("status", "200")]);
                }
            });
        }
    });

    let n = THREADS * PER_THREAD;
    let out = m.render();
    let line = format!(
        "http_requests_total{{endpoint=\"health\",method=\"GET\",status=\"200\"}} {n}"
    );
    assert!(out.contains(&line), "missing `{line}` in:\n{out}");
}

#[test]
fn histogram_buckets_are_cumulative() {
    let h = HistogramVec::default();
    let labels = [("method", "GET"), ("endpoint", "ready")];
    h.observe(&labels, Duration::from_millis(3));
    h.observe(&labels, Duration::from_millis(60));
    h.observe(&labels, Duration::from_secs(20));

    let s = h.snapshot(&labels).unwrap();
    assert_eq!(s.count, 3);
    // 5ms, 10ms, 25ms, 50ms, 75ms ...
    assert_eq!(s.buckets[0], 1);
    assert_eq!(s.buckets[3], 1);
    assert_eq!(s.buckets[4], 2);
    assert_eq!(s.buckets[13], 2);
    assert!(s.buckets.windows(2).all(|w| w[0] <= w[1]));
    assert!((s.sum_secs() - 20.063).abs() < 1e-9);
}

#[test]
fn histogram_bound_is_inclusive() {
    let h = HistogramVec::default();
    h.observe(&[], Duration::from_millis(5));
    assert_eq!(h.snapshot(&[]).unwrap().buckets[0], 1);
}

#[test]
fn negative_and_non_finite_observations_are_rejected() {
    let h = HistogramVec::default();
    for bad in [-0.5, f64::NAN, f64::INFINITY] {
        let err = h.observe_secs(&[("k", "v")], bad).expect_err("must reject");
        assert_eq!(err.client_code().as_str(), "INVALID_OBSERVATION");
    }
    assert!(h.snapshot(&[("k", "v")]).is_none());

    h.observe_secs(&[("k", "v")], 0.0).unwrap();
    assert_eq!(h.snapshot(&[("k", "v")]).unwrap().count, 1);
}

#[test]
fn render_is_sorted_and_stable() {
    let m = ServiceMetrics::default();
    m.record_request("POST", "predict", 400, Duration::from_millis(1));
    m.record_request("GET", "health", 200, Duration::from_millis(2));
    m.record_request("GET", "ready", 503, Duration::from_millis(2));
    m.record_prediction("v1");

    let a = m.render();
    let b = m.render();
    assert_eq!(a, b);

    let health = a.find("endpoint=\"health\",method=\"GET\",status=\"200\"").unwrap();
    let predict = a.find("endpoint=\"predict\",method=\"POST\",status=\"400\"").unwrap();
    assert!(health < predict);

    assert!(a.contains("# HELP http_requests_total Total HTTP requests"));
    assert!(a.contains("# TYPE http_request_duration_seconds histogram"));
    assert!(a.contains(
        "http_request_duration_seconds_bucket{endpoint=\"health\",method=\"GET\",le=\"0.005\"} 1"
    ));
    assert!(a.contains(
        "http_request_duration_seconds_bucket{endpoint=\"health\",method=\"GET\",le=\"+Inf\"} 1"
    ));
    assert!(a.contains(
        "http_request_duration_seconds_count{endpoint=\"health\",method=\"GET\"} 1"
    ));
    assert!(a.contains("predictions_total{model=\"v1\"} 1"));
}

#[test]
fn label_values_are_escaped() {
    let c = ServiceMetrics::default();
    c.predictions.inc(&[("model", "a\"b\\c\nd")]);
    let out = c.render();
    assert!(out.contains(r#"predictions_total{model="a\"b\\c\nd"} 1"#), "{out}");
}
