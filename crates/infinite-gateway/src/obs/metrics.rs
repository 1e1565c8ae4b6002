//! In-process metrics registry for the service.
//!
//! Counter and histogram families with dynamic labels backed by `DashMap`.
//! Labels are flattened into sorted key vectors so a label set has exactly one
//! identity regardless of the order callers pass it in. Rendering sorts series
//! by that key, so two scrapes with no traffic in between are byte-identical.
//!
//! Every series is mutated while its shard write guard is held and read under
//! the shard read guard, so a scrape never sees a half-applied observation.
//! No ordering is promised across series within one scrape.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use infinite_core::error::{InfiniteError, Result};

/// Request counter: `{method, endpoint, status}`.
pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
/// Request latency histogram: `{method, endpoint}`.
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";
/// Successful predictions: `{model}`.
pub const PREDICTIONS_TOTAL: &str = "predictions_total";

/// Content type of the text exposition.
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

type LabelKey = Vec<(String, String)>;

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// `{k="v",...}` or the empty string when there are no labels.
fn label_block(key: &[(String, String)], le: Option<&str>) -> String {
    let mut parts: Vec<String> = key
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect();
    if let Some(le) = le {
        parts.push(format!("le=\"{}\"", le));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!("{{{}}}", parts.join(","))
    }
}

/// Float rendering that always keeps a fractional part (`1.0`, `0.005`).
fn fmt_float(v: f64) -> String {
    format!("{:?}", v)
}

fn micros_to_secs(micros: u64) -> f64 {
    micros as f64 / 1_000_000.0
}

fn write_header(out: &mut String, name: &str, help: &str, kind: &str) {
    let _ = writeln!(out, "# HELP {} {}", name, help);
    let _ = writeln!(out, "# TYPE {} {}", name, kind);
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value. The series is created at zero first.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value of one series (0 if never observed).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Number of distinct label combinations seen so far.
    pub fn series(&self) -> usize {
        self.map.len()
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        write_header(out, name, help, "counter");
        let mut rows: Vec<(LabelKey, u64)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, val) in rows {
            let _ = writeln!(out, "{}{} {}", name, label_block(&key, None), val);
        }
    }
}

/// Number of finite histogram buckets.
pub const BUCKET_COUNT: usize = 14;

// Fixed buckets in microseconds, mirroring the Prometheus client defaults:
// 5ms, 10ms, 25ms, 50ms, 75ms, 100ms, 250ms, 500ms, 750ms, 1s, 2.5s, 5s, 7.5s, 10s
const BUCKETS_MICROS: [u64; BUCKET_COUNT] = [
    5_000, 10_000, 25_000, 50_000, 75_000, 100_000, 250_000, 500_000, 750_000, 1_000_000,
    2_500_000, 5_000_000, 7_500_000, 10_000_000,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistogramSnapshot {
    pub count: u64,
    pub sum_micros: u64,
    /// Cumulative: `buckets[i]` counts every observation `<= BUCKETS_MICROS[i]`.
    pub buckets: [u64; BUCKET_COUNT],
}

impl HistogramSnapshot {
    fn record(&mut self, micros: u64) {
        self.count += 1;
        self.sum_micros = self.sum_micros.saturating_add(micros);
        for (i, &b) in BUCKETS_MICROS.iter().enumerate() {
            if micros <= b {
                self.buckets[i] += 1;
            }
        }
    }

    pub fn sum_secs(&self) -> f64 {
        micros_to_secs(self.sum_micros)
    }
}

#[derive(Default)]
pub struct HistogramVec {
    map: DashMap<LabelKey, HistogramSnapshot>,
}

impl HistogramVec {
    /// Observe a duration and increment cumulative buckets.
    pub fn observe(&self, labels: &[(&str, &str)], duration: Duration) {
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
        self.observe_micros(labels, micros);
    }

    /// Observe a value given in seconds.
    ///
    /// Negative and non-finite values are rejected and nothing is recorded.
    pub fn observe_secs(&self, labels: &[(&str, &str)], secs: f64) -> Result<()> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(InfiniteError::InvalidObservation(format!(
                "duration must be a finite, non-negative number of seconds (got {secs})"
            )));
        }
        // `as` saturates for values beyond u64::MAX.
        self.observe_micros(labels, (secs * 1_000_000.0).round() as u64);
        Ok(())
    }

    fn observe_micros(&self, labels: &[(&str, &str)], micros: u64) {
        let mut hist = self.map.entry(label_key(labels)).or_default();
        hist.record(micros);
    }

    /// Copy of one series (`None` if never observed).
    pub fn snapshot(&self, labels: &[(&str, &str)]) -> Option<HistogramSnapshot> {
        self.map.get(&label_key(labels)).map(|h| *h)
    }

    /// Render in Prometheus text exposition format (unit: seconds).
    fn render(&self, name: &str, help: &str, out: &mut String) {
        write_header(out, name, help, "histogram");
        let mut rows: Vec<(LabelKey, HistogramSnapshot)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), *r.value()))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        for (key, hist) in rows {
            for (i, &le) in BUCKETS_MICROS.iter().enumerate() {
                let le = fmt_float(micros_to_secs(le));
                let _ = writeln!(
                    out,
                    "{}_bucket{} {}",
                    name,
                    label_block(&key, Some(&le)),
                    hist.buckets[i]
                );
            }
            let _ = writeln!(
                out,
                "{}_bucket{} {}",
                name,
                label_block(&key, Some("+Inf")),
                hist.count
            );
            let labels = label_block(&key, None);
            let _ = writeln!(out, "{}_count{} {}", name, labels, hist.count);
            let _ = writeln!(out, "{}_sum{} {}", name, labels, fmt_float(hist.sum_secs()));
        }
    }
}

/// All metric families exposed by the service.
#[derive(Default)]
pub struct ServiceMetrics {
    pub http_requests: CounterVec,
    pub http_request_duration: HistogramVec,
    pub predictions: CounterVec,
}

impl ServiceMetrics {
    /// Record one finished request: counter by status, latency by route.
    pub fn record_request(&self, method: &str, endpoint: &str, status: u16, elapsed: Duration) {
        let status = status.to_string();
        self.http_request_duration
            .observe(&[("method", method), ("endpoint", endpoint)], elapsed);
        self.http_requests.inc(&[
            ("method", method),
            ("endpoint", endpoint),
            ("status", status.as_str()),
        ]);
    }

    pub fn record_prediction(&self, model: &str) {
        self.predictions.inc(&[("model", model)]);
    }

    /// Render every family in a fixed order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.http_requests
            .render(HTTP_REQUESTS_TOTAL, "Total HTTP requests", &mut out);
        self.http_request_duration
            .render(HTTP_REQUEST_DURATION_SECONDS, "HTTP request latency", &mut out);
        self.predictions
            .render(PREDICTIONS_TOTAL, "Total predictions made", &mut out);
        out
    }
}
