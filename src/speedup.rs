//! Speedup and efficiency of the threaded runs against the sequential baseline.
//!
//! Thread counts come from the run name. Two shapes are understood:
//!
//! - `<descriptor>_<int>threads[_<suffix>]`, e.g. `omp_8threads` or `run_8`
//! - `<int>_threads[<suffix>]`, e.g. `4_threads`
//!
//! Any other name has no parsable thread count. It is treated as a single
//! thread for efficiency and left out of the threshold classification.

use std::fmt;

use tracing::debug;

use crate::{
    AuditConfig,
    baseline::Baseline,
    table::{NAME_FIELD, ResultRecord},
};

pub const THREADS_MARKER: &str = "threads";
pub const DEFAULT_THREAD_COUNT: u32 = 1;
const UNKNOWN_NAME: &str = "Unknown";

/// Parses `text` as a float, or returns `default` when it is not a number.
pub fn parse_or_default(text: &str, default: f64) -> f64 {
    text.trim().parse::<f64>().unwrap_or(default)
}

/// True for run names that take part in speedup analysis (case-insensitive).
pub fn is_thread_run(name: &str) -> bool {
    name.to_lowercase().contains(THREADS_MARKER)
}

/// Parallel records that take part in the comparison, in table order.
pub fn thread_runs(records: &[ResultRecord]) -> impl Iterator<Item = &ResultRecord> {
    records
        .iter()
        .filter(|record| is_thread_run(record.get(NAME_FIELD).unwrap_or(UNKNOWN_NAME)))
}

pub fn parse_thread_count(name: &str) -> Option<u32> {
    let (head, tail) = name.split_once('_')?;
    let token = tail.split('_').next().unwrap_or_default();
    let count = token.strip_suffix(THREADS_MARKER).unwrap_or(token);
    if let Ok(threads) = count.trim().parse::<u32>() {
        return Some(threads);
    }
    if tail.starts_with(THREADS_MARKER) {
        return head.trim().parse::<u32>().ok();
    }
    None
}

pub fn thread_count_or_default(name: &str) -> u32 {
    parse_thread_count(name).unwrap_or(DEFAULT_THREAD_COUNT)
}

/// `baseline / wall_time`, undefined for non-positive wall times.
pub fn speedup(baseline_wall_time: f64, wall_time: f64) -> Option<f64> {
    (wall_time > 0.0).then(|| baseline_wall_time / wall_time)
}

pub fn efficiency(speedup: f64, thread_count: u32) -> f64 {
    if thread_count > 0 {
        (speedup / f64::from(thread_count)) * 100.0
    } else {
        0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpeedupEntry {
    pub name: String,
    pub wall_time: f64,
    pub speedup: Option<f64>,
    pub thread_count: u32,
    pub thread_count_parsed: bool,
    pub efficiency: Option<f64>,
}

impl SpeedupEntry {
    pub fn new(name: &str, wall_time: f64, baseline: Option<&Baseline>) -> Self {
        let parsed = parse_thread_count(name);
        let thread_count = parsed.unwrap_or(DEFAULT_THREAD_COUNT);
        let speedup = baseline.and_then(|b| speedup(b.wall_time, wall_time));
        Self {
            name: name.to_string(),
            wall_time,
            speedup,
            thread_count,
            thread_count_parsed: parsed.is_some(),
            efficiency: speedup.map(|s| efficiency(s, thread_count)),
        }
    }

    /// Builds the entry for a parallel record; an unreadable wall time becomes `0.0`
    /// and leaves the speedup undefined.
    pub fn from_record(record: &ResultRecord, baseline: Option<&Baseline>) -> Self {
        let name = record.get(NAME_FIELD).unwrap_or(UNKNOWN_NAME);
        let raw_time = record.wall_time().unwrap_or("0");
        if raw_time.trim().parse::<f64>().is_err() {
            debug!(%name, raw_time, "unparsable wall time, speedup disabled for this run");
        }
        let wall_time = parse_or_default(raw_time, 0.0);
        Self::new(name, wall_time, baseline)
    }

    pub fn speedup_label(&self) -> String {
        match self.speedup {
            Some(s) => format!("{s:.2}×"),
            None => "N/A".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Good,
    Acceptable,
    Poor,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Good => write!(f, "Good"),
            Classification::Acceptable => write!(f, "Acceptable"),
            Classification::Poor => write!(f, "Poor"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdCheck {
    pub name: String,
    pub thread_count: u32,
    pub expected_min: f64,
    pub expected_max: f64,
    pub speedup: f64,
    pub classification: Classification,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdGate {
    good: f64,
    acceptable: f64,
    ideal: f64,
}

impl Default for ThresholdGate {
    fn default() -> Self {
        Self::new(&AuditConfig::default())
    }
}

impl ThresholdGate {
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            good: config.good_efficiency,
            acceptable: config.acceptable_efficiency,
            ideal: config.ideal_efficiency,
        }
    }

    pub fn classify(&self, speedup: f64, thread_count: u32) -> Classification {
        let threads = f64::from(thread_count);
        if speedup >= threads * self.good {
            Classification::Good
        } else if speedup >= threads * self.acceptable {
            Classification::Acceptable
        } else {
            Classification::Poor
        }
    }

    /// Checks every entry with a defined speedup and a parsed thread count.
    pub fn evaluate(&self, entries: &[SpeedupEntry]) -> Vec<ThresholdCheck> {
        entries
            .iter()
            .filter(|entry| entry.thread_count_parsed)
            .filter_map(|entry| {
                let speedup = entry.speedup?;
                let threads = f64::from(entry.thread_count);
                Some(ThresholdCheck {
                    name: entry.name.clone(),
                    thread_count: entry.thread_count,
                    expected_min: threads * self.good,
                    expected_max: threads * self.ideal,
                    speedup,
                    classification: self.classify(speedup, entry.thread_count),
                })
            })
            .collect()
    }
}

/// Entry with the highest defined speedup; ties keep the earliest entry.
pub fn best_configuration(entries: &[SpeedupEntry]) -> Option<&SpeedupEntry> {
    let mut best: Option<(&SpeedupEntry, f64)> = None;
    for entry in entries {
        let Some(speedup) = entry.speedup else {
            continue;
        };
        if best.is_none_or(|(_, top)| speedup > top) {
            best = Some((entry, speedup));
        }
    }
    best.map(|(entry, _)| entry)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpeedupAnalysis {
    pub entries: Vec<SpeedupEntry>,
    pub checks: Vec<ThresholdCheck>,
}

impl SpeedupAnalysis {
    pub fn analyze(
        records: &[ResultRecord],
        baseline: Option<&Baseline>,
        gate: &ThresholdGate,
    ) -> Self {
        let entries = thread_runs(records)
            .map(|record| SpeedupEntry::from_record(record, baseline))
            .collect();
        Self::from_entries(entries, gate)
    }

    pub fn from_entries(entries: Vec<SpeedupEntry>, gate: &ThresholdGate) -> Self {
        let checks = gate.evaluate(&entries);
        Self { entries, checks }
    }

    /// Entries that produced a speedup, in table order.
    pub fn measured(&self) -> impl Iterator<Item = &SpeedupEntry> {
        self.entries.iter().filter(|entry| entry.speedup.is_some())
    }

    pub fn has_speedups(&self) -> bool {
        self.measured().next().is_some()
    }

    pub fn best(&self) -> Option<&SpeedupEntry> {
        best_configuration(&self.entries)
    }
}
