use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    AuditConfig, CompareError,
    baseline::{Baseline, MISSING_AREA, resolve_baseline},
    speedup::{SpeedupAnalysis, SpeedupEntry, ThresholdGate, thread_runs},
    table::{ResultRecord, load_table},
    tolerance::{ComparisonResult, compare_with_tolerance},
};

/// One threaded run as shown in the area comparison table.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub entry: SpeedupEntry,
    pub area: String,
    /// `None` when there is no baseline to compare against.
    pub comparison: Option<ComparisonResult>,
}

impl ComparisonRow {
    pub fn is_mismatch(&self) -> bool {
        self.comparison.is_some_and(|cmp| !cmp.matches)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuditOutcome {
    pub sequential_path: PathBuf,
    pub parallel_path: PathBuf,
    pub sequential_count: usize,
    pub parallel_count: usize,
    pub tolerance: f64,
    pub baseline: Option<Baseline>,
    pub rows: Vec<ComparisonRow>,
    pub analysis: SpeedupAnalysis,
}

impl AuditOutcome {
    /// True when every comparison matched, including when none were made.
    pub fn all_match(&self) -> bool {
        self.rows
            .iter()
            .filter_map(|row| row.comparison)
            .all(|cmp| cmp.matches)
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows.iter().filter(|row| row.is_mismatch())
    }
}

/// Checks both paths, sequential first, before reading either table.
pub fn run_audit(
    sequential_path: &Path,
    parallel_path: &Path,
    config: &AuditConfig,
) -> Result<AuditOutcome, CompareError> {
    if !sequential_path.exists() {
        return Err(CompareError::missing_file("Sequential", sequential_path));
    }
    if !parallel_path.exists() {
        return Err(CompareError::missing_file("Parallel", parallel_path));
    }
    let sequential = load_table(sequential_path)?;
    let parallel = load_table(parallel_path)?;
    debug!(
        sequential = sequential.len(),
        parallel = parallel.len(),
        "loaded result tables"
    );
    let mut outcome = audit_records(&sequential, &parallel, config)?;
    outcome.sequential_path = sequential_path.to_path_buf();
    outcome.parallel_path = parallel_path.to_path_buf();
    Ok(outcome)
}

pub fn audit_records(
    sequential: &[ResultRecord],
    parallel: &[ResultRecord],
    config: &AuditConfig,
) -> Result<AuditOutcome, CompareError> {
    let baseline = resolve_baseline(sequential)?;
    if baseline.is_none() {
        warn!("no sequential baseline found, comparisons and speedups skipped");
    }
    let gate = ThresholdGate::new(config);
    let analysis = SpeedupAnalysis::analyze(parallel, baseline.as_ref(), &gate);
    let rows = thread_runs(parallel)
        .zip(&analysis.entries)
        .map(|(record, entry)| {
            let area = record.area().unwrap_or(MISSING_AREA).to_string();
            let comparison = baseline
                .as_ref()
                .map(|b| compare_with_tolerance(&b.area, &area, config.tolerance));
            if let Some(cmp) = comparison.filter(|cmp| !cmp.matches) {
                debug!(
                    name = %entry.name,
                    relative_error = %cmp.relative_error_label(),
                    "area mismatch"
                );
            }
            ComparisonRow {
                entry: entry.clone(),
                area,
                comparison,
            }
        })
        .collect();
    let outcome = AuditOutcome {
        sequential_path: PathBuf::new(),
        parallel_path: PathBuf::new(),
        sequential_count: sequential.len(),
        parallel_count: parallel.len(),
        tolerance: config.tolerance,
        baseline,
        rows,
        analysis,
    };
    info!(passed = outcome.all_match(), "verification finished");
    Ok(outcome)
}
