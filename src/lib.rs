//! Correctness and speedup audit of parallel catchment-area benchmark runs.
//! Compares a parallel result table against the sequential reference table and
//! reports tolerance matches, speedups and efficiency classes.

pub mod audit;
pub mod baseline;
pub mod cli;
pub mod config;
pub mod errors;
pub mod report;
pub mod speedup;
pub mod table;
pub mod tolerance;

pub use crate::audit::{AuditOutcome, ComparisonRow, audit_records, run_audit};
pub use crate::baseline::{Baseline, resolve_baseline};
pub use crate::config::AuditConfig;
pub use crate::errors::CompareError;
pub use crate::report::render_report;
pub use crate::speedup::{
    Classification, SpeedupAnalysis, SpeedupEntry, ThresholdCheck, ThresholdGate,
    parse_or_default, parse_thread_count,
};
pub use crate::table::{ResultRecord, first_present, load_table};
pub use crate::tolerance::{ComparisonResult, compare, compare_with_tolerance};
