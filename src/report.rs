//! Human-readable audit report.
//!
//! Sections, in order:
//! - run header with both paths and row counts
//! - area comparison table with inline mismatch warnings
//! - PASS/FAIL verdict
//! - performance analysis (only when at least one speedup was measured)

use crate::{
    audit::{AuditOutcome, ComparisonRow},
    speedup::{Classification, SpeedupAnalysis},
};

const RULE_WIDTH: usize = 70;

pub fn render_report(outcome: &AuditOutcome) -> String {
    let mut output = String::new();
    render_header(&mut output, outcome);
    render_comparison(&mut output, outcome);
    render_verdict(&mut output, outcome);
    if outcome.analysis.has_speedups() {
        render_performance(&mut output, &outcome.analysis);
    }
    output.push('\n');
    output
}

fn banner(output: &mut String, title: &str) {
    output.push('\n');
    output.push_str(&"═".repeat(RULE_WIDTH));
    output.push_str(&format!("\n  {title}\n"));
    output.push_str(&"═".repeat(RULE_WIDTH));
    output.push_str("\n\n");
}

fn render_header(output: &mut String, outcome: &AuditOutcome) {
    banner(output, "CORRECTNESS VALIDATION");
    output.push_str(&format!(
        "Sequential file: {}\n",
        outcome.sequential_path.display()
    ));
    output.push_str(&format!(
        "Parallel file:   {}\n",
        outcome.parallel_path.display()
    ));
    output.push_str(&format!(
        "\nSequential results: {} entries\n",
        outcome.sequential_count
    ));
    output.push_str(&format!(
        "Parallel results:   {} entries\n",
        outcome.parallel_count
    ));
}

fn render_comparison(output: &mut String, outcome: &AuditOutcome) {
    banner(output, "CATCHMENT AREA COMPARISON");
    output.push_str(&format!(
        "{:<30} {:<15} {:<12} {:<10}\n",
        "Method", "Area", "Time (s)", "Speedup"
    ));
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');
    if let Some(baseline) = &outcome.baseline {
        output.push_str(&format!(
            "{:<30} {:<15} {:<12.2} {:<10}\n",
            "Sequential (baseline)", baseline.area, baseline.wall_time, "1.00×"
        ));
    }
    for row in &outcome.rows {
        render_row(output, row);
    }
}

fn render_row(output: &mut String, row: &ComparisonRow) {
    output.push_str(&format!(
        "{:<30} {:<15} {:<12.2} {:<10}\n",
        row.entry.name,
        row.area,
        row.entry.wall_time,
        row.entry.speedup_label()
    ));
    if let Some(cmp) = row.comparison.filter(|cmp| !cmp.matches) {
        output.push_str(&format!(
            "  ⚠️  Area mismatch! Error: {}\n",
            cmp.relative_error_label()
        ));
    }
}

fn render_verdict(output: &mut String, outcome: &AuditOutcome) {
    banner(output, "VERIFICATION RESULT");
    if outcome.all_match() {
        output.push_str("✅ PASSED: All parallel configurations produce correct results!\n");
        output.push_str(&format!(
            "   Areas match sequential baseline within tolerance ({:e})\n",
            outcome.tolerance
        ));
    } else {
        output.push_str("❌ FAILED: Some configurations produce incorrect results!\n");
        output.push_str("   Please investigate discrepancies above.\n");
    }
}

fn render_performance(output: &mut String, analysis: &SpeedupAnalysis) {
    banner(output, "PERFORMANCE ANALYSIS");
    output.push_str("Speedup Summary:\n");
    for entry in analysis.measured() {
        let (Some(speedup), Some(efficiency)) = (entry.speedup, entry.efficiency) else {
            continue;
        };
        output.push_str(&format!(
            "  {:<30} Speedup: {:>6.2}×  Efficiency: {:>5.1}%\n",
            entry.name, speedup, efficiency
        ));
    }

    if let Some(best) = analysis.best() {
        output.push_str(&format!("\nBest configuration: {}\n", best.name));
        output.push_str(&format!("  Speedup: {}\n", best.speedup_label()));
    }

    output.push_str("\nSpeedup Analysis:\n");
    for check in &analysis.checks {
        output.push_str(&format!(
            "  {} threads: Expected {:.1}-{:.1}×, Got {:.2}× {}\n",
            check.thread_count,
            check.expected_min,
            check.expected_max,
            check.speedup,
            status_label(check.classification)
        ));
    }
}

fn status_label(classification: Classification) -> &'static str {
    match classification {
        Classification::Good => "✅ Good",
        Classification::Acceptable => "⚠️  Acceptable",
        Classification::Poor => "❌ Poor",
    }
}
