pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Outcome of checking a candidate area against the baseline area.
///
/// `absolute_diff` and `relative_error` are `None` when either side did not
/// parse as a number; such a comparison never matches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonResult {
    pub matches: bool,
    pub absolute_diff: Option<f64>,
    pub relative_error: Option<f64>,
    pub tolerance: f64,
}

impl ComparisonResult {
    fn undefined(tolerance: f64) -> Self {
        Self {
            matches: false,
            absolute_diff: None,
            relative_error: None,
            tolerance,
        }
    }

    pub fn relative_error_label(&self) -> String {
        match self.relative_error {
            Some(err) => scientific(err),
            None => "undefined".to_string(),
        }
    }
}

pub fn compare(seq_area: &str, par_area: &str) -> ComparisonResult {
    compare_with_tolerance(seq_area, par_area, DEFAULT_TOLERANCE)
}

/// Relative error is normalised by the sequential value, or left absolute when
/// that value is zero.
pub fn compare_with_tolerance(seq_area: &str, par_area: &str, tolerance: f64) -> ComparisonResult {
    let (Ok(seq), Ok(par)) = (
        seq_area.trim().parse::<f64>(),
        par_area.trim().parse::<f64>(),
    ) else {
        return ComparisonResult::undefined(tolerance);
    };
    let diff = (seq - par).abs();
    let relative_error = if seq != 0.0 { diff / seq.abs() } else { diff };
    ComparisonResult {
        matches: relative_error < tolerance,
        absolute_diff: Some(diff),
        relative_error: Some(relative_error),
        tolerance,
    }
}

/// `{:.2e}` with a signed exponent of at least two digits, e.g. `1.00e-03`.
fn scientific(value: f64) -> String {
    let formatted = format!("{value:.2e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}
