use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::CompareError;

pub const CONFIG_ENV_VAR: &str = "CATCHCOMPARE_CONFIG";

/// Tolerance and efficiency thresholds used by an audit run.
///
/// Every field is optional in the JSON file; absent keys keep their default.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuditConfig {
    /// Relative error below which two areas are considered equal.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Fraction of ideal speedup rated "Good" (the expected minimum).
    #[serde(default = "default_good_efficiency")]
    pub good_efficiency: f64,
    /// Fraction of ideal speedup still rated "Acceptable".
    #[serde(default = "default_acceptable_efficiency")]
    pub acceptable_efficiency: f64,
    /// Fraction of ideal speedup shown as the expected maximum.
    #[serde(default = "default_ideal_efficiency")]
    pub ideal_efficiency: f64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            good_efficiency: default_good_efficiency(),
            acceptable_efficiency: default_acceptable_efficiency(),
            ideal_efficiency: default_ideal_efficiency(),
        }
    }
}

fn default_tolerance() -> f64 {
    1e-6
}
fn default_good_efficiency() -> f64 {
    0.8
}
fn default_acceptable_efficiency() -> f64 {
    0.6
}
fn default_ideal_efficiency() -> f64 {
    1.0
}

impl AuditConfig {
    /// Resolves the configuration from `CATCHCOMPARE_CONFIG`, falling back to defaults.
    pub fn load() -> Result<Self, CompareError> {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, CompareError> {
        if !path.exists() {
            return Err(CompareError::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let data = fs::read(path).map_err(|e| CompareError::config(e.to_string()))?;
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let config: AuditConfig =
            serde_json::from_slice(&data).map_err(|e| CompareError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CompareError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(CompareError::config(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        if self.acceptable_efficiency > self.good_efficiency {
            return Err(CompareError::config(
                "acceptable_efficiency must not exceed good_efficiency",
            ));
        }
        Ok(())
    }
}

fn config_file_path() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
