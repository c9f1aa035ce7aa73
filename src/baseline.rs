use tracing::debug;

use crate::{CompareError, table::ResultRecord};

pub const BASELINE_MARKER: &str = "Sequential";
pub const MISSING_AREA: &str = "N/A";
const MISSING_WALL_TIME: &str = "0";

/// The sequential reference run.
#[derive(Clone, Debug, PartialEq)]
pub struct Baseline {
    pub name: String,
    pub area: String,
    pub wall_time: f64,
}

/// Picks the first record whose name contains `Sequential`; later matches are ignored.
///
/// A baseline whose wall time is not a number is an error rather than a
/// silently zeroed value, since every speedup is derived from it.
pub fn resolve_baseline(records: &[ResultRecord]) -> Result<Option<Baseline>, CompareError> {
    let Some(record) = records
        .iter()
        .find(|record| record.name().unwrap_or_default().contains(BASELINE_MARKER))
    else {
        return Ok(None);
    };
    let name = record.name().unwrap_or_default().to_string();
    let area = record.area().unwrap_or(MISSING_AREA).to_string();
    let raw_time = record.wall_time().unwrap_or(MISSING_WALL_TIME);
    let wall_time = raw_time.trim().parse::<f64>().map_err(|_| {
        CompareError::invalid_baseline(format!("wall time {raw_time:?} of {name} is not a number"))
    })?;
    debug!(%name, %area, wall_time, "resolved sequential baseline");
    Ok(Some(Baseline {
        name,
        area,
        wall_time,
    }))
}
