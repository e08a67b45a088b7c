//! Timing record types flowing through the fusion pipeline.

use serde::{Deserialize, Serialize};

/// Suffix on `schedule_id` marking the unscheduled baseline variant.
pub const NO_SCHEDULE_SUFFIX: &str = "no_schedule";

/// A raw timing record emitted by one execution job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecRecord {
    /// Identifier of the benchmarked function.
    pub function_id: String,
    /// Identifier of the scheduling variant applied to the function.
    pub schedule_id: String,
    /// Wall-clock measurements in seconds, one per run.
    pub timings: Vec<f64>,
}

impl ExecRecord {
    /// Returns `true` if this record is the unscheduled baseline variant.
    pub fn is_baseline(&self) -> bool {
        self.schedule_id.ends_with(NO_SCHEDULE_SUFFIX)
    }
}

/// An [`ExecRecord`] extended with the median of its timings.
#[derive(Debug, Clone, PartialEq)]
pub struct MedianRecord {
    /// Identifier of the benchmarked function.
    pub function_id: String,
    /// Identifier of the scheduling variant applied to the function.
    pub schedule_id: String,
    /// Wall-clock measurements in seconds, one per run.
    pub timings: Vec<f64>,
    /// Median of `timings` in seconds.
    pub median: f64,
}

impl MedianRecord {
    /// Returns `true` if this record is the unscheduled baseline variant.
    pub fn is_baseline(&self) -> bool {
        self.schedule_id.ends_with(NO_SCHEDULE_SUFFIX)
    }
}

/// A fully derived record: timings, median, and speedup over the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedupRecord {
    /// Identifier of the benchmarked function.
    pub function_id: String,
    /// Identifier of the scheduling variant applied to the function.
    pub schedule_id: String,
    /// Wall-clock measurements in seconds, one per run.
    pub timings: Vec<f64>,
    /// Median of `timings` in seconds.
    pub median: f64,
    /// Baseline median divided by this record's median.
    pub speedup: f64,
}
