//! Record model and summary statistics for fused benchmark timings.
//!
//! Parallel execution jobs measure each (function, schedule) pair many times
//! and emit partial timing files. This crate holds the record types those
//! files contain and the two derivation steps applied after fusion:
//! per-record medians and speedups over the unscheduled baseline variant.

/// Error types for statistics derivation.
pub mod error;
/// Timing record types flowing through the fusion pipeline.
pub mod record;
/// Speedup derivation against no-schedule baselines.
pub mod speedup;
/// Median computation over timing samples.
pub mod stats;

pub use error::StatsError;
pub use record::{ExecRecord, MedianRecord, NO_SCHEDULE_SUFFIX, SpeedupRecord};
pub use speedup::{baseline_medians, compute_speedups};
pub use stats::{compute_medians, median};
