//! Median computation over timing samples.

use crate::error::StatsError;
use crate::record::{ExecRecord, MedianRecord};

/// Compute the median of a sample slice.
///
/// Standard definition: the middle value for odd-length input, the average
/// of the two middle values for even-length input. Returns `None` if the
/// slice is empty.
pub fn median(samples: &[f64]) -> Option<f64> {
    let n = samples.len();
    if n == 0 {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    if n % 2 == 0 {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Some(sorted[n / 2])
    }
}

/// Derive the median for every record.
///
/// Input order and cardinality are preserved. Fails if any record carries no
/// timing samples.
pub fn compute_medians(records: Vec<ExecRecord>) -> Result<Vec<MedianRecord>, StatsError> {
    records
        .into_iter()
        .map(|record| {
            let median = median(&record.timings).ok_or_else(|| StatsError::EmptyTimings {
                function_id: record.function_id.clone(),
                schedule_id: record.schedule_id.clone(),
            })?;
            Ok(MedianRecord {
                function_id: record.function_id,
                schedule_id: record.schedule_id,
                timings: record.timings,
                median,
            })
        })
        .collect()
}
