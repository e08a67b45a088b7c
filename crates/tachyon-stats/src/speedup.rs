//! Speedup derivation against no-schedule baselines.

use std::collections::HashMap;

use crate::error::StatsError;
use crate::record::{MedianRecord, SpeedupRecord};

/// Map each function to the median of its no-schedule baseline record.
///
/// A duplicate baseline for the same function overwrites the earlier entry;
/// the last record in iteration order wins.
pub fn baseline_medians(records: &[MedianRecord]) -> HashMap<String, f64> {
    let mut baselines = HashMap::new();
    for record in records {
        if record.is_baseline() {
            baselines.insert(record.function_id.clone(), record.median);
        }
    }
    baselines
}

/// Derive the speedup over the baseline for every record.
///
/// `speedup = baseline_median / median`. Input order is preserved. Fails if
/// a record's function has no baseline variant anywhere in the input, or if
/// a record's median is zero.
pub fn compute_speedups(records: Vec<MedianRecord>) -> Result<Vec<SpeedupRecord>, StatsError> {
    let baselines = baseline_medians(&records);

    records
        .into_iter()
        .map(|record| {
            let baseline =
                *baselines
                    .get(&record.function_id)
                    .ok_or_else(|| StatsError::MissingBaseline {
                        function_id: record.function_id.clone(),
                    })?;
            if record.median == 0.0 {
                return Err(StatsError::ZeroMedian {
                    function_id: record.function_id.clone(),
                    schedule_id: record.schedule_id.clone(),
                });
            }
            Ok(SpeedupRecord {
                speedup: baseline / record.median,
                function_id: record.function_id,
                schedule_id: record.schedule_id,
                timings: record.timings,
                median: record.median,
            })
        })
        .collect()
}
