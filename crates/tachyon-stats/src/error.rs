//! Error types for statistics derivation.

use std::fmt;

/// Errors that can occur while deriving medians and speedups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A record carried no timing samples, so its median is undefined.
    EmptyTimings {
        /// Function the record belongs to.
        function_id: String,
        /// Schedule variant of the record.
        schedule_id: String,
    },
    /// No no-schedule baseline record exists for a function.
    MissingBaseline {
        /// Function with no baseline variant anywhere in the input.
        function_id: String,
    },
    /// A record's median is zero, so its speedup is undefined.
    ZeroMedian {
        /// Function the record belongs to.
        function_id: String,
        /// Schedule variant of the record.
        schedule_id: String,
    },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTimings {
                function_id,
                schedule_id,
            } => write!(
                f,
                "record '{function_id}' / '{schedule_id}' has no timing samples"
            ),
            Self::MissingBaseline { function_id } => write!(
                f,
                "no no_schedule baseline found for function '{function_id}'"
            ),
            Self::ZeroMedian {
                function_id,
                schedule_id,
            } => write!(
                f,
                "record '{function_id}' / '{schedule_id}' has a zero median"
            ),
        }
    }
}

impl std::error::Error for StatsError {}
