//! JSON persistence for timing files and fused results.
//!
//! A parts file is a JSON array of raw records; the fused results file is a
//! JSON array of records carrying the derived median and speedup.

use std::path::Path;

use anyhow::{Context, Result};
use tachyon_stats::{ExecRecord, SpeedupRecord};

/// Read one per-job timing file.
pub fn read_parts_file(path: &Path) -> Result<Vec<ExecRecord>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading timing file {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing timing file {}", path.display()))
}

/// Write the fused results file, replacing any existing file.
///
/// Callers only reach this after the full sequence is derived, so a failed
/// run never leaves partial results behind.
pub fn write_results(path: &Path, records: &[SpeedupRecord]) -> Result<()> {
    let json =
        serde_json::to_string_pretty(records).context("serializing fused results to JSON")?;
    std::fs::write(path, json)
        .with_context(|| format!("writing fused results to {}", path.display()))?;
    Ok(())
}

/// Read a fused results file back for reporting.
pub fn read_results(path: &Path) -> Result<Vec<SpeedupRecord>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading fused results {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing fused results {}", path.display()))
}
