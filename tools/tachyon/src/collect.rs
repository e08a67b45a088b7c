//! Collection of per-job timing files from the parts directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tachyon_stats::ExecRecord;

use crate::store;
use crate::verbose::vprintln;

/// Collect all raw records from timing files under `dir`.
///
/// Selects regular files whose name starts with `prefix` (non-recursive),
/// reads them in filename order, and concatenates their records preserving
/// file-then-record order.
pub fn collect_parts(dir: &Path, prefix: &str) -> Result<Vec<ExecRecord>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("reading parts dir {}", dir.display()))?;

    let mut part_files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry?;
        let selected = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(prefix));
        if selected && entry.path().is_file() {
            part_files.push(entry.path());
        }
    }

    // Filename order keeps the fused sequence stable across platforms.
    part_files.sort();

    let mut records = Vec::new();
    for path in &part_files {
        let part = store::read_parts_file(path)?;
        vprintln!("  {}: {} records", path.display(), part.len());
        records.extend(part);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_part(dir: &Path, name: &str, records: &str) {
        std::fs::write(dir.join(name), records).unwrap();
    }

    #[test]
    fn collects_only_prefixed_files_in_filename_order() {
        let dir = tempfile::tempdir().unwrap();
        write_part(
            dir.path(),
            "final_exec_times_1.json",
            r#"[{"function_id":"f2","schedule_id":"no_schedule","timings":[2.0]}]"#,
        );
        write_part(
            dir.path(),
            "final_exec_times_0.json",
            r#"[{"function_id":"f1","schedule_id":"no_schedule","timings":[1.0]}]"#,
        );
        write_part(dir.path(), "notes.txt", "scratch");

        let records = collect_parts(dir.path(), "final_exec_times").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].function_id, "f1");
        assert_eq!(records[1].function_id, "f2");
    }

    #[test]
    fn empty_parts_dir_yields_no_records() {
        let dir = tempfile::tempdir().unwrap();
        let records = collect_parts(dir.path(), "final_exec_times").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_parts_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("parts");

        let err = collect_parts(&missing, "final_exec_times").unwrap_err();
        assert!(err.to_string().contains("reading parts dir"));
    }

    #[test]
    fn corrupt_part_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        write_part(dir.path(), "final_exec_times_0.json", "{ truncated");

        let err = collect_parts(dir.path(), "final_exec_times").unwrap_err();
        assert!(err.to_string().contains("parsing timing file"));
    }
}
