//! Terminal output formatting for fused benchmark results.

use tachyon_stats::SpeedupRecord;

/// Print fused records as a formatted table.
pub fn print_speedup_table(records: &[SpeedupRecord]) {
    if records.is_empty() {
        println!("  No fused records to display.");
        return;
    }

    // Compute column widths.
    let max_function = records
        .iter()
        .map(|r| r.function_id.len())
        .max()
        .unwrap_or(8)
        .max(8);
    let max_schedule = records
        .iter()
        .map(|r| r.schedule_id.len())
        .max()
        .unwrap_or(8)
        .max(8);

    // Header.
    println!();
    println!(
        "  {:<fw$}  {:<sw$}  {:>12}  {:>8}  {:>7}",
        "Function",
        "Schedule",
        "Median (s)",
        "Speedup",
        "Samples",
        fw = max_function,
        sw = max_schedule
    );
    println!(
        "  {:-<fw$}  {:-<sw$}  {:->12}  {:->8}  {:->7}",
        "",
        "",
        "",
        "",
        "",
        fw = max_function,
        sw = max_schedule
    );

    for record in records {
        println!(
            "  {:<fw$}  {:<sw$}  {:>12.6}  {:>7.2}x  {:>7}",
            record.function_id,
            record.schedule_id,
            record.median,
            record.speedup,
            record.timings.len(),
            fw = max_function,
            sw = max_schedule
        );
    }
    println!();
}
