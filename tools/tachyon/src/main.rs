//! Benchmark execution-time fusion tool.
//!
//! Parallel execution jobs each emit a partial timing file; this tool fuses
//! them into a single results file, deriving each record's median runtime
//! and its speedup over the unscheduled baseline variant of the same
//! function.
//!
//! Pipeline: collect parts → compute medians → compute speedups → write.

mod cli;
mod collect;
mod fuse;
mod output;
mod store;
mod verbose;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    verbose::init(cli.quiet, cli.verbose);

    match cli.command {
        cli::Command::Fuse(ref args) => fuse::cmd_fuse(args),
        cli::Command::Report(ref args) => cmd_report(args),
    }
}

/// Print a fused results file as a table.
fn cmd_report(args: &cli::ReportArgs) -> Result<()> {
    let mut records = store::read_results(&args.input)?;

    if let Some(ref filter) = args.filter {
        records.retain(|r| r.function_id.contains(filter.as_str()));
    }
    if args.sort {
        records.sort_by(|a, b| b.speedup.total_cmp(&a.speedup));
    }

    output::print_speedup_table(&records);
    Ok(())
}
