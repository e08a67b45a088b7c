//! Command-line interface definitions for tachyon.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Benchmark execution-time fusion tool.
#[derive(Parser)]
#[command(name = "tachyon", version, about)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output; show only errors.
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose output with per-file detail and stage timings.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Fuse per-job timing files into a single results file.
    Fuse(FuseArgs),
    /// Print a fused results file as a table.
    Report(ReportArgs),
}

/// Arguments for the `fuse` subcommand.
#[derive(Parser)]
pub struct FuseArgs {
    /// Directory containing the per-job timing files.
    #[arg(long, default_value = "results/parts")]
    pub parts_dir: PathBuf,

    /// Filename prefix selecting timing files inside the parts directory.
    #[arg(long, default_value = "final_exec_times")]
    pub prefix: String,

    /// Destination file for the fused results.
    #[arg(long, short = 'o', default_value = "results/final_exec_times.json")]
    pub output: PathBuf,
}

/// Arguments for the `report` subcommand.
#[derive(Parser)]
pub struct ReportArgs {
    /// Fused results file to read.
    #[arg(long, short = 'i', default_value = "results/final_exec_times.json")]
    pub input: PathBuf,

    /// Only show records whose function id contains this substring.
    #[arg(long)]
    pub filter: Option<String>,

    /// Sort rows by descending speedup instead of input order.
    #[arg(long)]
    pub sort: bool,
}
