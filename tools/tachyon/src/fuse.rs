//! The fuse pipeline: collect parts, derive statistics, write results.

use anyhow::{Context, Result};
use tachyon_stats::{compute_medians, compute_speedups};

use crate::cli::FuseArgs;
use crate::collect;
use crate::store;
use crate::verbose::{Timer, dprintln};

/// Run the full fusion pipeline for `fuse`.
pub fn cmd_fuse(args: &FuseArgs) -> Result<()> {
    dprintln!(
        "Collecting timing files from {}...",
        args.parts_dir.display()
    );
    let raw = {
        let _t = Timer::start("collect");
        collect::collect_parts(&args.parts_dir, &args.prefix)?
    };
    dprintln!("  {} records collected", raw.len());

    let fused = {
        let _t = Timer::start("derive");
        let medians = compute_medians(raw).context("computing medians")?;
        compute_speedups(medians).context("computing speedups")?
    };

    store::write_results(&args.output, &fused)?;
    dprintln!("Fused {} records to {}", fused.len(), args.output.display());

    Ok(())
}
