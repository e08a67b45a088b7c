//! Quiet/default/verbose output control for pipeline progress.
//!
//! Three levels controlled by CLI flags:
//! - **Quiet** (`-q`): errors only
//! - **Default** (no flag): progress lines + final summary
//! - **Verbose** (`-v`): per-file detail and stage timings

use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Instant;

const QUIET: u8 = 0;
const DEFAULT: u8 = 1;
const VERBOSE: u8 = 2;

/// Global output level, set once at startup.
static LEVEL: AtomicU8 = AtomicU8::new(DEFAULT);

/// Set the output level for the current process.
pub fn init(quiet: bool, verbose: bool) {
    let level = if quiet {
        QUIET
    } else if verbose {
        VERBOSE
    } else {
        DEFAULT
    };
    LEVEL.store(level, Ordering::Relaxed);
}

/// Returns `true` if verbose mode is active.
pub fn is_verbose() -> bool {
    LEVEL.load(Ordering::Relaxed) >= VERBOSE
}

/// Returns `true` if quiet mode is active.
pub fn is_quiet() -> bool {
    LEVEL.load(Ordering::Relaxed) == QUIET
}

/// Print a message only when verbose mode is enabled.
///
/// Usage mirrors `println!`:
/// ```ignore
/// vprintln!("  {}: {} records", path.display(), count);
/// ```
macro_rules! vprintln {
    ($($arg:tt)*) => {
        if $crate::verbose::is_verbose() {
            println!($($arg)*);
        }
    };
}

pub(crate) use vprintln;

/// Print a message at default verbosity and above (suppressed in quiet mode).
macro_rules! dprintln {
    ($($arg:tt)*) => {
        if !$crate::verbose::is_quiet() {
            println!($($arg)*);
        }
    };
}

pub(crate) use dprintln;

/// RAII timer that prints elapsed duration on drop when verbose mode is
/// active.
///
/// ```ignore
/// let _t = Timer::start("collect");
/// // ... work ...
/// // prints "  collect: 12.3ms" on drop
/// ```
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Begin timing a labeled pipeline stage.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if is_verbose() {
            println!("  {}: {:.1?}", self.label, self.start.elapsed());
        }
    }
}
