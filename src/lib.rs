// textpatch - one-shot, tiered find/replace patches for source files

pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod patch;
pub mod recipes;
pub mod runner;
pub mod utils;

pub use error::{PatchError, Result};
pub use logging::init_logging;
pub use patch::{Occurrence, Outcome, Patcher, Pattern, Replacement, Tier};
pub use recipes::Recipe;
pub use runner::{run_recipe, Report, RunOptions};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Run a built-in recipe against its fixed target and print the status line
///
/// This is the whole body of the zero-argument binaries. A pattern miss
/// is not an error, only I/O failures are.
pub fn run_builtin(name: &str) -> Result<Report> {
    init_logging(false);
    tracing::debug!("textpatch v{} running {}", version(), name);

    let recipe = recipes::builtin(name)?;
    let report = run_recipe(&recipe, &RunOptions::default())?;
    println!("{}", report.status_line);
    Ok(report)
}
