use anyhow::{Context, Result};

fn main() -> Result<()> {
    textpatch::run_builtin("add-animated-tabs").context("Failed to add animated tabs")?;
    Ok(())
}
