use anyhow::{Context, Result};

fn main() -> Result<()> {
    textpatch::run_builtin("remove-duplicate-x").context("Failed to remove the duplicate close icon")?;
    Ok(())
}
