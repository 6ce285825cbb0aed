use anyhow::{Context, Result};

fn main() -> Result<()> {
    textpatch::run_builtin("fix-dialog").context("Failed to fix the verification dialog")?;
    Ok(())
}
