use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use textpatch::config::load_recipe;
use textpatch::recipes::{self, BUILTIN_NAMES};
use textpatch::runner::{run_recipe, Report, RunOptions};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Exit with an error when the patch did not apply
    #[arg(long, global = true)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in recipes
    List,

    /// Run a built-in recipe
    Run {
        /// Recipe name, see `list`
        name: String,

        /// Patch this file instead of the recipe's target
        #[arg(short, long)]
        target: Option<PathBuf>,

        /// Print the diff without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Run a recipe from a TOML file
    Apply {
        /// Path to the recipe file
        recipe: PathBuf,

        /// Patch this file instead of the recipe's target
        #[arg(short, long)]
        target: Option<PathBuf>,

        /// Print the diff without writing the file
        #[arg(long)]
        dry_run: bool,
    },
}

/// With `--strict`, anything short of an applied patch is an error
fn enforce_strict(report: &Report, strict: bool) -> Result<()> {
    if strict && !report.is_applied() {
        bail!("{} did not apply to {}", report.recipe, report.target.display());
    }
    Ok(())
}

fn print_report(report: &Report, strict: bool) -> Result<()> {
    println!("{}", report.status_line);
    if let Some(diff) = &report.diff {
        print!("{}", diff);
    }

    enforce_strict(report, strict)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    textpatch::init_logging(cli.verbose);
    info!("textpatch v{}", textpatch::version());

    match cli.command {
        Commands::List => {
            for name in BUILTIN_NAMES {
                println!("{}", name);
            }
            Ok(())
        }
        Commands::Run {
            name,
            target,
            dry_run,
        } => {
            let recipe = recipes::builtin(&name)?;
            let options = RunOptions {
                target_override: target,
                dry_run,
            };
            let report = run_recipe(&recipe, &options)
                .with_context(|| format!("Failed to run recipe {}", name))?;
            print_report(&report, cli.strict)
        }
        Commands::Apply {
            recipe,
            target,
            dry_run,
        } => {
            let loaded = load_recipe(&recipe)
                .with_context(|| format!("Failed to load recipe {}", recipe.display()))?;
            let options = RunOptions {
                target_override: target,
                dry_run,
            };
            let report = run_recipe(&loaded, &options)
                .with_context(|| format!("Failed to run recipe {}", loaded.name))?;
            print_report(&report, cli.strict)
        }
    }
}
