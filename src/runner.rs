use std::path::PathBuf;
use tracing::{debug, info};

use crate::diff;
use crate::error::Result;
use crate::patch::{Outcome, TierHit};
use crate::recipes::Recipe;
use crate::utils::fs::{read_document, write_document};

/// Knobs for a single run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Patch this file instead of the recipe's own target
    pub target_override: Option<PathBuf>,
    /// Compute the result and a diff but leave the file alone
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Applied,
    Unchanged,
    Ambiguous,
    NotFound,
}

/// What a run did, ready to print
#[derive(Debug, Clone)]
pub struct Report {
    pub recipe: String,
    pub target: PathBuf,
    pub kind: OutcomeKind,
    pub tier: Option<TierHit>,
    pub written: bool,
    pub status_line: String,
    /// Unified diff of the change, only for dry runs that matched
    pub diff: Option<String>,
}

impl Report {
    pub fn is_applied(&self) -> bool {
        self.kind == OutcomeKind::Applied
    }
}

/// Read the target, patch it and write it back if anything changed
pub fn run_recipe(recipe: &Recipe, options: &RunOptions) -> Result<Report> {
    let target = options
        .target_override
        .clone()
        .unwrap_or_else(|| recipe.target.clone());
    debug!("Running recipe {} against {}", recipe.name, target.display());

    let original = read_document(&target)?;
    let outcome = recipe.patcher.apply(&original);
    let status_line = recipe.messages.status_line(&recipe.name, &outcome);

    let mut written = false;
    let mut rendered_diff = None;

    let kind = match &outcome {
        Outcome::Applied {
            tier,
            replaced,
            document,
        } => {
            let summary = diff::summarize(&original, document);
            info!(
                "{}: tier {} replaced {} occurrence(s), +{} -{} lines",
                recipe.name, tier.label, replaced, summary.inserted, summary.deleted
            );

            if options.dry_run {
                rendered_diff = Some(diff::unified(&original, document, &target));
            } else {
                write_document(&target, document)?;
                written = true;
                info!("Wrote {}", target.display());
            }
            OutcomeKind::Applied
        }
        Outcome::Unchanged { .. } => OutcomeKind::Unchanged,
        Outcome::Ambiguous { .. } => OutcomeKind::Ambiguous,
        Outcome::NotFound { .. } => OutcomeKind::NotFound,
    };

    Ok(Report {
        recipe: recipe.name.clone(),
        target,
        kind,
        tier: outcome.tier().cloned(),
        written,
        status_line,
        diff: rendered_diff,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::{Patcher, Pattern, Replacement, Tier};
    use std::fs;
    use tempfile::tempdir;

    fn insert_span() -> Recipe {
        Recipe::new(
            "insert-span",
            "unused.tsx",
            Patcher::new(vec![Tier::new(
                "exact",
                Pattern::literal(r#"<div className="a"><div className="b"></div></div>"#).unwrap(),
                Replacement::Literal(
                    r#"<div className="a"><div className="b"><span>x</span></div></div>"#
                        .to_string(),
                ),
            )]),
        )
    }

    fn options_for(path: &std::path::Path) -> RunOptions {
        RunOptions {
            target_override: Some(path.to_path_buf()),
            dry_run: false,
        }
    }

    #[test]
    fn test_match_rewrites_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("home.tsx");
        fs::write(
            &path,
            "export default () => (\n<div className=\"a\"><div className=\"b\"></div></div>\n);\n",
        )
        .unwrap();

        let report = run_recipe(&insert_span(), &options_for(&path)).unwrap();

        assert!(report.is_applied());
        assert!(report.written);
        assert_eq!(report.status_line, "insert-span: applied via exact");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "export default () => (\n<div className=\"a\"><div className=\"b\"><span>x</span></div></div>\n);\n"
        );
    }

    #[test]
    fn test_second_run_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("home.tsx");
        fs::write(&path, r#"<div className="a"><div className="b"></div></div>"#).unwrap();
        let recipe = insert_span();

        run_recipe(&recipe, &options_for(&path)).unwrap();
        let after_first = fs::read(&path).unwrap();
        let modified_first = fs::metadata(&path).unwrap().modified().unwrap();

        let report = run_recipe(&recipe, &options_for(&path)).unwrap();

        assert_eq!(report.kind, OutcomeKind::NotFound);
        assert!(!report.written);
        assert_eq!(report.status_line, "insert-span: pattern not found");
        assert_eq!(fs::read(&path).unwrap(), after_first);
        assert_eq!(
            fs::metadata(&path).unwrap().modified().unwrap(),
            modified_first
        );
    }

    #[test]
    fn test_dry_run_renders_diff_without_writing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("home.tsx");
        let original = "<p>\n<div className=\"a\"><div className=\"b\"></div></div>\n</p>\n";
        fs::write(&path, original).unwrap();

        let options = RunOptions {
            target_override: Some(path.clone()),
            dry_run: true,
        };
        let report = run_recipe(&insert_span(), &options).unwrap();

        assert!(report.is_applied());
        assert!(!report.written);
        let rendered = report.diff.unwrap();
        assert!(rendered.contains("+<div className=\"a\"><div className=\"b\"><span>x</span></div></div>"));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_ambiguous_match_is_not_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("home.tsx");
        let block = r#"<div className="a"><div className="b"></div></div>"#;
        let original = format!("{}\n{}\n", block, block);
        fs::write(&path, &original).unwrap();

        let report = run_recipe(&insert_span(), &options_for(&path)).unwrap();

        assert_eq!(report.kind, OutcomeKind::Ambiguous);
        assert!(!report.written);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_identity_replacement_is_not_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("home.tsx");
        fs::write(&path, "<h2>Verify Your Identity</h2>\n").unwrap();
        let modified_before = fs::metadata(&path).unwrap().modified().unwrap();

        let recipe = Recipe::new(
            "identity",
            "unused.tsx",
            Patcher::new(vec![Tier::new(
                "regex",
                Pattern::regex(r"(<h2>[^<]*</h2>)").unwrap(),
                Replacement::Template("$1".to_string()),
            )]),
        );
        let report = run_recipe(&recipe, &options_for(&path)).unwrap();

        assert_eq!(report.kind, OutcomeKind::Unchanged);
        assert!(!report.written);
        assert_eq!(report.status_line, "identity: replacement produced no change");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "<h2>Verify Your Identity</h2>\n"
        );
        assert_eq!(
            fs::metadata(&path).unwrap().modified().unwrap(),
            modified_before
        );
    }

    #[test]
    fn test_missing_target_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.tsx");

        assert!(run_recipe(&insert_span(), &options_for(&path)).is_err());
    }
}
