//! Named patches: a target file, a [`Patcher`] and the status lines to print

mod home_dialog;

use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{PatchError, Result};
use crate::patch::{Outcome, Patcher};

pub use home_dialog::{add_animated_tabs, fix_dialog, remove_duplicate_x, HOME_PAGE};

/// Names accepted by [`builtin`], in the order they were meant to be run
pub const BUILTIN_NAMES: &[&str] = &["fix-dialog", "remove-duplicate-x", "add-animated-tabs"];

/// Status line overrides; `None` falls back to a generated line
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Messages {
    pub applied: Option<String>,
    pub applied_fallback: Option<String>,
    pub not_found: Option<String>,
    pub not_found_fallback: Option<String>,
}

impl Messages {
    /// The one line a run prints to stdout
    pub fn status_line(&self, recipe: &str, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Applied { tier, .. } => {
                let custom = if tier.is_fallback() {
                    self.applied_fallback.as_ref().or(self.applied.as_ref())
                } else {
                    self.applied.as_ref()
                };
                custom
                    .cloned()
                    .unwrap_or_else(|| format!("{}: applied via {}", recipe, tier.label))
            }
            Outcome::NotFound { tiers_tried } if *tiers_tried > 1 => self
                .not_found_fallback
                .as_ref()
                .or(self.not_found.as_ref())
                .cloned()
                .unwrap_or_else(|| {
                    format!("{}: pattern not found after {} tiers", recipe, tiers_tried)
                }),
            Outcome::NotFound { .. } => self
                .not_found
                .clone()
                .unwrap_or_else(|| format!("{}: pattern not found", recipe)),
            Outcome::Ambiguous { tier, count } => format!(
                "{}: pattern matched {} times via {}, refusing to patch",
                recipe, count, tier.label
            ),
            Outcome::Unchanged { .. } => format!("{}: replacement produced no change", recipe),
        }
    }
}

/// A one-shot patch against a single file
#[derive(Debug, Clone)]
pub struct Recipe {
    pub name: String,
    pub target: PathBuf,
    pub patcher: Patcher,
    pub messages: Messages,
}

impl Recipe {
    pub fn new(name: impl Into<String>, target: impl Into<PathBuf>, patcher: Patcher) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            patcher,
            messages: Messages::default(),
        }
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}

/// Look up a built-in recipe by name
pub fn builtin(name: &str) -> Result<Recipe> {
    match name {
        "add-animated-tabs" => add_animated_tabs(),
        "fix-dialog" => fix_dialog(),
        "remove-duplicate-x" => remove_duplicate_x(),
        _ => Err(PatchError::unknown_recipe(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::TierHit;

    fn hit(index: usize, label: &str) -> TierHit {
        TierHit {
            index,
            label: label.to_string(),
        }
    }

    #[test]
    fn test_every_builtin_name_resolves() {
        for name in BUILTIN_NAMES {
            let recipe = builtin(name).unwrap();
            assert_eq!(recipe.name, *name);
            assert_eq!(recipe.target, PathBuf::from(HOME_PAGE));
        }
        assert!(matches!(
            builtin("nope"),
            Err(PatchError::UnknownRecipe { .. })
        ));
    }

    #[test]
    fn test_default_status_lines() {
        let messages = Messages::default();
        let applied = Outcome::Applied {
            tier: hit(1, "fuzzy"),
            replaced: 1,
            document: String::new(),
        };

        assert_eq!(
            messages.status_line("demo", &applied),
            "demo: applied via fuzzy"
        );
        assert_eq!(
            messages.status_line("demo", &Outcome::NotFound { tiers_tried: 1 }),
            "demo: pattern not found"
        );
        assert_eq!(
            messages.status_line("demo", &Outcome::NotFound { tiers_tried: 2 }),
            "demo: pattern not found after 2 tiers"
        );
        assert_eq!(
            messages.status_line(
                "demo",
                &Outcome::Ambiguous {
                    tier: hit(0, "exact"),
                    count: 3
                }
            ),
            "demo: pattern matched 3 times via exact, refusing to patch"
        );
    }

    #[test]
    fn test_fallback_message_prefers_specific_override() {
        let messages = Messages {
            applied: Some("done".to_string()),
            applied_fallback: Some("done via regex".to_string()),
            ..Default::default()
        };
        let exact = Outcome::Applied {
            tier: hit(0, "exact"),
            replaced: 1,
            document: String::new(),
        };
        let fuzzy = Outcome::Applied {
            tier: hit(1, "fuzzy"),
            replaced: 1,
            document: String::new(),
        };

        assert_eq!(messages.status_line("x", &exact), "done");
        assert_eq!(messages.status_line("x", &fuzzy), "done via regex");
    }
}
