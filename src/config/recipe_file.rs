use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PatchError, Result};
use crate::patch::{Occurrence, Patcher, Pattern, Replacement, Tier};
use crate::recipes::{Messages, Recipe};

/// How a tier's `find` string is interpreted
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    #[default]
    Literal,
    Regex,
    Fuzzy,
}

impl PatternKind {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Regex => "regex",
            Self::Fuzzy => "fuzzy",
        }
    }
}

/// One `[[tier]]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierSpec {
    pub label: Option<String>,
    #[serde(default)]
    pub kind: PatternKind,
    pub find: String,
    pub replace: String,
    /// Expand `$1`-style captures in `replace`
    #[serde(default)]
    pub expand: bool,
}

/// On-disk form of a recipe
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeFile {
    pub name: Option<String>,
    pub target: PathBuf,
    #[serde(default)]
    pub occurrence: Occurrence,
    #[serde(default)]
    pub messages: Messages,
    #[serde(rename = "tier", default)]
    pub tiers: Vec<TierSpec>,
}

impl TierSpec {
    fn into_tier(self) -> Result<Tier> {
        let pattern = match self.kind {
            PatternKind::Literal => Pattern::literal(self.find)?,
            PatternKind::Regex => Pattern::regex(&self.find)?,
            PatternKind::Fuzzy => Pattern::fuzzy(&self.find)?,
        };
        let replacement = if self.expand {
            Replacement::Template(self.replace)
        } else {
            Replacement::Literal(self.replace)
        };
        let label = self
            .label
            .unwrap_or_else(|| self.kind.as_str().to_string());

        Ok(Tier::new(label, pattern, replacement))
    }
}

/// Parse recipe TOML; `origin` names the source in errors and supplies the default name
pub fn parse_recipe(text: &str, origin: &Path) -> Result<Recipe> {
    let file: RecipeFile =
        toml::from_str(text).map_err(|e| PatchError::config_error(origin, e.to_string()))?;

    if file.tiers.is_empty() {
        return Err(PatchError::config_error(
            origin,
            "recipe needs at least one [[tier]]",
        ));
    }

    let name = file.name.unwrap_or_else(|| {
        origin
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "recipe".to_string())
    });

    let tiers = file
        .tiers
        .into_iter()
        .map(TierSpec::into_tier)
        .collect::<Result<Vec<_>>>()?;
    debug!("Loaded recipe {} with {} tier(s)", name, tiers.len());

    let patcher = Patcher::new(tiers).with_occurrence(file.occurrence);
    Ok(Recipe::new(name, file.target, patcher).with_messages(file.messages))
}

/// Load a recipe from a TOML file
pub fn load_recipe(path: impl AsRef<Path>) -> Result<Recipe> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| PatchError::io_error(e, path))?;
    parse_recipe(&text, path)
}
