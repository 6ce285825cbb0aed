// Recipe files: user-defined patches loaded from TOML
pub mod recipe_file;

pub use recipe_file::{load_recipe, parse_recipe, PatternKind, RecipeFile, TierSpec};
