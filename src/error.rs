use std::path::PathBuf;
use thiserror::Error;

/// Main error type for textpatch
///
/// A pattern that simply does not occur in the document is not an error:
/// it is reported through [`crate::patch::Outcome`]. Only broken inputs
/// (unreadable files, malformed recipes, invalid regexes) land here.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Invalid recipe file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Unknown recipe: {name}")]
    UnknownRecipe { name: String },
}

impl PatchError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    /// Create a new recipe file error
    pub fn config_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unknown_recipe(name: impl Into<String>) -> Self {
        Self::UnknownRecipe { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = PatchError::io_error(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            "client/src/pages/home.tsx",
        );
        let msg = err.to_string();
        assert!(msg.contains("client/src/pages/home.tsx"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_invalid_pattern_message() {
        let err = PatchError::invalid_pattern("(", "unclosed group");
        assert_eq!(err.to_string(), "Invalid pattern `(`: unclosed group");
    }
}
