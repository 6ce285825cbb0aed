use similar::{ChangeTag, TextDiff};
use std::path::Path;

/// Line counts touched by a patch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub inserted: usize,
    pub deleted: usize,
}

/// Count inserted and deleted lines between two documents
pub fn summarize(old: &str, new: &str) -> ChangeSummary {
    let diff = TextDiff::from_lines(old, new);
    let mut summary = ChangeSummary::default();

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => summary.inserted += 1,
            ChangeTag::Delete => summary.deleted += 1,
            ChangeTag::Equal => {}
        }
    }

    summary
}

/// Render a unified diff with git-style `a/` and `b/` headers
pub fn unified(old: &str, new: &str, path: &Path) -> String {
    let diff = TextDiff::from_lines(old, new);
    let old_header = format!("a/{}", path.display());
    let new_header = format!("b/{}", path.display());

    diff.unified_diff()
        .context_radius(3)
        .header(&old_header, &new_header)
        .to_string()
}
