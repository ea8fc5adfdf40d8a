//! Pure path resolution for import targets and entry points.
//!
//! No I/O happens here: a raw target is expanded by the extension rules and
//! joined against the importing document's directory. The expanded, cleaned
//! path is the document's identity for the rest of the walk.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Apply the extension rules to a raw target string.
///
/// A target ending in `/` names a directory and resolves to its `index`
/// document; a target with an extension is left alone; anything else gets
/// the default extension appended.
pub fn expand_target(target: &str, default_extension: &str) -> String {
    if target.ends_with('/') {
        format!("{target}index{default_extension}")
    } else if Path::new(target).extension().is_some() {
        target.to_string()
    } else {
        format!("{target}{default_extension}")
    }
}

/// Resolve a raw import target relative to the document importing it.
pub fn resolve_target(importer: &Path, target: &str, default_extension: &str) -> PathBuf {
    let directory = importer.parent().unwrap_or_else(|| Path::new(""));
    directory
        .join(expand_target(target, default_extension))
        .clean()
}

/// Expand an entry-point path. Entries have no importer to resolve against;
/// only the extension rules apply.
pub fn expand_entry(entry: &str, default_extension: &str) -> PathBuf {
    PathBuf::from(expand_target(entry, default_extension)).clean()
}
