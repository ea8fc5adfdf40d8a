//! Module-key index over the raw dependency graph.
//!
//! Pure formatting transform: resolved paths become synthetic module keys,
//! each mapped to a location field and (for documents with imports) a
//! requires field listing direct imports as keys, duplicates and declared
//! order intact. First-visit order of the graph is preserved in the output
//! object.

use std::path::Path;

use serde_json::{Map, Value};

use weld_graph::DependencyGraph;

/// Naming knobs for the generated index.
#[derive(Debug, Clone)]
pub struct IndexOptions {
    /// Leading fragment stripped from module keys and locations.
    pub base_path: Option<String>,
    /// Prefix prepended to every location value.
    pub target_dir: Option<String>,
    /// Prefix prepended to every module key.
    pub module_prefix: Option<String>,
    /// Separator replacing `/` in module keys.
    pub separator: String,
    /// Field name for a document's location.
    pub path_key: String,
    /// Field name for a document's direct imports.
    pub requires_key: String,
    /// Extension stripped from module keys.
    pub extension: String,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            base_path: None,
            target_dir: None,
            module_prefix: None,
            separator: "-".to_string(),
            path_key: "path".to_string(),
            requires_key: "requires".to_string(),
            extension: ".js".to_string(),
        }
    }
}

/// Render `graph` as a module-key index.
pub fn index_view(graph: &DependencyGraph, options: &IndexOptions) -> Value {
    let mut index = Map::new();
    for (path, targets) in graph {
        let mut entry = Map::new();
        entry.insert(
            options.path_key.clone(),
            Value::String(location(path, options)),
        );
        if !targets.is_empty() {
            let requires = targets
                .iter()
                .map(|target| Value::String(module_key(target, options)))
                .collect();
            entry.insert(options.requires_key.clone(), Value::Array(requires));
        }
        index.insert(module_key(path, options), Value::Object(entry));
    }
    Value::Object(index)
}

fn strip_base<'p>(path: &'p str, options: &IndexOptions) -> &'p str {
    match &options.base_path {
        Some(base) => path.strip_prefix(base.as_str()).unwrap_or(path),
        None => path,
    }
}

fn location(path: &Path, options: &IndexOptions) -> String {
    let path = path.to_string_lossy();
    let stripped = strip_base(&path, options);
    match &options.target_dir {
        Some(dir) => format!("{dir}{stripped}"),
        None => stripped.to_string(),
    }
}

fn module_key(path: &Path, options: &IndexOptions) -> String {
    let path = path.to_string_lossy();
    let mut name = strip_base(&path, options);
    if let Some(trimmed) = name.strip_suffix(options.extension.as_str()) {
        name = trimmed;
    }
    let name = name.replace('/', &options.separator);
    match &options.module_prefix {
        Some(prefix) => format!("{prefix}{name}"),
        None => name,
    }
}
