//! Recursive dependency walk.
//!
//! [`Walker::flatten`] and [`Walker::graph`] share one recursive-visit
//! substrate guarded by a fresh [`VisitedSet`] per call: visit a document,
//! fetch and scan it, recurse into its resolved imports in declared order,
//! each completing fully before the next starts. Flattening appends the
//! document after its subtree (dependencies first); raw-graph mode records
//! the verbatim edge list before recursing. Any scan or fetch error anywhere
//! in the closure aborts the whole walk.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::config::WalkConfig;
use crate::error::{ScanError, WalkError};
use crate::resolve;
use crate::scan;
use crate::source::TextSource;
use crate::visited::VisitedSet;

/// Direct imports per document, keyed by resolved path in first-visit
/// order. Edge lists keep duplicates and self-references exactly as
/// declared.
pub type DependencyGraph = IndexMap<PathBuf, Vec<PathBuf>>;

/// What a walk mode does with each newly visited document.
trait Mode: Send {
    /// Called once per document, after scanning and before recursing into
    /// its imports.
    fn enter(&mut self, _path: &Path, _targets: &[PathBuf]) {}

    /// Called once per document, after its entire import subtree completed.
    fn leave(&mut self, _path: &Path) {}
}

/// Flattened mode: dependency-first order, each document exactly once.
#[derive(Default)]
struct Flatten {
    order: Vec<PathBuf>,
}

impl Mode for Flatten {
    fn leave(&mut self, path: &Path) {
        self.order.push(path.to_path_buf());
    }
}

/// Raw-graph mode: verbatim edge lists, captured before recursion.
#[derive(Default)]
struct RawGraph {
    graph: DependencyGraph,
}

impl Mode for RawGraph {
    fn enter(&mut self, path: &Path, targets: &[PathBuf]) {
        self.graph.insert(path.to_path_buf(), targets.to_vec());
    }
}

/// Walks the import graph from a set of entry documents.
pub struct Walker<'a> {
    source: &'a dyn TextSource,
    config: WalkConfig,
}

impl<'a> Walker<'a> {
    pub fn new(source: &'a dyn TextSource, config: WalkConfig) -> Self {
        Self { source, config }
    }

    /// Deduplicated, dependency-first order over `entries` and everything
    /// they transitively import. Sibling order follows declaration order;
    /// on a cycle the document reached first is ordered first.
    pub async fn flatten<S: AsRef<str>>(&self, entries: &[S]) -> Result<Vec<PathBuf>, WalkError> {
        let mut visited = VisitedSet::new();
        let mut mode = Flatten::default();
        for entry in entries {
            let path = resolve::expand_entry(entry.as_ref(), self.config.default_extension());
            self.visit(path, &mut visited, &mut mode).await?;
        }
        Ok(mode.order)
    }

    /// Raw per-document edge map over `entries` and everything they
    /// transitively import. Unlike [`flatten`](Walker::flatten), edge lists
    /// keep redundant imports and self-imports.
    pub async fn graph<S: AsRef<str>>(&self, entries: &[S]) -> Result<DependencyGraph, WalkError> {
        let mut visited = VisitedSet::new();
        let mut mode = RawGraph::default();
        for entry in entries {
            let path = resolve::expand_entry(entry.as_ref(), self.config.default_extension());
            self.visit(path, &mut visited, &mut mode).await?;
        }
        Ok(mode.graph)
    }

    /// Direct imports of a single document, resolved, in declared order,
    /// duplicates and self-imports preserved. Does not recurse.
    pub async fn imports(&self, entry: &str) -> Result<Vec<PathBuf>, WalkError> {
        let path = resolve::expand_entry(entry, self.config.default_extension());
        let text = self.source.fetch(&path).await?;
        Ok(self.resolved_imports(&path, &text)?)
    }

    /// The shared recursive-visit substrate.
    fn visit<'s>(
        &'s self,
        path: PathBuf,
        visited: &'s mut VisitedSet,
        mode: &'s mut dyn Mode,
    ) -> Pin<Box<dyn Future<Output = Result<(), WalkError>> + Send + 's>> {
        Box::pin(async move {
            // Check-and-mark is one step; a path never gets past it twice.
            if !visited.mark(&path) {
                trace!(path = %path.display(), "already visited");
                return Ok(());
            }
            debug!(path = %path.display(), "visiting document");

            let text = self.source.fetch(&path).await?;
            let targets = self.resolved_imports(&path, &text)?;
            mode.enter(&path, &targets);
            for target in targets {
                self.visit(target, visited, mode).await?;
            }
            mode.leave(&path);
            Ok(())
        })
    }

    fn resolved_imports(&self, path: &Path, text: &str) -> Result<Vec<PathBuf>, ScanError> {
        let extension = self.config.default_extension();
        let directives = scan::imports(path, text)?;
        Ok(directives
            .iter()
            .map(|directive| resolve::resolve_target(path, directive.target, extension))
            .collect())
    }
}
