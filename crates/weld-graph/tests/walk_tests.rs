//! Walker tests over an in-memory document set.

use std::path::PathBuf;

use weld_graph::{MemorySource, WalkConfig, Walker};

fn p(path: &str) -> PathBuf {
    PathBuf::from(path)
}

fn source(documents: &[(&str, &str)]) -> MemorySource {
    let mut source = MemorySource::new();
    for (path, text) in documents {
        source.insert(*path, *text);
    }
    source
}

#[tokio::test]
async fn flatten_single_document() {
    let source = source(&[("test/foo.js", "var foo = 1;\n")]);
    let walker = Walker::new(&source, WalkConfig::default());
    let order = walker.flatten(&["test/foo.js"]).await.unwrap();
    assert_eq!(order, vec![p("test/foo.js")]);
}

#[tokio::test]
async fn flatten_orders_chain_dependencies_first() {
    let source = source(&[
        ("test/a.js", "import \"b\";\nvar a;\n"),
        ("test/b.js", "import \"c\";\nvar b;\n"),
        ("test/c.js", "var c;\n"),
    ]);
    let walker = Walker::new(&source, WalkConfig::default());
    let order = walker.flatten(&["test/a.js"]).await.unwrap();
    assert_eq!(order, vec![p("test/c.js"), p("test/b.js"), p("test/a.js")]);
}

#[tokio::test]
async fn flatten_preserves_sibling_declaration_order() {
    let source = source(&[
        ("test/main.js", "import \"foo\";\nimport \"bar\";\nimport \"baz\";\n"),
        ("test/foo.js", "var foo;\n"),
        ("test/bar.js", "var bar;\n"),
        ("test/baz.js", "var baz;\n"),
    ]);
    let walker = Walker::new(&source, WalkConfig::default());
    let order = walker.flatten(&["test/main.js"]).await.unwrap();
    assert_eq!(
        order,
        vec![
            p("test/foo.js"),
            p("test/bar.js"),
            p("test/baz.js"),
            p("test/main.js"),
        ]
    );
}

#[tokio::test]
async fn flatten_visits_self_import_once() {
    let source = source(&[("test/self.js", "import \"self\";\nvar s;\n")]);
    let walker = Walker::new(&source, WalkConfig::default());
    let order = walker.flatten(&["test/self.js"]).await.unwrap();
    assert_eq!(order, vec![p("test/self.js")]);
}

#[tokio::test]
async fn flatten_cycle_order_depends_on_entry_point() {
    let documents = [
        ("test/a.js", "import \"b\";\nvar a;\n"),
        ("test/b.js", "import \"a\";\nvar b;\n"),
    ];
    let source = source(&documents);
    let walker = Walker::new(&source, WalkConfig::default());

    let from_a = walker.flatten(&["test/a.js"]).await.unwrap();
    assert_eq!(from_a, vec![p("test/b.js"), p("test/a.js")]);

    let from_b = walker.flatten(&["test/b.js"]).await.unwrap();
    assert_eq!(from_b, vec![p("test/a.js"), p("test/b.js")]);
}

#[tokio::test]
async fn flatten_dedupes_redundant_imports() {
    let source = source(&[
        (
            "test/main.js",
            "import \"foo\";\nimport \"foo\";\nimport \"bar\";\nimport \"foo\";\n",
        ),
        ("test/foo.js", "var foo;\n"),
        ("test/bar.js", "var bar;\n"),
    ]);
    let walker = Walker::new(&source, WalkConfig::default());
    let order = walker.flatten(&["test/main.js"]).await.unwrap();
    assert_eq!(
        order,
        vec![p("test/foo.js"), p("test/bar.js"), p("test/main.js")]
    );
}

#[tokio::test]
async fn flatten_dedupes_redundant_entries() {
    let source = source(&[("test/foo.js", "var foo;\n")]);
    let walker = Walker::new(&source, WalkConfig::default());
    let order = walker.flatten(&["test/foo.js", "test/foo.js"]).await.unwrap();
    assert_eq!(order, vec![p("test/foo.js")]);
}

#[tokio::test]
async fn flatten_keeps_independent_entries_in_input_order() {
    let source = source(&[
        ("test/foo.js", "var foo;\n"),
        ("test/bar.js", "var bar;\n"),
        ("test/baz.js", "var baz;\n"),
    ]);
    let walker = Walker::new(&source, WalkConfig::default());
    let order = walker
        .flatten(&["test/foo.js", "test/bar.js", "test/baz.js"])
        .await
        .unwrap();
    assert_eq!(
        order,
        vec![p("test/foo.js"), p("test/bar.js"), p("test/baz.js")]
    );
}

#[tokio::test]
async fn flatten_expands_directory_entry_to_index() {
    let source = source(&[("test/index.js", "var index;\n")]);
    let walker = Walker::new(&source, WalkConfig::default());
    let order = walker.flatten(&["test/"]).await.unwrap();
    assert_eq!(order, vec![p("test/index.js")]);
}

#[tokio::test]
async fn flatten_expands_extensionless_entry() {
    let source = source(&[("test/index.js", "var index;\n")]);
    let walker = Walker::new(&source, WalkConfig::default());
    let order = walker.flatten(&["test/index"]).await.unwrap();
    assert_eq!(order, vec![p("test/index.js")]);
}

#[tokio::test]
async fn flatten_honors_configured_extension() {
    let source = source(&[
        ("docs/main.txt", "import \"intro\";\nbody\n"),
        ("docs/intro.txt", "intro\n"),
    ]);
    let walker = Walker::new(&source, WalkConfig::with_extension("txt"));
    let order = walker.flatten(&["docs/main"]).await.unwrap();
    assert_eq!(order, vec![p("docs/intro.txt"), p("docs/main.txt")]);
}

#[tokio::test]
async fn flatten_fails_on_malformed_directive_with_canonical_message() {
    let source = source(&[("test/invalid.js", "import foo;\n")]);
    let walker = Walker::new(&source, WalkConfig::default());
    let error = walker.flatten(&["test/invalid.js"]).await.unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid import: test/invalid.js:0: import foo;"
    );
}

#[tokio::test]
async fn flatten_fails_on_nested_malformed_directive() {
    let source = source(&[
        ("test/main.js", "import \"bad\";\nvar main;\n"),
        ("test/bad.js", "var ok;\nimport nope\n"),
    ]);
    let walker = Walker::new(&source, WalkConfig::default());
    let error = walker.flatten(&["test/main.js"]).await.unwrap_err();
    assert_eq!(error.to_string(), "invalid import: test/bad.js:1: import nope");
}

#[tokio::test]
async fn flatten_fails_on_missing_import() {
    let source = source(&[("test/main.js", "import \"not-found\";\n")]);
    let walker = Walker::new(&source, WalkConfig::default());
    let error = walker.flatten(&["test/main.js"]).await.unwrap_err();
    assert!(error.to_string().contains("test/not-found.js"));
}

#[tokio::test]
async fn graph_records_redundant_imports_verbatim() {
    let source = source(&[
        (
            "test/main.js",
            "import \"foo\";\nimport \"foo\";\nimport \"foo\";\n",
        ),
        ("test/foo.js", "var foo;\n"),
    ]);
    let walker = Walker::new(&source, WalkConfig::default());
    let graph = walker.graph(&["test/main.js"]).await.unwrap();

    assert_eq!(
        graph.get(&p("test/main.js")).unwrap(),
        &vec![p("test/foo.js"), p("test/foo.js"), p("test/foo.js")]
    );
    assert_eq!(graph.get(&p("test/foo.js")).unwrap(), &Vec::<PathBuf>::new());
    assert_eq!(graph.len(), 2);
}

#[tokio::test]
async fn graph_keeps_self_edges() {
    let source = source(&[("test/self.js", "import \"self\";\nvar s;\n")]);
    let walker = Walker::new(&source, WalkConfig::default());
    let graph = walker.graph(&["test/self.js"]).await.unwrap();
    assert_eq!(
        graph.get(&p("test/self.js")).unwrap(),
        &vec![p("test/self.js")]
    );
    assert_eq!(graph.len(), 1);
}

#[tokio::test]
async fn graph_keys_follow_first_visit_order() {
    let source = source(&[
        ("test/a.js", "import \"b\";\nvar a;\n"),
        ("test/b.js", "import \"c\";\nvar b;\n"),
        ("test/c.js", "var c;\n"),
    ]);
    let walker = Walker::new(&source, WalkConfig::default());
    let graph = walker.graph(&["test/a.js"]).await.unwrap();
    let keys: Vec<_> = graph.keys().cloned().collect();
    // Preorder: each document is recorded before its imports are explored.
    assert_eq!(keys, vec![p("test/a.js"), p("test/b.js"), p("test/c.js")]);
}

#[tokio::test]
async fn graph_handles_cycles() {
    let source = source(&[
        ("test/a.js", "import \"b\";\nvar a;\n"),
        ("test/b.js", "import \"a\";\nvar b;\n"),
    ]);
    let walker = Walker::new(&source, WalkConfig::default());
    let graph = walker.graph(&["test/a.js"]).await.unwrap();
    assert_eq!(graph.get(&p("test/a.js")).unwrap(), &vec![p("test/b.js")]);
    assert_eq!(graph.get(&p("test/b.js")).unwrap(), &vec![p("test/a.js")]);
}

#[tokio::test]
async fn imports_returns_direct_imports_only() {
    let source = source(&[
        ("test/main.js", "import \"a\";\nimport \"b\";\nvar main;\n"),
        ("test/a.js", "import \"c\";\n"),
    ]);
    let walker = Walker::new(&source, WalkConfig::default());
    let imports = walker.imports("test/main.js").await.unwrap();
    assert_eq!(imports, vec![p("test/a.js"), p("test/b.js")]);
}

#[tokio::test]
async fn imports_preserves_duplicates_and_self_imports() {
    let source = source(&[(
        "test/main.js",
        "import \"foo\";\nimport \"foo\";\nimport \"main\";\n",
    )]);
    let walker = Walker::new(&source, WalkConfig::default());
    let imports = walker.imports("test/main.js").await.unwrap();
    assert_eq!(
        imports,
        vec![p("test/foo.js"), p("test/foo.js"), p("test/main.js")]
    );
}

#[tokio::test]
async fn imports_is_empty_for_plain_document() {
    let source = source(&[("test/foo.js", "var foo;\n// import \"bar\";\n")]);
    let walker = Walker::new(&source, WalkConfig::default());
    let imports = walker.imports("test/foo.js").await.unwrap();
    assert!(imports.is_empty());
}
