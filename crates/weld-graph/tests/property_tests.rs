//! Property tests for the flatten invariants.
//!
//! Generates small acyclic import graphs (document `i` may only import
//! documents with a lower index) and checks that the flattened order is
//! duplicate-free and places every import before its importer.

use proptest::prelude::*;

use weld_graph::{MemorySource, WalkConfig, Walker};

/// Index of the edge `(importer, import)` in the flat edge mask, for
/// `import < importer`.
fn edge_index(importer: usize, import: usize) -> usize {
    importer * (importer - 1) / 2 + import
}

fn document_name(index: usize) -> String {
    format!("d{index}.js")
}

fn build_source(count: usize, mask: &[bool]) -> MemorySource {
    let mut source = MemorySource::new();
    for importer in 0..count {
        let mut text = String::new();
        for import in 0..importer {
            if mask[edge_index(importer, import)] {
                text.push_str(&format!("import \"d{import}\";\n"));
            }
        }
        text.push_str(&format!("var d{importer};\n"));
        source.insert(document_name(importer), text);
    }
    source
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn flatten_is_unique_and_dependency_first(
        count in 1usize..8,
        mask in prop::collection::vec(any::<bool>(), 28),
    ) {
        let source = build_source(count, &mask);
        let entries: Vec<String> = (0..count).map(document_name).collect();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let order = runtime
            .block_on(async {
                let walker = Walker::new(&source, WalkConfig::default());
                walker.flatten(&entries).await
            })
            .unwrap();

        // Every document appears exactly once.
        prop_assert_eq!(order.len(), count);
        let positions: std::collections::HashMap<_, _> = order
            .iter()
            .enumerate()
            .map(|(position, path)| (path.clone(), position))
            .collect();
        prop_assert_eq!(positions.len(), count);

        // Every import precedes its importer.
        for importer in 0..count {
            for import in 0..importer {
                if mask[edge_index(importer, import)] {
                    let importer_at = positions[&std::path::PathBuf::from(document_name(importer))];
                    let import_at = positions[&std::path::PathBuf::from(document_name(import))];
                    prop_assert!(
                        import_at < importer_at,
                        "d{} must precede d{}",
                        import,
                        importer
                    );
                }
            }
        }
    }
}
