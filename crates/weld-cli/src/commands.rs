//! Command implementations.

use std::path::Path;

use anyhow::Context;
use tracing::info;

use weld_bundler::{Emitter, IndexOptions, WriterSink, index_view};
use weld_graph::{FsSource, WalkConfig, Walker};

use crate::cli::{BundleArgs, FileArgs, FilesArgs, IndexArgs};

fn config(extension: &str) -> WalkConfig {
    WalkConfig::with_extension(extension)
}

pub async fn bundle(args: BundleArgs, extension: &str) -> anyhow::Result<()> {
    let source = FsSource;
    let emitter = Emitter::new(&source, config(extension));
    match args.output {
        Some(path) => {
            let text = emitter.bundle_to_string(&args.files).await?;
            write_atomic(&path, &text).await?;
            info!(path = %path.display(), bytes = text.len(), "bundle written");
        }
        None => {
            emitter
                .stream(&args.files, WriterSink::new(tokio::io::stdout()))
                .await?;
        }
    }
    Ok(())
}

pub async fn list(args: FilesArgs, extension: &str) -> anyhow::Result<()> {
    let source = FsSource;
    let walker = Walker::new(&source, config(extension));
    for path in walker.flatten(&args.files).await? {
        println!("{}", path.display());
    }
    Ok(())
}

pub async fn imports(args: FileArgs, extension: &str) -> anyhow::Result<()> {
    let source = FsSource;
    let walker = Walker::new(&source, config(extension));
    for path in walker.imports(&args.file).await? {
        println!("{}", path.display());
    }
    Ok(())
}

pub async fn graph(args: FilesArgs, extension: &str) -> anyhow::Result<()> {
    let source = FsSource;
    let walker = Walker::new(&source, config(extension));
    let graph = walker.graph(&args.files).await?;
    println!("{}", serde_json::to_string_pretty(&graph)?);
    Ok(())
}

pub async fn index(args: IndexArgs, extension: &str) -> anyhow::Result<()> {
    let source = FsSource;
    let walker = Walker::new(&source, config(extension));
    let graph = walker.graph(&args.files).await?;

    let options = IndexOptions {
        base_path: args.base_path,
        target_dir: args.target_dir,
        module_prefix: args.module_prefix,
        separator: args.separator,
        path_key: args.path_key,
        requires_key: args.requires_key,
        extension: config(extension).default_extension().to_string(),
    };
    println!("{}", serde_json::to_string_pretty(&index_view(&graph, &options))?);
    Ok(())
}

/// Write through a temp file so the target never holds partial output.
async fn write_atomic(path: &Path, text: &str) -> anyhow::Result<()> {
    let temp = path.with_extension("tmp");
    tokio::fs::write(&temp, text)
        .await
        .with_context(|| format!("failed to write '{}'", temp.display()))?;
    tokio::fs::rename(&temp, path)
        .await
        .with_context(|| format!("failed to rename '{}' to '{}'", temp.display(), path.display()))?;
    Ok(())
}
