//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "weld",
    version,
    about = "Dependency-aware concatenation of text documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Extension appended to extensionless import targets and entries.
    #[arg(long, global = true, default_value = ".js", value_name = "EXT")]
    pub extension: String,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Concatenate entry documents and their imports in dependency order.
    Bundle(BundleArgs),
    /// Print the flattened dependency-first document order.
    List(FilesArgs),
    /// Print the direct imports of a single document.
    Imports(FileArgs),
    /// Print the raw dependency graph as JSON.
    Graph(FilesArgs),
    /// Print the module-key index as JSON.
    Index(IndexArgs),
}

#[derive(Debug, Args)]
pub struct BundleArgs {
    /// Entry documents.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<String>,

    /// Write here instead of stdout (temp file + rename).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct FilesArgs {
    /// Entry documents.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<String>,
}

#[derive(Debug, Args)]
pub struct FileArgs {
    /// The document to inspect.
    #[arg(value_name = "FILE")]
    pub file: String,
}

#[derive(Debug, Args)]
pub struct IndexArgs {
    /// Entry documents.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<String>,

    /// Leading fragment stripped from module keys and locations.
    #[arg(long, value_name = "PATH")]
    pub base_path: Option<String>,

    /// Prefix prepended to every location value.
    #[arg(long, value_name = "DIR")]
    pub target_dir: Option<String>,

    /// Prefix prepended to every module key.
    #[arg(long, value_name = "PREFIX")]
    pub module_prefix: Option<String>,

    /// Separator replacing `/` in module keys.
    #[arg(long, default_value = "-", value_name = "SEP")]
    pub separator: String,

    /// Field name for a document's location.
    #[arg(long, default_value = "path", value_name = "NAME")]
    pub path_key: String,

    /// Field name for a document's direct imports.
    #[arg(long, default_value = "requires", value_name = "NAME")]
    pub requires_key: String,
}
