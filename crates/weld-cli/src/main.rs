//! weld CLI - dependency-aware concatenation of text documents.
//!
//! Thin entry point: parse arguments, set up logging, dispatch.

mod cli;
mod commands;
mod logger;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    logger::init_logger(args.verbose, args.quiet);

    match args.command {
        cli::Command::Bundle(bundle) => commands::bundle(bundle, &args.extension).await,
        cli::Command::List(list) => commands::list(list, &args.extension).await,
        cli::Command::Imports(imports) => commands::imports(imports, &args.extension).await,
        cli::Command::Graph(graph) => commands::graph(graph, &args.extension).await,
        cli::Command::Index(index) => commands::index(index, &args.extension).await,
    }
}
