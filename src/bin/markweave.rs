//! Command-line interface for markweave.
//!
//! Usage:
//!   markweave render <path>  - Tokenize, parse, and render a document to HTML on stdout
//!   markweave tokens <path>  - Dump the flat token stream, one token per line
//!   markweave tree <path>    - Dump the parsed document tree as pretty-printed JSON

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "markweave")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize, parse, and render markweave documents")]
struct Args {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Tokenize, parse, and render a document to HTML
    Render {
        /// Path to the Markdown file to render
        path: PathBuf,
    },
    /// Dump the flat token stream for a document
    Tokens {
        /// Path to the Markdown file to tokenize
        path: PathBuf,
    },
    /// Dump the parsed document tree as pretty-printed JSON
    Tree {
        /// Path to the Markdown file to parse
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .without_time()
        .init();

    let args = Args::parse();
    match args.command {
        Cmd::Render { path } => render_command(&path),
        Cmd::Tokens { path } => tokens_command(&path),
        Cmd::Tree { path } => tree_command(&path),
    }
}

fn render_command(path: &PathBuf) -> Result<()> {
    let source = read_source(path)?;

    let nodes = markweave::parse(&source).unwrap_or_else(|err| {
        error!(%err, path = %path.display(), "parse failed");
        std::process::exit(1);
    });
    info!(nodes = nodes.len(), path = %path.display(), "parsed document");

    let mut out = String::new();
    markweave::render_html(&nodes, &mut out).context("rendering document to HTML")?;
    print!("{out}");
    Ok(())
}

fn tokens_command(path: &PathBuf) -> Result<()> {
    let source = read_source(path)?;

    let (tokens, span_map) = markweave::tokenize(&source).unwrap_or_else(|err| {
        error!(%err, path = %path.display(), "tokenize failed");
        std::process::exit(1);
    });
    info!(tokens = tokens.len(), path = %path.display(), "tokenized document");

    for spanned in &tokens {
        match span_map.lookup(spanned.span) {
            Some(lc) => println!("{lc}  {:?}", spanned.token),
            None => println!("?:?-?:?  {:?}", spanned.token),
        }
    }
    Ok(())
}

fn tree_command(path: &PathBuf) -> Result<()> {
    let source = read_source(path)?;

    let nodes = markweave::parse(&source).unwrap_or_else(|err| {
        error!(%err, path = %path.display(), "parse failed");
        std::process::exit(1);
    });
    info!(nodes = nodes.len(), path = %path.display(), "parsed document");

    let json = serde_json::to_string_pretty(&nodes).context("serializing document tree to JSON")?;
    println!("{json}");
    Ok(())
}

fn read_source(path: &PathBuf) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
