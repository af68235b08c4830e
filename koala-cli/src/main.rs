//! Koala HTML parser CLI.
//!
//! A small headless driver over the tokenizer and tree constructor, useful
//! for inspecting how a document parses without a GUI shell.

use anyhow::{Context, Result};
use clap::Parser;
use koala_html::print_tree;
use owo_colors::OwoColorize;

/// Parse an HTML document and print its DOM tree.
#[derive(Parser, Debug)]
#[command(name = "koala-cli")]
#[command(author, version, about, long_about = None)]
#[command(group = clap::ArgGroup::new("input").required(true))]
#[command(after_help = r#"EXAMPLES:
    # Parse a local file and show its DOM tree
    koala-cli ./index.html

    # Fetch a URL and show its DOM tree
    koala-cli https://example.com

    # Parse inline HTML
    koala-cli --html '<html><body><h1>Test</h1></body></html>'
"#)]
struct Cli {
    /// Path to an HTML file, or a URL to fetch.
    #[arg(value_name = "FILE|URL", group = "input")]
    path: Option<String>,

    /// Parse an HTML string directly instead of a file or URL.
    #[arg(long, value_name = "HTML", group = "input")]
    html: Option<String>,

    /// Suppress the DOM tree and only print the summary and parse issues.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = if let Some(html) = cli.html {
        html
    } else if let Some(path) = cli.path {
        load_source(&path)?
    } else {
        anyhow::bail!("either a file/URL argument or --html must be provided");
    };

    let (document, issues) = koala_html::parse(source);

    if !cli.quiet {
        println!("{}", "=== DOM Tree ===".bold());
        print_tree(document.tree(), document.tree().root(), 0);
        println!();
    }

    println!("{}", "=== Document ===".bold());
    println!(
        "doctype: {}",
        document.doctype_name().unwrap_or("(none)")
    );
    if let Some(public_id) = document.public_identifier() {
        println!("public identifier: {public_id:?}");
    }
    if let Some(system_id) = document.system_identifier() {
        println!("system identifier: {system_id:?}");
    }
    println!("quirks mode: {:?}", document.quirks_mode());
    if let Some(title) = document.title() {
        println!("title: {title:?}");
    }

    if !issues.is_empty() {
        println!("\n{}", "=== Parse Issues ===".yellow().bold());
        for issue in &issues {
            println!("  [{}] {}", issue.token_index, issue.message);
        }
    }

    Ok(())
}

/// Read HTML source from a local file path, or fetch it from a URL.
///
/// A bare argument is treated as a URL when it parses as one with an
/// `http`/`https` scheme, and as a file path otherwise.
fn load_source(path: &str) -> Result<String> {
    if path.starts_with("http://") || path.starts_with("https://") {
        koala_common::net::load_html(path).map_err(|e| anyhow::anyhow!("{e}"))
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
    }
}
