//! Lattice UI preview - renders the components to an HTML page.
//!
//! Server-side renders the responsive container and syntax highlighter
//! with the highlighter stylesheet inlined, so the output can be opened
//! directly in a browser.
//!
//! Usage:
//!   ssr-preview
//!   ssr-preview --language rust --file src/main.rs --line-numbers
//!   ssr-preview --max-width md --no-padding --output preview.html
//!   ssr-preview --list-themes

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::prelude::*;

use lattice_highlight::{Highlighter, DEFAULT_THEME};
use lattice_ui::{container_class, MaxWidth, ResponsiveContainer, SyntaxHighlighter};

/// Built-in sample shown when no source file is given.
const SAMPLE_SOURCE: &str = r#"function greet(name) {
  const message = `Hello, ${name}!`;
  return message;
}
"#;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "ssr-preview")]
#[command(about = "Render Lattice UI components to an HTML page")]
struct Args {
    /// Width tier token (sm, md, lg, xl, 2xl, full); an unknown token
    /// renders without a width cap
    #[arg(long, default_value = "xl")]
    max_width: String,

    /// Disable the container padding scale
    #[arg(long)]
    no_padding: bool,

    /// Language tag forwarded to the highlighter (javascript when omitted)
    #[arg(short, long)]
    language: Option<String>,

    /// Show the line-number gutter
    #[arg(long)]
    line_numbers: bool,

    /// Source file to highlight instead of the built-in sample
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Highlighter theme for the generated stylesheet
    #[arg(short, long, default_value = DEFAULT_THEME)]
    theme: String,

    /// Write the page to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List available highlighter themes and exit
    #[arg(long)]
    list_themes: bool,
}

/// Build the preview body: a responsive shell around the code view.
fn page(args: &Args, source: String) -> Element {
    let code_view = rsx! {
        SyntaxHighlighter {
            language: args.language.clone(),
            show_line_numbers: args.line_numbers,
            source: source,
        }
    };

    match MaxWidth::from_token(&args.max_width) {
        Some(width) => rsx! {
            ResponsiveContainer {
                max_width: width,
                padding: !args.no_padding,
                class: Some("preview-shell".to_string()),
                {code_view}
            }
        },
        None => {
            tracing::debug!(
                token = args.max_width.as_str(),
                "unknown width token, rendering without a width cap"
            );
            let class_list = container_class(None, !args.no_padding, Some("preview-shell"));
            rsx! {
                div { class: "{class_list}", {code_view} }
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let highlighter = Highlighter::new();
    if args.list_themes {
        for name in highlighter.available_themes() {
            println!("{name}");
        }
        return Ok(());
    }

    let source = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => SAMPLE_SOURCE.to_string(),
    };

    if let Some(language) = &args.language {
        if !highlighter.supports(language) {
            tracing::debug!(
                language = language.as_str(),
                "language not recognized, code renders as plain text"
            );
        }
    }

    let css = highlighter.theme_css(&args.theme)?;
    let body = dioxus_ssr::render_element(page(&args, source));
    let page_html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Lattice UI preview</title>\n<style>\n{css}\n</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    );

    match &args.output {
        Some(path) => fs::write(path, &page_html)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{page_html}"),
    }

    Ok(())
}
