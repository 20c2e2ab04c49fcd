//! Command-line interface for deck-to-markdown.
//!
//! With no arguments the embedded sample deck is converted and printed. With an
//! input path the file is converted and printed; with an output path as well the
//! Markdown is written there instead.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use deck_to_markdown::{ConversionOptions, HeaderlessTables, RootMode, convert_with_options};
use log::{LevelFilter, debug, info};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Deck exported from DeckDeckGo, converted when no input is given.
const SAMPLE_DECK: &str = include_str!("sample_deck.html");

/// Convert DeckDeckGo HTML exports to Obsidian Markdown.
#[derive(Parser, Debug)]
#[command(name = "deck-to-markdown", version, about, long_about = None)]
struct Cli {
    /// HTML file to convert. Without it a built-in sample deck is converted.
    input: Option<PathBuf>,

    /// Markdown file to write. Without it the result goes to stdout.
    output: Option<PathBuf>,

    /// Only render a <section>; print a notice when the document has none.
    #[arg(long)]
    strict: bool,

    /// Give tables without a header row an empty header so they stay tables.
    #[arg(long)]
    synthesize_table_headers: bool,

    /// Log to stderr; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn conversion_options(&self) -> ConversionOptions {
        let root_mode = if self.strict { RootMode::Strict } else { RootMode::Fallback };
        let headerless_tables = if self.synthesize_table_headers {
            HeaderlessTables::Synthesize
        } else {
            HeaderlessTables::Passthrough
        };
        ConversionOptions::default()
            .with_root_mode(root_mode)
            .with_headerless_tables(headerless_tables)
    }
}

fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        ConfigBuilder::new().add_filter_ignore_str("html5ever").build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logging")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let options = cli.conversion_options();
    debug!("conversion options: {options:?}");

    let Some(input) = cli.input else {
        info!("no input given, converting the built-in sample deck");
        let markdown = convert_with_options(SAMPLE_DECK, &options)?;
        println!("{markdown}");
        return Ok(());
    };

    let html = fs::read_to_string(&input).with_context(|| format!("Error reading file {}", input.display()))?;
    let markdown = convert_with_options(&html, &options)?;

    match cli.output {
        Some(output) => {
            fs::write(&output, &markdown).with_context(|| format!("Error writing file {}", output.display()))?;
            info!("wrote {} bytes to {}", markdown.len(), output.display());
        }
        None => println!("{markdown}"),
    }

    Ok(())
}
