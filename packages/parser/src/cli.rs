//! Command-line interface for the parser.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use crate::config::{PREVIEW_ITEMS, PREVIEW_MAX_CHARS};
use crate::enrichment::{Enricher, EnrichmentConfig, OpenRouterClient};
use crate::error::Result;
use crate::input::load_fragments;
use crate::json::save_document;
use crate::parser::parse_fragments;
use crate::types::Document;

/// Erlass Parser - Convert extracted PDF text fragments to structured JSON.
#[derive(Parser)]
#[command(name = "erlass-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a fragments file into a structured document.
    Parse {
        /// Path to the extracted text fragments (JSON array)
        fragments: PathBuf,

        /// Path for the output document JSON
        output: PathBuf,

        /// Skip the annotation service entirely
        #[arg(long)]
        no_enrich: bool,

        /// Save every raw annotation response to this directory
        #[arg(long, value_name = "DIR")]
        dump_responses: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            fragments,
            output,
            no_enrich,
            dump_responses,
        } => parse_command(&fragments, &output, no_enrich, dump_responses),
    }
}

/// Execute the parse command.
fn parse_command(
    fragments_path: &Path,
    output_path: &Path,
    no_enrich: bool,
    dump_responses: Option<PathBuf>,
) -> Result<()> {
    println!(
        "{} {}",
        style("Parsing").bold(),
        style(fragments_path.display()).cyan()
    );
    println!();

    let fragments = load_fragments(fragments_path)?;
    let mut document = parse_fragments(&fragments);

    println!("  Title: {}", style(&document.title).green());
    if !document.date.is_empty() {
        println!("  Date: {}", document.date);
    }
    println!("  Sections: {}", document.sections.len());
    println!("  Articles: {}", document.article_count());

    if no_enrich {
        println!("  Annotation: {}", style("skipped").yellow());
    } else {
        annotate_document(&mut document, dump_responses)?;
    }

    print_preview(&document);

    save_document(&document, output_path)?;

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}

/// Print the first few sections with their first articles.
fn print_preview(document: &Document) {
    for (index, section) in document.sections.iter().take(PREVIEW_ITEMS).enumerate() {
        println!();
        println!(
            "{} {}",
            style(format!("Section {}:", index + 1)).bold(),
            section.title
        );
        for article in section.articles.iter().take(PREVIEW_ITEMS) {
            println!("  Art. {}: {}", article.number, article.title);
            if !article.content.is_empty() {
                println!("    {}", excerpt(&article.content));
            }
        }
    }
}

/// First [`PREVIEW_MAX_CHARS`] characters of the content, with an
/// ellipsis when cut short.
fn excerpt(content: &str) -> String {
    let mut chars = content.chars();
    let mut excerpt: String = chars.by_ref().take(PREVIEW_MAX_CHARS).collect();
    if chars.next().is_some() {
        excerpt.push_str("...");
    }
    excerpt
}

/// Annotate the document via the configured service.
///
/// A missing or unusable configuration skips annotation instead of
/// failing the run; the structural output is still written.
fn annotate_document(document: &mut Document, dump_responses: Option<PathBuf>) -> Result<()> {
    let mut config = match EnrichmentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "annotation disabled");
            println!(
                "  Annotation: {}",
                style("skipped (ANNOTATION_API_KEY not set)").yellow()
            );
            return Ok(());
        }
    };
    if dump_responses.is_some() {
        config.dump_dir = dump_responses;
    }

    let client = OpenRouterClient::new(&config)?;
    let enricher = Enricher::new(&client, &config);

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Requesting annotations...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    enricher.enrich(document);

    pb.finish_and_clear();
    println!("  Annotation: {}", style("done").green());

    Ok(())
}
