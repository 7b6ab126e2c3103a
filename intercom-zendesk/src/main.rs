use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use html_text_core::{html_to_ascii_document, parse_file, text_content};
use intercom_zendesk::differ::diff;
use intercom_zendesk::model::{DestinationEntity, SourceEntity};
use intercom_zendesk::report::{render_summary, render_text};
use tracing::info;

mod cli;
mod logging;

use cli::{Cli, Command, DiffArgs, HtmlArgs, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Diff(args) => run_diff(args),
        Command::Html(args) => run_html(args),
    }
}

fn run_diff(args: DiffArgs) -> Result<()> {
    let source = SourceEntity::from_json_str(&read(&args.source)?)
        .with_context(|| format!("failed to decode source entity {}", args.source.display()))?;

    let destination = match &args.destination {
        Some(path) => Some(
            DestinationEntity::from_json_str(&read(path)?)
                .with_context(|| format!("failed to decode destination {}", path.display()))?,
        ),
        None => None,
    };

    let actions = diff(&source, destination.as_ref())
        .with_context(|| format!("failed to plan {} {}", source.kind(), source.reference()))?;
    info!(count = actions.len(), "planned actions");

    match args.format {
        OutputFormat::Text => {
            println!("{}", render_text(&actions));
            println!();
            println!("{}", render_summary(&actions));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&actions)?),
    }

    Ok(())
}

fn run_html(args: HtmlArgs) -> Result<()> {
    let doc = parse_file(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;

    let text = if args.strip {
        text_content(&doc)
    } else {
        html_to_ascii_document(&doc)
    };
    println!("{text}");
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
