use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "intercom-zendesk")]
#[command(about = "Plan the migration of Intercom records into Zendesk")]
pub struct Cli {
    /// Log each planning decision to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Compare an Intercom record with its Zendesk counterpart and print the actions.
    Diff(DiffArgs),
    /// Show how an HTML comment body will read once imported.
    Html(HtmlArgs),
}

#[derive(Parser, Debug)]
pub struct DiffArgs {
    /// Intercom user, admin or conversation JSON.
    pub source: PathBuf,
    /// Existing Zendesk record JSON, if one has been found.
    #[arg(long)]
    pub destination: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct HtmlArgs {
    pub file: PathBuf,
    /// Only remove tags, as done for ticket subjects.
    #[arg(long)]
    pub strip: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
