use crate::config::UiPreset;
use crate::link::LinkScope;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "linkguard",
    version,
    about = "Warns about links that impersonate well-known sites",
    long_about = "linkguard classifies link hostnames as safe, warning, danger or unknown by comparing them \
against a trusted domain list with edit distance and homoglyph folding."
)]
pub struct Cli {
    /// URLs or hostnames to analyze
    #[arg(required_unless_present_any = ["stdin", "save_preferences"])]
    pub targets: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Presentation density (overrides the saved preference)
    #[arg(long = "ui", value_enum)]
    pub ui_preset: Option<UiPreset>,

    /// Which links to inspect (overrides the saved preference)
    #[arg(long, value_enum)]
    pub scope: Option<LinkScope>,

    /// Host of the page the links come from; same-host links are skipped in `links` scope
    #[arg(long)]
    pub page_host: Option<String>,

    /// Configuration file (default: discovered .linkguard.* or the user config)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Additional trusted domain (repeatable)
    #[arg(long = "trusted", value_name = "DOMAIN")]
    pub trusted: Vec<String>,

    /// Do not start from the built-in trusted list
    #[arg(long)]
    pub no_default_trusted: bool,

    /// Answer LINKGUARD_ANALYZE messages read as JSON lines from stdin
    #[arg(long, conflicts_with = "targets")]
    pub stdin: bool,

    /// Persist --ui and --scope as the saved preferences
    #[arg(long)]
    pub save_preferences: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
