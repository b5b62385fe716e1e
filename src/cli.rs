use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "seo-guard")]
#[command(author, version, about = "Content quality guard - audit HTML documents against SEO checks")]
#[command(long_about = "A tool to audit rendered HTML documents against a catalogue of \
    content-quality checks.\n\n\
    Exit codes:\n  \
    0 - All documents passed\n  \
    1 - Failing documents found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze HTML documents against the check catalogue
    Analyze(AnalyzeArgs),

    /// List the available checks
    Checks,

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Paths to analyze (files or directories; `-` reads from stdin)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Focus keyword to look for in title, description and body
    #[arg(short = 'k', long)]
    pub focus_keyword: Option<String>,

    /// Rendered page title, when it is managed outside the HTML
    #[arg(long)]
    pub title: Option<String>,

    /// Meta description, when it is managed outside the HTML
    #[arg(long)]
    pub meta_description: Option<String>,

    /// Canonical URL, when it is managed outside the HTML
    #[arg(long)]
    pub canonical: Option<String>,

    /// Robots directive, when it is managed outside the HTML
    #[arg(long)]
    pub robots: Option<String>,

    /// Disable a check by id (can be specified multiple times)
    #[arg(long, short = 'd', value_name = "CHECK_ID")]
    pub disable: Vec<String>,

    /// File extensions to analyze (comma-separated, e.g., html,htm)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only warn, don't fail on check violations
    #[arg(long)]
    pub warn_only: bool,

    /// Treat warnings as failures (exit code 1)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".seo-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax
    Validate {
        /// Path to configuration file (default: .seo-guard.toml)
        #[arg(short, long, default_value = ".seo-guard.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
