//! Command line argument parsing for the synrewrite CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::TokenizerKind;

/// synrewrite - Synonym-aware query rewriting
#[derive(Parser, Debug, Clone)]
#[command(name = "synrewrite")]
#[command(about = "Expand search queries with synonym OR-groups")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SynrewriteArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Rewriter configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SYNREWRITE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SynrewriteArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rewrite queries (arguments, or one per stdin line)
    Rewrite(RewriteArgs),

    /// Show the synonym group a term resolves to
    Lookup(LookupArgs),

    /// Load a dictionary and report its statistics
    Validate(ValidateArgs),
}

/// Dictionary selection shared by all commands
#[derive(Args, Debug, Clone, Default)]
pub struct DictionaryArgs {
    /// Synonym dictionary file (JSON); overrides the config file
    #[arg(short, long, value_name = "DICTIONARY_FILE", env = "SYNREWRITE_DICTIONARY")]
    pub dictionary: Option<PathBuf>,
}

/// Arguments for rewriting queries
#[derive(Parser, Debug, Clone)]
pub struct RewriteArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Tokenizer; overrides the config file
    #[arg(short, long, value_enum)]
    pub tokenizer: Option<TokenizerKind>,

    /// Queries to rewrite; reads stdin when omitted
    #[arg(value_name = "QUERY")]
    pub queries: Vec<String>,
}

/// Arguments for looking up a term
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Term or phrase to look up
    #[arg(value_name = "TERM")]
    pub term: String,
}

/// Arguments for dictionary validation
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
