//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SynrewriteArgs};
use crate::error::Result;
use crate::rewrite::Rewrite;
use crate::synonym::DictionaryStats;

/// Result structure for the rewrite command.
#[derive(Debug, Serialize, Deserialize)]
pub struct RewriteResults {
    pub rewrites: Vec<Rewrite>,
    pub changed: usize,
    pub duration_ms: u64,
}

/// Result structure for the lookup command.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub term: String,
    pub key: String,
    pub canonical: Option<String>,
    pub members: Vec<String>,
    pub expansion: Option<String>,
}

/// Result structure for the validate command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResult {
    pub path: String,
    pub stats: DictionaryStats,
    pub duration_ms: u64,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    /// Print the result for a person reading a terminal.
    fn print_human(&self, args: &SynrewriteArgs);
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SynrewriteArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &SynrewriteArgs) -> Result<()> {
    if args.verbosity() > 1 {
        eprintln!("{message}");
    }
    result.print_human(args);
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SynrewriteArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

impl HumanOutput for RewriteResults {
    fn print_human(&self, args: &SynrewriteArgs) {
        for rewrite in &self.rewrites {
            if args.verbosity() > 1 {
                println!("{} => {}", rewrite.original, rewrite.query);
                for span in &rewrite.matched {
                    println!(
                        "  [{}..{}] {} -> {}",
                        span.position,
                        span.position + span.tokens,
                        span.key,
                        span.expansion
                    );
                }
            } else {
                println!("{}", rewrite.query);
            }
        }

        if args.verbosity() > 1 {
            println!();
            println!(
                "Rewrote {} of {} queries in {}ms",
                self.changed,
                self.rewrites.len(),
                self.duration_ms
            );
        }
    }
}

impl HumanOutput for LookupResult {
    fn print_human(&self, _args: &SynrewriteArgs) {
        match &self.canonical {
            Some(canonical) => {
                println!("Term: {}", self.term);
                println!("Canonical: {canonical}");
                println!("Members:");
                for member in &self.members {
                    println!("  {member}");
                }
                if let Some(expansion) = &self.expansion {
                    println!("Expansion: {expansion}");
                }
            }
            None => println!("No synonym group for '{}'", self.term),
        }
    }
}

impl HumanOutput for ValidationResult {
    fn print_human(&self, _args: &SynrewriteArgs) {
        println!("Dictionary: {}", self.path);
        println!("═══════════");
        println!("Groups:            {}", self.stats.groups);
        println!("Terms:             {}", self.stats.terms);
        println!("Overwritten terms: {}", self.stats.overwritten_terms);
        println!("Skipped groups:    {}", self.stats.skipped_groups);
        println!("Longest phrase:    {} words", self.stats.max_phrase_words);
        println!("Load time:         {}ms", self.duration_ms);
    }
}
