//! Command implementations for the synrewrite CLI.

use std::io::{self, BufRead};
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::analysis::normalize::normalize_term;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{RewriterConfig, TokenizerKind};
use crate::error::{Result, SynonymError};
use crate::synonym::SynonymDictionary;

/// Execute a CLI command.
pub fn execute_command(args: SynrewriteArgs) -> Result<()> {
    match &args.command {
        Command::Rewrite(rewrite_args) => rewrite_queries(rewrite_args.clone(), &args),
        Command::Lookup(lookup_args) => lookup_term(lookup_args.clone(), &args),
        Command::Validate(validate_args) => validate_dictionary(validate_args.clone(), &args),
    }
}

/// Merge the config file (if any) with command line overrides.
fn resolve_config(
    cli_args: &SynrewriteArgs,
    dictionary: &DictionaryArgs,
    tokenizer: Option<TokenizerKind>,
) -> Result<RewriterConfig> {
    let mut config = match &cli_args.config {
        Some(path) => {
            debug!(path = %path.display(), "Loading rewriter configuration");
            RewriterConfig::load_from_file(path)?
        }
        None => RewriterConfig::default(),
    };

    if let Some(path) = &dictionary.dictionary {
        config.dictionary_path = Some(path.clone());
    }
    if let Some(tokenizer) = tokenizer {
        config.tokenizer = tokenizer;
    }
    if config.dictionary_path.is_none() {
        return Err(SynonymError::config(
            "No synonym dictionary given. Use --dictionary or set dictionary_path in --config.",
        ));
    }

    Ok(config)
}

/// Rewrite queries from the command line or stdin.
fn rewrite_queries(args: RewriteArgs, cli_args: &SynrewriteArgs) -> Result<()> {
    let config = resolve_config(cli_args, &args.dictionary, args.tokenizer)?;
    let rewriter = config.build_rewriter()?;

    let queries = if args.queries.is_empty() {
        read_queries(io::stdin().lock())?
    } else {
        args.queries
    };

    let start_time = Instant::now();
    let rewrites = rewriter.rewrite_batch(&queries);
    let duration = start_time.elapsed();

    let changed = rewrites.iter().filter(|rewrite| rewrite.is_changed()).count();

    output_result(
        "Queries rewritten",
        &RewriteResults {
            rewrites,
            changed,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Read one query per line; blank lines are kept so output lines up with input.
fn read_queries<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.map_err(SynonymError::from))
        .collect()
}

/// Show the group a term resolves to.
fn lookup_term(args: LookupArgs, cli_args: &SynrewriteArgs) -> Result<()> {
    let config = resolve_config(cli_args, &args.dictionary, None)?;
    let dictionary = config.load_dictionary()?;

    let key = normalize_term(&args.term);
    let group = dictionary.lookup_normalized(&key);

    output_result(
        "Lookup completed",
        &LookupResult {
            term: args.term.clone(),
            key,
            canonical: group.map(|g| g.canonical().to_string()),
            members: group.map(|g| g.members().to_vec()).unwrap_or_default(),
            expansion: group.map(|g| g.to_disjunction()),
        },
        cli_args,
    )
}

/// Load a dictionary and print its statistics.
fn validate_dictionary(args: ValidateArgs, cli_args: &SynrewriteArgs) -> Result<()> {
    let config = resolve_config(cli_args, &args.dictionary, None)?;
    let path = config
        .dictionary_path
        .clone()
        .unwrap_or_default();

    let start_time = Instant::now();
    let dictionary = load_dictionary(&path)?;
    let duration = start_time.elapsed();

    output_result(
        "Dictionary is valid",
        &ValidationResult {
            path: path.to_string_lossy().to_string(),
            stats: dictionary.stats().clone(),
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

fn load_dictionary(path: &Path) -> Result<SynonymDictionary> {
    if !path.exists() {
        return Err(SynonymError::load(format!(
            "Dictionary file '{}' does not exist",
            path.display()
        )));
    }
    SynonymDictionary::load_from_file(path)
}
