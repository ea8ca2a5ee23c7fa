//! Command implementations for the plurales CLI.

use std::io::{self, BufRead};

use log::{debug, info};

use crate::analysis::factory::{AnalysisConfig, FilterConfig, FilterRegistry};
use crate::analysis::token::{BoxTokenStream, Token, TokenStream};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{PluralesError, Result};

/// Execute a CLI command.
pub fn execute_command(args: PluralesArgs) -> Result<()> {
    let registry = FilterRegistry::default();
    match &args.command {
        Command::Stem(stem_args) => stem_text(stem_args, &registry, &args),
        Command::Filters => list_filters(&registry, &args),
    }
}

/// Resolve the filter chain described by the stem command's arguments.
///
/// The chain comes from `--config`, else from the `--filter` list, else it
/// is the default chain. `--param` values are then added to every filter of
/// the chain with a matching name.
pub fn resolve_config(args: &StemArgs) -> Result<AnalysisConfig> {
    let mut config = if let Some(path) = &args.config {
        info!("Loading filter chain from: {}", path.display());
        AnalysisConfig::from_path(path)?
    } else if !args.filters.is_empty() {
        AnalysisConfig {
            filters: args.filters.iter().map(FilterConfig::new).collect(),
        }
    } else {
        AnalysisConfig::default()
    };

    for param in &args.params {
        let (filter, key, value) = parse_param(param)?;
        let mut matched = false;
        for entry in config.filters.iter_mut().filter(|entry| entry.name == filter) {
            entry.params.insert(key, value);
            matched = true;
        }
        if !matched {
            return Err(PluralesError::invalid_argument(format!(
                "parameter '{param}' names filter '{filter}', which is not in the chain"
            )));
        }
    }

    Ok(config)
}

/// Split a `FILTER:KEY=VALUE` argument.
pub fn parse_param(param: &str) -> Result<(&str, &str, &str)> {
    let (filter, assignment) = param.split_once(':').ok_or_else(|| {
        PluralesError::invalid_argument(format!("expected FILTER:KEY=VALUE, got '{param}'"))
    })?;
    let (key, value) = assignment.split_once('=').ok_or_else(|| {
        PluralesError::invalid_argument(format!("expected FILTER:KEY=VALUE, got '{param}'"))
    })?;
    if filter.is_empty() || key.is_empty() {
        return Err(PluralesError::invalid_argument(format!(
            "expected FILTER:KEY=VALUE, got '{param}'"
        )));
    }
    Ok((filter, key, value))
}

/// Reset `stream` onto `text` and collect every token it produces.
pub fn analyze_text(stream: &mut BoxTokenStream<'_>, text: &str) -> Vec<Token> {
    stream.reset(text);
    let mut tokens = Vec::new();
    stream.process(&mut |token: &Token| tokens.push(token.clone()));
    tokens
}

/// Run the stem command.
fn stem_text(args: &StemArgs, registry: &FilterRegistry, cli_args: &PluralesArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let mut stream = registry.build_chain(Box::new(WhitespaceTokenizer::new()), &config.filters)?;
    debug!(
        "filter chain: {}",
        config
            .filters
            .iter()
            .map(|filter| filter.name.as_str())
            .collect::<Vec<_>>()
            .join(" -> ")
    );

    match &args.text {
        Some(text) => {
            let tokens = analyze_text(&mut stream, text);
            output_analysis(&AnalyzedText::new(text, tokens), cli_args)?;
        }
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                let tokens = analyze_text(&mut stream, &line);
                output_analysis(&AnalyzedText::new(&line, tokens), cli_args)?;
            }
        }
    }

    Ok(())
}

/// Run the filters command.
fn list_filters(registry: &FilterRegistry, cli_args: &PluralesArgs) -> Result<()> {
    let filters: Vec<FilterInfo> = registry
        .names()
        .into_iter()
        .map(|name| FilterInfo {
            name: name.to_string(),
            parameters: registry
                .parameters(name)
                .unwrap_or_default()
                .iter()
                .map(|parameter| parameter.to_string())
                .collect(),
        })
        .collect();
    output_filters(&filters, cli_args)
}
