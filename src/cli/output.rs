//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, PluralesArgs};
use crate::error::Result;

/// Result structure for one analyzed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedText {
    pub text: String,
    pub tokens: Vec<Token>,
}

impl AnalyzedText {
    pub fn new(text: &str, tokens: Vec<Token>) -> Self {
        AnalyzedText {
            text: text.to_string(),
            tokens,
        }
    }

    /// The token texts joined by single spaces.
    pub fn terms(&self) -> String {
        self.tokens
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A registered filter and the parameters it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterInfo {
    pub name: String,
    pub parameters: Vec<String>,
}

/// Output the tokens of one analyzed input.
pub fn output_analysis(result: &AnalyzedText, args: &PluralesArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{}", result.text);
                for token in &result.tokens {
                    println!(
                        "  {:>3}  {:>4}..{:<4}  {}",
                        token.position, token.start_offset, token.end_offset, token.text
                    );
                }
            } else {
                println!("{}", result.terms());
            }
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output the list of registered filters.
pub fn output_filters(filters: &[FilterInfo], args: &PluralesArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("Token Filters:");
                println!("══════════════");
            }
            for filter in filters {
                if filter.parameters.is_empty() {
                    println!("{} (no parameters)", filter.name);
                } else {
                    println!("{} ({})", filter.name, filter.parameters.join(", "));
                }
            }
            Ok(())
        }
        OutputFormat::Json => output_json(&filters, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PluralesArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
