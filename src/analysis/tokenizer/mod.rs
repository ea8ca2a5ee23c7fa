//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline: they split input
//! text into tokens and are themselves [`TokenStream`]s, so token filters can
//! wrap them directly.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//!
//! # Examples
//!
//! ```
//! use plurales::analysis::token::TokenStream;
//! use plurales::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let mut tokenizer = WhitespaceTokenizer::from_text("Hola mundo");
//! assert_eq!(tokenizer.next().map(|t| t.text.as_str()), Some("Hola"));
//! assert_eq!(tokenizer.next().map(|t| t.text.as_str()), Some("mundo"));
//! assert!(tokenizer.next().is_none());
//! ```
//!
//! [`TokenStream`]: crate::analysis::token::TokenStream

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
