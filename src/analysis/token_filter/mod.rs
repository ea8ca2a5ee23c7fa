//! Token filter implementations for token transformation.
//!
//! A token filter wraps another [`TokenStream`] and rewrites the current
//! token each time it is advanced. Filters own the stream they wrap, so a
//! tokenizer followed by any number of filters is a single value:
//!
//! ```text
//! WhitespaceTokenizer → LowercaseFilter → StemFilter → consumer
//! ```
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stem::StemFilter`] - Reduces Spanish plurals to their singular stem
//!
//! [`TokenStream`]: crate::analysis::token::TokenStream

pub mod lowercase;
pub mod stem;

pub use lowercase::LowercaseFilter;
pub use stem::{SpanishPluralStemFilter, SpanishPluralStemmer, StemFilter, Stemmer};
