//! # plurales
//!
//! A rule-based Spanish plural stem filter for text analysis pipelines.
//!
//! ## Features
//!
//! - Pure Rust, no dictionary, no allocation per stemmed token
//! - Idempotent stemming (`sociedades` -> `sociedad`, `luces` -> `luz`)
//! - Pull-based token streams that chain by ownership
//! - Name based filter factories with strict parameter validation
//!
//! ## Example
//!
//! ```
//! use plurales::prelude::*;
//!
//! let registry = FilterRegistry::default();
//! let upstream = Box::new(WhitespaceTokenizer::from_text("sociedades anónimas"));
//! let mut stream = registry
//!     .build("SpanishPluralStem", upstream, FilterParams::new())
//!     .unwrap();
//!
//! let mut stems = Vec::new();
//! stream.process(&mut |token: &Token| stems.push(token.text.clone()));
//! assert_eq!(stems, vec!["sociedad", "anónima"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::factory::{
        AnalysisConfig, FilterConfig, FilterParams, FilterRegistry, SpanishPluralStemFilterFactory,
        TokenFilterFactory,
    };
    pub use crate::analysis::token::{BoxTokenStream, Token, TokenStream, TokenType};
    pub use crate::analysis::token_filter::{
        LowercaseFilter, SpanishPluralStemmer, StemFilter, Stemmer,
    };
    pub use crate::analysis::tokenizer::WhitespaceTokenizer;
    pub use crate::error::{ConfigurationError, PluralesError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
