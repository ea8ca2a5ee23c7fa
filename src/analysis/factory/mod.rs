//! Building token filters by name.
//!
//! A filter is built in two steps. Its factory is created from raw
//! [`FilterParams`], which fails with a [`ConfigurationError`] if any
//! parameter is not recognized; the factory then wraps as many upstream
//! streams as needed. [`FilterRegistry`] adds name based lookup on top and
//! can build a whole chain from an [`AnalysisConfig`].
//!
//! ```
//! use plurales::analysis::factory::{FilterParams, FilterRegistry};
//! use plurales::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let registry = FilterRegistry::default();
//! let params = FilterParams::new().with("bogusArg", "bogusValue");
//! let err = registry
//!     .build("SpanishPluralStem", Box::new(WhitespaceTokenizer::new()), params)
//!     .err()
//!     .unwrap();
//! assert!(err.to_string().contains("Unknown parameters"));
//! ```
//!
//! [`ConfigurationError`]: crate::error::ConfigurationError

use crate::analysis::token::BoxTokenStream;

pub mod config;
pub mod filters;
pub mod params;
pub mod registry;

pub use config::{AnalysisConfig, FilterConfig};
pub use filters::{LowercaseFilterFactory, SpanishPluralStemFilterFactory};
pub use params::FilterParams;
pub use registry::{FactoryConstructor, FilterRegistry};

/// A configured token filter that can wrap upstream streams.
///
/// Factories hold no per-stream state; one factory can create filters for
/// any number of independent streams, on any thread.
pub trait TokenFilterFactory: Send + Sync {
    /// Name the factory is registered under.
    fn name(&self) -> &'static str;

    /// Wrap `upstream` with a new filter instance.
    fn create<'a>(&self, upstream: BoxTokenStream<'a>) -> BoxTokenStream<'a>;
}
