//! Factories for the token filters shipped with this crate.

use log::debug;

use crate::analysis::factory::{FilterParams, TokenFilterFactory};
use crate::analysis::token::{BoxTokenStream, TokenStream};
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::{SpanishPluralStemFilter, SpanishPluralStemmer, StemFilter};
use crate::error::ConfigurationError;

/// Factory for the Spanish plural stem filter, registered as
/// `"SpanishPluralStem"`. It accepts no parameters.
///
/// # Examples
///
/// ```
/// use plurales::analysis::factory::{FilterParams, SpanishPluralStemFilterFactory};
/// use plurales::analysis::token::TokenStream;
/// use plurales::analysis::tokenizer::WhitespaceTokenizer;
///
/// let factory = SpanishPluralStemFilterFactory::new(FilterParams::new()).unwrap();
/// let mut stream = factory.create_filter(WhitespaceTokenizer::from_text("sociedades"));
/// assert_eq!(stream.next().map(|t| t.text.as_str()), Some("sociedad"));
///
/// let params = FilterParams::new().with("bogusArg", "bogusValue");
/// let err = SpanishPluralStemFilterFactory::new(params).unwrap_err();
/// assert!(err.to_string().contains("Unknown parameters"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpanishPluralStemFilterFactory {
    stemmer: SpanishPluralStemmer,
}

impl SpanishPluralStemFilterFactory {
    /// Name this factory is registered under.
    pub const NAME: &'static str = "SpanishPluralStem";

    /// Accepted parameter names.
    pub const PARAMETERS: &'static [&'static str] = &[];

    /// Validate `params` and create the factory.
    pub fn new(params: FilterParams) -> Result<Self, ConfigurationError> {
        params.finish(Self::NAME)?;
        Ok(SpanishPluralStemFilterFactory {
            stemmer: SpanishPluralStemmer::new(),
        })
    }

    /// Validate `params` and wrap `upstream` in one step.
    pub fn build<T: TokenStream>(
        upstream: T,
        params: FilterParams,
    ) -> Result<SpanishPluralStemFilter<T>, ConfigurationError> {
        Ok(Self::new(params)?.create_filter(upstream))
    }

    /// Wrap `upstream`, keeping its concrete type.
    pub fn create_filter<T: TokenStream>(&self, upstream: T) -> SpanishPluralStemFilter<T> {
        StemFilter::with_stemmer(upstream, self.stemmer)
    }
}

impl TokenFilterFactory for SpanishPluralStemFilterFactory {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn create<'a>(&self, upstream: BoxTokenStream<'a>) -> BoxTokenStream<'a> {
        debug!("wrapping token stream with {}", Self::NAME);
        Box::new(self.create_filter(upstream))
    }
}

/// Factory for [`LowercaseFilter`], registered as `"LowerCase"`. It accepts
/// no parameters.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilterFactory;

impl LowercaseFilterFactory {
    /// Name this factory is registered under.
    pub const NAME: &'static str = "LowerCase";

    /// Accepted parameter names.
    pub const PARAMETERS: &'static [&'static str] = &[];

    /// Validate `params` and create the factory.
    pub fn new(params: FilterParams) -> Result<Self, ConfigurationError> {
        params.finish(Self::NAME)?;
        Ok(LowercaseFilterFactory)
    }
}

impl TokenFilterFactory for LowercaseFilterFactory {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn create<'a>(&self, upstream: BoxTokenStream<'a>) -> BoxTokenStream<'a> {
        debug!("wrapping token stream with {}", Self::NAME);
        Box::new(LowercaseFilter::new(upstream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::WhitespaceTokenizer;

    #[test]
    fn test_spanish_plural_factory_rejects_any_parameter() {
        let params = FilterParams::new()
            .with("bogusArg", "bogusValue")
            .with("language", "es");
        let err = SpanishPluralStemFilterFactory::new(params).unwrap_err();
        assert_eq!(err.filter, "SpanishPluralStem");
        assert_eq!(err.names, vec!["bogusArg", "language"]);
    }

    #[test]
    fn test_spanish_plural_factory_build() {
        let mut stream = SpanishPluralStemFilterFactory::build(
            WhitespaceTokenizer::from_text("sociedades"),
            FilterParams::new(),
        )
        .unwrap();
        assert!(stream.advance());
        assert_eq!(stream.token().text, "sociedad");
        assert!(!stream.advance());
    }

    #[test]
    fn test_boxed_create() {
        let factory = SpanishPluralStemFilterFactory::new(FilterParams::new()).unwrap();
        assert_eq!(factory.name(), "SpanishPluralStem");

        let upstream: BoxTokenStream<'static> = Box::new(WhitespaceTokenizer::from_text("peces"));
        let mut stream = factory.create(upstream);
        assert_eq!(stream.next().map(|t| t.text.clone()), Some("pez".to_string()));
    }

    #[test]
    fn test_lowercase_factory() {
        assert!(LowercaseFilterFactory::new(FilterParams::new().with("x", "y")).is_err());

        let factory = LowercaseFilterFactory::new(FilterParams::new()).unwrap();
        assert_eq!(factory.name(), "LowerCase");
        let mut stream = factory.create(Box::new(WhitespaceTokenizer::from_text("LUCES")));
        assert_eq!(stream.next().map(|t| t.text.clone()), Some("luces".to_string()));
    }
}
