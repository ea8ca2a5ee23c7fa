//! Name based lookup of token filter factories.

use ahash::AHashMap;
use log::{debug, trace};

use crate::analysis::factory::config::FilterConfig;
use crate::analysis::factory::filters::{LowercaseFilterFactory, SpanishPluralStemFilterFactory};
use crate::analysis::factory::{FilterParams, TokenFilterFactory};
use crate::analysis::token::BoxTokenStream;
use crate::error::{PluralesError, Result};

/// Builds a factory from validated parameters.
pub type FactoryConstructor = fn(FilterParams) -> Result<Box<dyn TokenFilterFactory>>;

#[derive(Clone, Copy)]
struct FilterEntry {
    parameters: &'static [&'static str],
    constructor: FactoryConstructor,
}

/// Maps filter names to factory constructors.
///
/// The registry is filled once at startup and only read afterwards. Lookups
/// are exact, case-sensitive name matches. Parameters are checked against the
/// filter's declared allow-list before its constructor runs.
///
/// # Examples
///
/// ```
/// use plurales::analysis::factory::{FilterParams, FilterRegistry};
/// use plurales::analysis::token::TokenStream;
/// use plurales::analysis::tokenizer::WhitespaceTokenizer;
///
/// let registry = FilterRegistry::default();
/// let upstream = Box::new(WhitespaceTokenizer::from_text("sociedades"));
/// let mut stream = registry
///     .build("SpanishPluralStem", upstream, FilterParams::new())
///     .unwrap();
/// assert_eq!(stream.next().map(|t| t.text.as_str()), Some("sociedad"));
/// ```
#[derive(Clone)]
pub struct FilterRegistry {
    entries: AHashMap<String, FilterEntry>,
}

impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl FilterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        FilterRegistry {
            entries: AHashMap::new(),
        }
    }

    /// Register a constructor under `name`, replacing any previous one.
    pub fn register<S: Into<String>>(
        &mut self,
        name: S,
        parameters: &'static [&'static str],
        constructor: FactoryConstructor,
    ) {
        self.entries.insert(
            name.into(),
            FilterEntry {
                parameters,
                constructor,
            },
        );
    }

    /// Check if a filter is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered filter names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Parameters accepted by the filter registered under `name`.
    pub fn parameters(&self, name: &str) -> Option<&'static [&'static str]> {
        self.entries.get(name).map(|entry| entry.parameters)
    }

    /// Look up `name` and build its factory from `params`.
    pub fn factory(&self, name: &str, params: FilterParams) -> Result<Box<dyn TokenFilterFactory>> {
        trace!("looking up token filter {name}");
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| PluralesError::unknown_filter(name))?;
        params.ensure_known(name, entry.parameters)?;
        let factory = (entry.constructor)(params)?;
        debug!("built token filter factory {name}");
        Ok(factory)
    }

    /// Look up `name`, validate `params` and wrap `upstream` with the filter.
    pub fn build<'a>(
        &self,
        name: &str,
        upstream: BoxTokenStream<'a>,
        params: FilterParams,
    ) -> Result<BoxTokenStream<'a>> {
        Ok(self.factory(name, params)?.create(upstream))
    }

    /// Wrap `upstream` with each configured filter, in order.
    ///
    /// Fails on the first filter that cannot be built; nothing is returned in
    /// that case.
    pub fn build_chain<'a>(
        &self,
        upstream: BoxTokenStream<'a>,
        filters: &[FilterConfig],
    ) -> Result<BoxTokenStream<'a>> {
        let mut stream = upstream;
        for filter in filters {
            stream = self.build(&filter.name, stream, filter.params.clone())?;
        }
        debug!("built token filter chain of {} filters", filters.len());
        Ok(stream)
    }
}

impl Default for FilterRegistry {
    /// Creates a registry with the filters of this crate:
    /// - `SpanishPluralStem`
    /// - `LowerCase`
    fn default() -> Self {
        let mut registry = FilterRegistry::new();
        registry.register(
            SpanishPluralStemFilterFactory::NAME,
            SpanishPluralStemFilterFactory::PARAMETERS,
            spanish_plural_stem,
        );
        registry.register(
            LowercaseFilterFactory::NAME,
            LowercaseFilterFactory::PARAMETERS,
            lower_case,
        );
        registry
    }
}

fn spanish_plural_stem(params: FilterParams) -> Result<Box<dyn TokenFilterFactory>> {
    Ok(Box::new(SpanishPluralStemFilterFactory::new(params)?))
}

fn lower_case(params: FilterParams) -> Result<Box<dyn TokenFilterFactory>> {
    Ok(Box::new(LowercaseFilterFactory::new(params)?))
}
