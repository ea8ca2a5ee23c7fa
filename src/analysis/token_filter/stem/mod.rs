//! Stemming token filter and stemmer implementations.

use crate::analysis::token::{Token, TokenStream};

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Rewrite `term` to its stem, in place.
    fn stem_in_place(&self, term: &mut String);

    /// Stem a word, returning a new string.
    fn stem(&self, word: &str) -> String {
        let mut term = word.to_string();
        self.stem_in_place(&mut term);
        term
    }

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

// Stemmer implementations
pub mod spanish_plural;

// Re-export stemmers
pub use spanish_plural::SpanishPluralStemmer;

/// Filter that applies stemming to the tokens of the stream it wraps.
///
/// Each call to [`TokenStream::advance`] pulls exactly one token from
/// upstream and rewrites its text in place. Positions, offsets and the token
/// type are passed through untouched.
///
/// # Examples
///
/// ```
/// use plurales::analysis::token::TokenStream;
/// use plurales::analysis::token_filter::stem::StemFilter;
/// use plurales::analysis::tokenizer::WhitespaceTokenizer;
///
/// let mut stream = StemFilter::new(WhitespaceTokenizer::from_text("sociedades anónimas"));
/// assert_eq!(stream.next().map(|t| t.text.as_str()), Some("sociedad"));
/// assert_eq!(stream.next().map(|t| t.text.as_str()), Some("anónima"));
/// assert!(stream.next().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct StemFilter<T, S = SpanishPluralStemmer> {
    upstream: T,
    stemmer: S,
}

/// A [`StemFilter`] running the Spanish plural stemmer.
pub type SpanishPluralStemFilter<T> = StemFilter<T, SpanishPluralStemmer>;

impl<T: TokenStream> StemFilter<T> {
    /// Wrap `upstream` with the Spanish plural stemmer.
    pub fn new(upstream: T) -> Self {
        StemFilter {
            upstream,
            stemmer: SpanishPluralStemmer::new(),
        }
    }
}

impl<T: TokenStream, S: Stemmer> StemFilter<T, S> {
    /// Wrap `upstream` with a custom stemmer.
    pub fn with_stemmer(upstream: T, stemmer: S) -> Self {
        StemFilter { upstream, stemmer }
    }

    /// Get the stemmer used by this filter.
    pub fn stemmer(&self) -> &S {
        &self.stemmer
    }

    /// Unwrap the filter, returning the upstream stream.
    pub fn into_inner(self) -> T {
        self.upstream
    }
}

impl<T: TokenStream, S: Stemmer> TokenStream for StemFilter<T, S> {
    fn advance(&mut self) -> bool {
        if !self.upstream.advance() {
            return false;
        }
        self.stemmer.stem_in_place(&mut self.upstream.token_mut().text);
        true
    }

    fn token(&self) -> &Token {
        self.upstream.token()
    }

    fn token_mut(&mut self) -> &mut Token {
        self.upstream.token_mut()
    }

    fn reset(&mut self, text: &str) {
        self.upstream.reset(text);
    }
}
