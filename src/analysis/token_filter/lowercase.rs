//! Lowercase filter implementation.
//!
//! The Spanish plural stemmer only recognizes lower-case endings, so this
//! filter normally runs right before it.
//!
//! # Examples
//!
//! ```
//! use plurales::analysis::token::TokenStream;
//! use plurales::analysis::token_filter::lowercase::LowercaseFilter;
//! use plurales::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let mut stream = LowercaseFilter::new(WhitespaceTokenizer::from_text("Hola MUNDO"));
//! assert_eq!(stream.next().map(|t| t.text.as_str()), Some("hola"));
//! assert_eq!(stream.next().map(|t| t.text.as_str()), Some("mundo"));
//! ```

use std::mem;

use crate::analysis::token::{Token, TokenStream};

/// A filter that converts tokens to lowercase.
///
/// ASCII terms are lowercased in place. Other terms are lowercased char by
/// char into a scratch buffer that is then swapped with the token text, so
/// no allocation happens once the buffers have grown.
#[derive(Clone, Debug)]
pub struct LowercaseFilter<T> {
    upstream: T,
    buffer: String,
}

impl<T: TokenStream> LowercaseFilter<T> {
    /// Wrap `upstream` with a lowercase filter.
    pub fn new(upstream: T) -> Self {
        LowercaseFilter {
            upstream,
            buffer: String::with_capacity(32),
        }
    }
}

// Writes a lowercased version of text into output.
fn to_lowercase_unicode(text: &str, output: &mut String) {
    output.clear();
    for c in text.chars() {
        // Final sigma is not special-cased; harmless for matching.
        output.extend(c.to_lowercase());
    }
}

impl<T: TokenStream> TokenStream for LowercaseFilter<T> {
    fn advance(&mut self) -> bool {
        if !self.upstream.advance() {
            return false;
        }
        let token = self.upstream.token_mut();
        if token.text.is_ascii() {
            token.text.make_ascii_lowercase();
        } else {
            to_lowercase_unicode(&token.text, &mut self.buffer);
            mem::swap(&mut token.text, &mut self.buffer);
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::WhitespaceTokenizer;

    fn lowercase_helper(text: &str) -> Vec<String> {
        let mut stream = LowercaseFilter::new(WhitespaceTokenizer::from_text(text));
        let mut texts = Vec::new();
        stream.process(&mut |token| texts.push(token.text.clone()));
        texts
    }

    #[test]
    fn test_lowercase_filter() {
        assert_eq!(lowercase_helper("Hola MUNDO Cruel"), vec!["hola", "mundo", "cruel"]);
    }

    #[test]
    fn test_lowercase_non_ascii() {
        assert_eq!(lowercase_helper("ÁRBOLES Ñandúes"), vec!["árboles", "ñandúes"]);
        assert_eq!(lowercase_helper("Русский"), vec!["русский"]);
    }

    #[test]
    fn test_lowercase_keeps_offsets() {
        let mut stream = LowercaseFilter::new(WhitespaceTokenizer::from_text("  ÁRBOL"));
        assert!(stream.advance());
        assert_eq!(stream.token().text, "árbol");
        assert_eq!(stream.token().start_offset, 2);
        assert_eq!(stream.token().end_offset, 8);
        assert!(!stream.advance());
    }
}
