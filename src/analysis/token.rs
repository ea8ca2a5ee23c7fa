//! Token types and the pull-based token stream contract.
//!
//! This module defines the unit that flows through the analysis pipeline and
//! the [`TokenStream`] trait every tokenizer and token filter implements.
//!
//! # Core Types
//!
//! - [`Token`] - A single token with its term text and pass-through attributes
//! - [`TokenType`] - Classification of token content assigned by the tokenizer
//! - [`TokenStream`] - Pull-based producer of tokens (`advance` / `token` / `reset`)
//! - [`BoxTokenStream`] - Type-erased stream, used to chain filters by name
//!
//! # Ownership of the term
//!
//! A stream exposes exactly one current token. Filters rewrite its `text`
//! in place and leave every other attribute alone. A consumer may read the
//! token between two calls to [`TokenStream::advance`]; the borrow checker
//! prevents holding on to it across the next call.
//!
//! # Examples
//!
//! ```
//! use plurales::analysis::token::{Token, TokenStream};
//! use plurales::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let mut stream = WhitespaceTokenizer::from_text("hola mundo");
//! let mut texts = Vec::new();
//! stream.process(&mut |token: &Token| texts.push(token.text.clone()));
//! assert_eq!(texts, vec!["hola", "mundo"]);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// `text` is the only attribute token filters are allowed to change.
/// Positions, offsets and the token type are set by the tokenizer and passed
/// through untouched.
///
/// # Examples
///
/// ```
/// use plurales::analysis::token::Token;
///
/// let mut token = Token::with_offsets("sociedades", 0, 0, 10);
/// token.set_text("sociedad");
/// assert_eq!(token.text, "sociedad");
/// assert_eq!(token.end_offset, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The term text of the token.
    pub text: String,

    /// The position of the token in the token stream (0-based).
    pub position: usize,

    /// The byte offset where this token starts in the original text.
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text.
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    pub position_increment: usize,

    /// How many positions this token spans (default: 1).
    pub position_length: usize,

    /// Token type classification.
    pub token_type: TokenType,
}

/// Token type classification for different kinds of tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Alphanumeric text
    Alphanum,
    /// Numeric values
    Num,
    /// Punctuation marks
    Punctuation,
    /// Other/unknown token types
    #[default]
    Other,
}

impl Default for Token {
    fn default() -> Self {
        Token {
            text: String::with_capacity(32),
            position: 0,
            start_offset: 0,
            end_offset: 0,
            position_increment: 1,
            position_length: 1,
            token_type: TokenType::Other,
        }
    }
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            ..Token::default()
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            ..Token::default()
        }
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Replace the term text, reusing the existing buffer.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A pull-based stream of tokens.
///
/// Tokenizers produce tokens from text; token filters wrap another stream
/// and rewrite the current token as it passes. A filter built on top of a
/// stream takes ownership of it, so a whole chain is one value.
pub trait TokenStream {
    /// Advance to the next token.
    ///
    /// Returns false if there are no other tokens.
    fn advance(&mut self) -> bool;

    /// Returns a reference to the current token.
    fn token(&self) -> &Token;

    /// Returns a mutable reference to the current token.
    fn token_mut(&mut self) -> &mut Token;

    /// Rewind the stream onto a new input text.
    ///
    /// Filters forward the call to the stream they wrap. Internal buffers are
    /// kept, so a chain can be reused across documents.
    fn reset(&mut self, text: &str);

    /// Helper to iterate over tokens. It simply combines a call to
    /// `.advance()` and `.token()`.
    fn next(&mut self) -> Option<&Token> {
        if self.advance() {
            Some(self.token())
        } else {
            None
        }
    }

    /// Helper function to consume the entire stream and push the tokens to a
    /// sink function.
    fn process(&mut self, sink: &mut dyn FnMut(&Token)) {
        while self.advance() {
            sink(self.token());
        }
    }
}

/// A boxed, type-erased token stream.
pub type BoxTokenStream<'a> = Box<dyn TokenStream + 'a>;

impl<T: TokenStream + ?Sized> TokenStream for Box<T> {
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn token(&self) -> &Token {
        (**self).token()
    }

    fn token_mut(&mut self) -> &mut Token {
        (**self).token_mut()
    }

    fn reset(&mut self, text: &str) {
        (**self).reset(text)
    }
}
