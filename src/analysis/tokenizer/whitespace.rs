//! Whitespace tokenizer implementation.

use crate::analysis::token::{Token, TokenStream, TokenType};

/// A tokenizer that splits text on whitespace.
///
/// The tokenizer keeps its own copy of the input so that the token stream it
/// produces has no borrowed lifetime. [`TokenStream::reset`] refills that
/// buffer in place.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer {
    text: String,
    cursor: usize,
    next_position: usize,
    token: Token,
}

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer with no input.
    pub fn new() -> Self {
        WhitespaceTokenizer::default()
    }

    /// Create a whitespace tokenizer positioned at the start of `text`.
    pub fn from_text(text: &str) -> Self {
        let mut tokenizer = WhitespaceTokenizer::new();
        tokenizer.reset(text);
        tokenizer
    }

    /// Get the name of this tokenizer.
    pub fn name(&self) -> &'static str {
        "whitespace"
    }

    /// Detect token type based on the content of the word.
    fn detect_token_type(word: &str) -> TokenType {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.chars().all(|c| c.is_ascii_digit()) {
            return TokenType::Num;
        }

        if word.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
            return TokenType::Alphanum;
        }

        if word.chars().all(|c| c.is_ascii_punctuation()) {
            return TokenType::Punctuation;
        }

        TokenType::Other
    }
}

impl TokenStream for WhitespaceTokenizer {
    fn advance(&mut self) -> bool {
        // Skip whitespace to find the next word
        let start = match self.text[self.cursor..].find(|c: char| !c.is_whitespace()) {
            Some(skipped) => self.cursor + skipped,
            None => {
                self.cursor = self.text.len();
                return false;
            }
        };
        let end = self.text[start..]
            .find(char::is_whitespace)
            .map_or(self.text.len(), |len| start + len);

        let word = &self.text[start..end];
        self.token.set_text(word);
        self.token.token_type = Self::detect_token_type(word);
        self.token.start_offset = start;
        self.token.end_offset = end;
        self.token.position = self.next_position;
        self.token.position_increment = 1;
        self.token.position_length = 1;

        self.next_position += 1;
        self.cursor = end;
        true
    }

    fn token(&self) -> &Token {
        &self.token
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.token
    }

    fn reset(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.cursor = 0;
        self.next_position = 0;
    }
}
