//! Word-break tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word boundary
//! rules (UAX #29). It handles international text and drops non-word segments
//! like punctuation and whitespace.
//!
//! # Examples
//!
//! ```
//! use falx::analysis::tokenizer::tokenize;
//! use falx::analysis::tokenizer::word_break::WordBreakTokenizer;
//!
//! let tokenizer = WordBreakTokenizer::new();
//! let tokens = tokenize(&tokenizer, "café, résumé!");
//!
//! assert_eq!(tokens[0].text, "café");
//! assert_eq!(tokens[1].text, "résumé");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenType};
use crate::analysis::tokenizer::{Tokenizer, TokenizerState};
use crate::error::{FalxError, Result};

/// Default upper bound on the number of characters in one token.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 255;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Every UAX #29 segment that contains at least one alphanumeric character
/// becomes one token; all other segments are separators and are consumed
/// silently. Words longer than `max_token_length` characters are emitted as
/// consecutive chunks of at most that length.
#[derive(Clone, Debug)]
pub struct WordBreakTokenizer {
    max_token_length: usize,
}

impl WordBreakTokenizer {
    /// Create a new word-break tokenizer.
    pub fn new() -> Self {
        WordBreakTokenizer {
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }

    /// Create a tokenizer with a custom maximum token length.
    pub fn with_max_token_length(max_token_length: usize) -> Result<Self> {
        if max_token_length == 0 {
            return Err(FalxError::configuration(
                "max_token_length must be at least 1",
            ));
        }
        Ok(WordBreakTokenizer { max_token_length })
    }

    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }
}

impl Default for WordBreakTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordBreakTokenizer {
    fn next_token(&self, text: &str, state: &mut TokenizerState) -> Option<Token> {
        next_word(text, text.len(), state, self.max_token_length)
    }

    fn name(&self) -> &'static str {
        "word_break"
    }
}

/// Emit the next word found in `text[state.offset..end]`.
///
/// On `None` the cursor has been moved to `end`.
pub(crate) fn next_word(
    text: &str,
    end: usize,
    state: &mut TokenizerState,
    max_token_length: usize,
) -> Option<Token> {
    let base = state.offset;
    let window = text.get(base..end)?;

    for (index, segment) in window.split_word_bound_indices() {
        if !segment.chars().any(char::is_alphanumeric) {
            continue;
        }

        let start = base + index;
        let length = match segment.char_indices().nth(max_token_length) {
            Some((cut, _)) => cut,
            None => segment.len(),
        };
        let word = &segment[..length];

        state.offset = start + length;
        let position = state.next_position();
        return Some(
            Token::with_offsets(word, position, start, start + length)
                .with_token_type(TokenType::classify(word)),
        );
    }

    state.offset = end;
    None
}
