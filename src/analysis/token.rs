//! Token types for text analysis.
//!
//! This module defines [`Token`], the unit datum that flows from a tokenizer
//! through the filter chain to the consumer, and [`TokenType`], the coarse
//! classification a tokenizer attaches to it.
//!
//! Offsets are UTF-8 byte offsets into the original input and always fall on
//! character boundaries, so `&input[start_offset..end_offset]` is the exact
//! character span a token was produced from.
//!
//! # Examples
//!
//! ```
//! use falx::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// # Fields
///
/// - `text` - The current term; filters may rewrite it in place
/// - `position` - Ordinal assigned by the tokenizer (0-based)
/// - `start_offset` / `end_offset` - Byte offsets in the original text
/// - `token_type` - Classification assigned by the tokenizer
///
/// Filters never renumber `position`: when a token is dropped, the survivors
/// keep their original positions and the gap stays visible to the consumer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the tokenizer output (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Token type classification
    pub token_type: TokenType,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Alphabetic or mixed alphanumeric text
    #[default]
    Alphanum,
    /// Numeric values
    Num,
    /// Ideographic n-grams (Han, Kana, Hangul)
    Ideographic,
    /// Anything else
    Other,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            token_type: TokenType::Alphanum,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        debug_assert!(start_offset <= end_offset);
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            token_type: TokenType::Alphanum,
        }
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl TokenType {
    /// Classify a word produced by word-break segmentation.
    pub fn classify(word: &str) -> TokenType {
        if word.is_empty() {
            TokenType::Other
        } else if word.chars().all(char::is_numeric) {
            TokenType::Num
        } else if word.chars().any(char::is_alphanumeric) {
            TokenType::Alphanum
        } else {
            TokenType::Other
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert_eq!(token.token_type, TokenType::Alphanum);
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("world", 1, 6, 11).with_token_type(TokenType::Other);
        assert_eq!(token.text, "world");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
        assert_eq!(token.token_type, TokenType::Other);
    }

    #[test]
    fn test_classify() {
        assert_eq!(TokenType::classify("2024"), TokenType::Num);
        assert_eq!(TokenType::classify("absenţa"), TokenType::Alphanum);
        assert_eq!(TokenType::classify("r2d2"), TokenType::Alphanum);
        assert_eq!(TokenType::classify("--"), TokenType::Other);
        assert_eq!(TokenType::classify(""), TokenType::Other);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_token_serialization() {
        let token = Token::with_offsets("中国", 2, 6, 12).with_token_type(TokenType::Ideographic);
        let json = serde_json::to_string(&token).unwrap();
        assert!(json.contains("\"token_type\":\"ideographic\""));
    }
}
