//! Lowercase filter implementation.
//!
//! Converts token text to lowercase, which is essential for case-insensitive
//! search. ASCII text takes a fast in-place path; everything else goes through
//! Unicode-aware lowercasing.
//!
//! # Examples
//!
//! ```
//! use falx::analysis::token::Token;
//! use falx::analysis::token_filter::Filter;
//! use falx::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! assert_eq!(filter.apply(Token::new("ÎL", 0)).unwrap().text, "îl");
//! ```

use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;

/// A filter that converts tokens to lowercase.
///
/// Positions and offsets are preserved.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn apply(&self, mut token: Token) -> Option<Token> {
        if token.text.is_ascii() {
            token.text.make_ascii_lowercase();
        } else if token.text.chars().any(char::is_uppercase) {
            token.text = token.text.to_lowercase();
        }
        Some(token)
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
