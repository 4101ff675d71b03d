//! Token filter implementations for token transformation.
//!
//! Filters are the stages after the tokenizer. Each one sees a single token at
//! a time and either passes it on (possibly with rewritten text) or drops it.
//! Filters hold no per-stream state, so the same filter instance can serve any
//! number of streams at once.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stop::StopFilter`] - Removes stop words, honoring an exclusion set
//! - [`stem::StemFilter`] - Reduces words to their stem form
//!
//! # Examples
//!
//! ```
//! use falx::analysis::token::Token;
//! use falx::analysis::token_filter::Filter;
//! use falx::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let token = filter.apply(Token::new("WORLD", 0)).unwrap();
//! assert_eq!(token.text, "world");
//! ```
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Stemmer → Index
//! ```

use crate::analysis::token::Token;

/// Trait for filters that transform tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to one token.
    ///
    /// Returns `None` to drop the token. A filter that keeps a token may
    /// rewrite its text but must leave offsets and position untouched.
    fn apply(&self, token: Token) -> Option<Token>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod lowercase;
pub mod stem;
pub mod stop;

// Re-export all filters for convenient access
pub use lowercase::LowercaseFilter;
pub use stem::{IdentityStemmer, PorterStemmer, RomanianStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;
