//! Core analyzer trait definition.
//!
//! ```text
//! CharSource → Tokenizer → Filter 1 → ... → Filter N → TokenStream
//! ```
//!
//! # Examples
//!
//! ```
//! use falx::analysis::analyzer::Analyzer;
//! use falx::analysis::analyzer::language::romanian::RomanianAnalyzer;
//!
//! let analyzer = RomanianAnalyzer::new();
//! let terms: Vec<String> = analyzer
//!     .analyze("absenţa şi absenţi")
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//!
//! assert_eq!(terms, vec!["absenţ", "absenţ"]);
//! ```

use crate::analysis::analyzer::stream::TokenStream;
use crate::analysis::char_source::CharSource;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Build a token stream bound to `input`.
    ///
    /// Reading the input happens here, so an unreadable source fails with a
    /// resource error before any token is produced.
    fn create_stream(&self, input: &mut dyn CharSource) -> Result<TokenStream>;

    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut source = text;
        self.create_stream(&mut source)
    }

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}
