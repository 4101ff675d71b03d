//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first stage of the pipeline: they segment the raw input
//! into an initial, lazily produced sequence of tokens.
//!
//! A tokenizer is immutable configuration. Everything that changes while a
//! document is being segmented lives in a [`TokenizerState`] owned by the
//! stream doing the pulling, so one tokenizer can be shared across any number
//! of concurrent streams behind an `Arc`.
//!
//! # Available Tokenizers
//!
//! - [`word_break::WordBreakTokenizer`] - Unicode word boundaries (UAX #29)
//! - [`cjk::CjkBigramTokenizer`] - Overlapping bigrams over ideographic runs
//! - [`ngram::NgramTokenizer`] - Character n-grams
//!
//! # Examples
//!
//! ```
//! use falx::analysis::tokenizer::{tokenize, word_break::WordBreakTokenizer};
//!
//! let tokenizer = WordBreakTokenizer::new();
//! let tokens = tokenize(&tokenizer, "Hello, world!");
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::Token;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Tokenizer: Send + Sync {
    /// Produce the next token of `text`, starting at the cursor held in `state`.
    ///
    /// Returns `None` once the input is exhausted. Implementations must leave
    /// `state.offset` on a character boundary and must never yield a token
    /// whose offsets precede those of the previous one.
    fn next_token(&self, text: &str, state: &mut TokenizerState) -> Option<Token>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Per-stream scratch state of a tokenizer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenizerState {
    /// Byte offset of the next unread character.
    pub offset: usize,
    /// Position assigned to the next emitted token.
    pub position: usize,
    /// Set while the cursor sits inside an ideographic run whose last
    /// character was already covered by a bigram.
    pub run_open: bool,
    /// Current n-gram size at `offset`.
    pub gram_size: usize,
}

impl TokenizerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-arm the state for a new input.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Take the position for the next token.
    pub fn next_position(&mut self) -> usize {
        let position = self.position;
        self.position += 1;
        position
    }
}

/// Run `tokenizer` over `text` with a fresh state and collect every token.
pub fn tokenize(tokenizer: &dyn Tokenizer, text: &str) -> Vec<Token> {
    let mut state = TokenizerState::new();
    std::iter::from_fn(|| tokenizer.next_token(text, &mut state)).collect()
}

// Individual tokenizer modules
pub mod cjk;
pub mod ngram;
pub mod word_break;

// Re-export all tokenizers for convenient access
pub use cjk::CjkBigramTokenizer;
pub use ngram::NgramTokenizer;
pub use word_break::WordBreakTokenizer;
