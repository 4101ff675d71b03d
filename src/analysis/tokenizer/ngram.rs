//! N-gram tokenizer implementation.

use crate::analysis::token::{Token, TokenType};
use crate::analysis::tokenizer::{Tokenizer, TokenizerState};
use crate::error::{FalxError, Result};

/// A tokenizer that generates character n-grams.
///
/// At every start position it emits one gram per size in
/// `min_gram..=max_gram`, shortest first, skipping sizes that would run past
/// the end of the input. Unlike [`CjkBigramTokenizer`](super::CjkBigramTokenizer)
/// it applies to every script and keeps whitespace inside grams.
///
/// # Examples
///
/// ```
/// use falx::analysis::tokenizer::tokenize;
/// use falx::analysis::tokenizer::ngram::NgramTokenizer;
///
/// // Bigram (n=2)
/// let tokenizer = NgramTokenizer::new(2, 2).unwrap();
/// let grams: Vec<_> = tokenize(&tokenizer, "hello").into_iter().map(|t| t.text).collect();
/// assert_eq!(grams, vec!["he", "el", "ll", "lo"]);
///
/// // Variable length (2-3)
/// let tokenizer = NgramTokenizer::new(2, 3).unwrap();
/// let grams: Vec<_> = tokenize(&tokenizer, "abc").into_iter().map(|t| t.text).collect();
/// assert_eq!(grams, vec!["ab", "abc", "bc"]);
/// ```
#[derive(Clone, Debug)]
pub struct NgramTokenizer {
    /// Minimum n-gram size
    min_gram: usize,
    /// Maximum n-gram size
    max_gram: usize,
}

impl NgramTokenizer {
    /// Create a new n-gram tokenizer.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `min_gram` is 0 or `max_gram` is less
    /// than `min_gram`.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        if min_gram == 0 {
            return Err(FalxError::configuration("min_gram must be at least 1"));
        }
        if max_gram < min_gram {
            return Err(FalxError::configuration(format!(
                "max_gram ({max_gram}) must be >= min_gram ({min_gram})"
            )));
        }
        Ok(Self { min_gram, max_gram })
    }

    /// Create a bigram tokenizer (n=2).
    pub fn bigram() -> Self {
        Self {
            min_gram: 2,
            max_gram: 2,
        }
    }

    pub fn min_gram(&self) -> usize {
        self.min_gram
    }

    pub fn max_gram(&self) -> usize {
        self.max_gram
    }
}

impl Tokenizer for NgramTokenizer {
    fn next_token(&self, text: &str, state: &mut TokenizerState) -> Option<Token> {
        loop {
            let rest = text.get(state.offset..)?;
            let first = rest.chars().next()?;
            let size = state.gram_size.max(self.min_gram);

            let gram_end = if size <= self.max_gram {
                rest.char_indices()
                    .nth(size - 1)
                    .map(|(index, c)| index + c.len_utf8())
            } else {
                None
            };

            match gram_end {
                Some(length) => {
                    let start = state.offset;
                    state.gram_size = size + 1;
                    let position = state.next_position();
                    return Some(
                        Token::with_offsets(&rest[..length], position, start, start + length)
                            .with_token_type(TokenType::Other),
                    );
                }
                None => {
                    // Move to the next start position.
                    state.offset += first.len_utf8();
                    state.gram_size = self.min_gram;
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::tokenize;

    #[test]
    fn test_ngram_creation() {
        assert!(NgramTokenizer::new(2, 3).is_ok());
        assert!(NgramTokenizer::new(0, 2).unwrap_err().is_configuration());
        assert!(NgramTokenizer::new(3, 2).unwrap_err().is_configuration());
    }

    #[test]
    fn test_bigram() {
        let tokens = tokenize(&NgramTokenizer::bigram(), "hello");

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].text, "he");
        assert_eq!(tokens[1].text, "el");
        assert_eq!(tokens[2].text, "ll");
        assert_eq!(tokens[3].text, "lo");
    }

    #[test]
    fn test_variable_ngram() {
        let tokenizer = NgramTokenizer::new(2, 3).unwrap();
        let tokens = tokenize(&tokenizer, "abc");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "ab"); // 2-gram from position 0
        assert_eq!(tokens[1].text, "abc"); // 3-gram from position 0
        assert_eq!(tokens[2].text, "bc"); // 2-gram from position 1
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_unicode_offsets() {
        let tokens = tokenize(&NgramTokenizer::bigram(), "日本語");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "日本");
        assert_eq!(tokens[1].text, "本語");

        // "日", "本" and "語" are 3 bytes each in UTF-8
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 6);
        assert_eq!(tokens[1].start_offset, 3);
        assert_eq!(tokens[1].end_offset, 9);
    }

    #[test]
    fn test_short_text() {
        let tokenizer = NgramTokenizer::new(3, 5).unwrap();
        // Text is too short for any n-grams
        assert!(tokenize(&tokenizer, "ab").is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(NgramTokenizer::bigram().name(), "ngram");
    }
}
