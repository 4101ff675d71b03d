//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! typically don't contribute to search relevance. Terms listed in the
//! filter's exclusion set always survive, even when they are stop words.
//!
//! # Examples
//!
//! ```
//! use falx::analysis::term_set::Language;
//! use falx::analysis::token::Token;
//! use falx::analysis::token_filter::Filter;
//! use falx::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::for_language(Language::Romanian);
//! assert!(filter.apply(Token::new("îl", 0)).is_none());
//! assert!(filter.apply(Token::new("absenţa", 1)).is_some());
//! ```

use std::sync::Arc;

use crate::analysis::term_set::{ExclusionSet, Language, StopSet};
use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;

/// A filter that removes stop words from the token stream.
///
/// A filter built with [`StopFilter::disabled`] has no stop set and passes
/// every token through; it never falls back to some other language's list.
///
/// # Examples
///
/// ```
/// use falx::analysis::term_set::{ExclusionSet, StopSet};
/// use falx::analysis::token::Token;
/// use falx::analysis::token_filter::Filter;
/// use falx::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(["the", "and"])
///     .with_exclusions(ExclusionSet::new(["and"]));
///
/// assert!(filter.apply(Token::new("the", 0)).is_none());
/// assert!(filter.apply(Token::new("and", 1)).is_some());
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove; `None` disables removal
    stop_words: Option<Arc<StopSet>>,
    /// Terms that are never removed
    exclusions: Option<Arc<ExclusionSet>>,
    /// Whether to lowercase the token text before the lookup
    ignore_case: bool,
}

impl StopFilter {
    /// Create a stop filter over the given stop set.
    pub fn new(stop_words: Arc<StopSet>) -> Self {
        StopFilter {
            stop_words: Some(stop_words),
            exclusions: None,
            ignore_case: false,
        }
    }

    /// Create a stop filter with the packaged stop set of `language`.
    pub fn for_language(language: Language) -> Self {
        Self::new(StopSet::default_for(language))
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Arc::new(StopSet::new(words)))
    }

    /// Create a filter that removes nothing.
    pub fn disabled() -> Self {
        StopFilter {
            stop_words: None,
            exclusions: None,
            ignore_case: false,
        }
    }

    /// Set the terms that must never be removed.
    pub fn with_exclusions(mut self, exclusions: impl Into<Arc<ExclusionSet>>) -> Self {
        let exclusions = exclusions.into();
        self.exclusions = (!exclusions.is_empty()).then_some(exclusions);
        self
    }

    /// Lowercase token text before looking it up.
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Whether this filter removes anything at all.
    pub fn is_enabled(&self) -> bool {
        self.stop_words.is_some()
    }

    /// Check if a word is a stop word that this filter would drop.
    pub fn is_stop_word(&self, word: &str) -> bool {
        let Some(stop_words) = &self.stop_words else {
            return false;
        };

        let lowered;
        let word = if self.ignore_case {
            lowered = word.to_lowercase();
            lowered.as_str()
        } else {
            word
        };

        stop_words.contains(word) && !self.is_excluded(word)
    }

    fn is_excluded(&self, word: &str) -> bool {
        self.exclusions
            .as_ref()
            .is_some_and(|exclusions| exclusions.contains(word))
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.as_ref().map_or(0, |s| s.len())
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Filter for StopFilter {
    fn apply(&self, token: Token) -> Option<Token> {
        if self.is_stop_word(&token.text) {
            None
        } else {
            Some(token)
        }
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
