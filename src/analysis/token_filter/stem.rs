//! Stemming token filter and stemmer implementations.

use std::fmt;
use std::sync::Arc;

use crate::analysis::term_set::{ExclusionSet, Language};
use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;

/// Trait for stemming algorithms.
///
/// A stemmer must be deterministic: the same word always yields the same stem,
/// whatever came before it in the stream.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

// Stemmer implementations
pub mod identity;
pub mod porter;
pub mod romanian;

// Re-export stemmers
pub use identity::IdentityStemmer;
pub use porter::PorterStemmer;
pub use romanian::RomanianStemmer;

/// Filter that applies stemming to tokens.
///
/// Only `text` changes; offsets and position are preserved. Terms in the
/// exclusion set pass through untouched.
#[derive(Clone)]
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Arc<dyn Stemmer>,
    /// Terms that are never stemmed.
    exclusions: Option<Arc<ExclusionSet>>,
}

impl fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .field("exclusions", &self.exclusions.as_ref().map_or(0, |e| e.len()))
            .finish()
    }
}

impl StemFilter {
    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter {
            stemmer,
            exclusions: None,
        }
    }

    /// Create a stem filter with the stemmer for `language`.
    pub fn for_language(language: Language) -> Self {
        let stemmer: Arc<dyn Stemmer> = match language {
            Language::Romanian => Arc::new(RomanianStemmer::new()),
            Language::English => Arc::new(PorterStemmer::new()),
            Language::Cjk => Arc::new(IdentityStemmer::new()),
        };
        Self::with_stemmer(stemmer)
    }

    /// Set the terms that must never be stemmed.
    pub fn with_exclusions(mut self, exclusions: impl Into<Arc<ExclusionSet>>) -> Self {
        let exclusions = exclusions.into();
        self.exclusions = (!exclusions.is_empty()).then_some(exclusions);
        self
    }

    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }

    fn is_excluded(&self, term: &str) -> bool {
        self.exclusions
            .as_ref()
            .is_some_and(|exclusions| exclusions.contains(term))
    }
}

impl Filter for StemFilter {
    fn apply(&self, mut token: Token) -> Option<Token> {
        if !self.is_excluded(&token.text) {
            token.text = self.stemmer.stem(&token.text);
        }
        Some(token)
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::for_language(Language::English);

        let token = filter.apply(Token::with_offsets("running", 4, 20, 27)).unwrap();
        assert_eq!(token.text, "run");
        assert_eq!(token.position, 4);
        assert_eq!(token.start_offset, 20);
        assert_eq!(token.end_offset, 27);

        assert_eq!(filter.apply(Token::new("flies", 1)).unwrap().text, "fli");
    }

    #[test]
    fn test_romanian_stem_filter() {
        let filter = StemFilter::for_language(Language::Romanian);
        assert_eq!(filter.apply(Token::new("absenţa", 0)).unwrap().text, "absenţ");
        assert_eq!(filter.apply(Token::new("absenţi", 1)).unwrap().text, "absenţ");
    }

    #[test]
    fn test_exclusions_are_not_stemmed() {
        let filter = StemFilter::for_language(Language::Romanian)
            .with_exclusions(ExclusionSet::new(["absenţa"]));

        assert_eq!(filter.apply(Token::new("absenţa", 0)).unwrap().text, "absenţa");
        assert_eq!(filter.apply(Token::new("absenţi", 1)).unwrap().text, "absenţ");
    }

    #[test]
    fn test_filter_name() {
        let filter = StemFilter::with_stemmer(Arc::new(IdentityStemmer::new()));
        assert_eq!(filter.name(), "stem");
        assert_eq!(filter.stemmer().name(), "identity");
    }
}
