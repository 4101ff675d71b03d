//! English analyzer: word breaking, lowercasing, English stop words and the
//! Porter stemmer.

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::language::{LanguageAnalyzer, StopWords};
use crate::analysis::analyzer::stream::TokenStream;
use crate::analysis::char_source::CharSource;
use crate::analysis::term_set::{ExclusionSet, Language, StopSet};
use crate::error::Result;

#[derive(Debug)]
pub struct EnglishAnalyzer {
    inner: LanguageAnalyzer,
}

impl EnglishAnalyzer {
    pub fn new() -> Self {
        EnglishAnalyzer {
            inner: LanguageAnalyzer::new(Language::English),
        }
    }

    pub fn with_stop_words(self, stop_words: impl Into<StopWords>) -> Self {
        EnglishAnalyzer {
            inner: self.inner.with_stop_words(stop_words),
        }
    }

    pub fn with_stop_exclusions(self, exclusions: impl Into<Arc<ExclusionSet>>) -> Self {
        EnglishAnalyzer {
            inner: self.inner.with_stop_exclusions(exclusions),
        }
    }

    pub fn with_stem_exclusions(self, exclusions: impl Into<Arc<ExclusionSet>>) -> Self {
        EnglishAnalyzer {
            inner: self.inner.with_stem_exclusions(exclusions),
        }
    }

    pub fn with_exclusions(self, exclusions: impl Into<Arc<ExclusionSet>>) -> Self {
        EnglishAnalyzer {
            inner: self.inner.with_exclusions(exclusions),
        }
    }

    pub fn default_stop_set() -> Arc<StopSet> {
        LanguageAnalyzer::default_stop_set(Language::English)
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for EnglishAnalyzer {
    fn create_stream(&self, input: &mut dyn CharSource) -> Result<TokenStream> {
        self.inner.create_stream(input)
    }

    fn name(&self) -> &str {
        "english"
    }
}
