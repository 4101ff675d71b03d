//! CJK analyzer.
//!
//! Ideographic runs become overlapping bigrams; embedded Latin words are
//! word-broken, lowercased and checked against the CJK stop list. There is no
//! stemming stage.
//!
//! # Examples
//!
//! ```
//! use falx::analysis::analyzer::Analyzer;
//! use falx::analysis::analyzer::language::cjk::CjkAnalyzer;
//!
//! let analyzer = CjkAnalyzer::new();
//! let terms: Vec<String> = analyzer.analyze("我是中国人").unwrap().map(|t| t.text).collect();
//!
//! assert_eq!(terms, vec!["我是", "是中", "中国", "国人"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::language::{LanguageAnalyzer, StopWords};
use crate::analysis::analyzer::stream::TokenStream;
use crate::analysis::char_source::CharSource;
use crate::analysis::term_set::{ExclusionSet, Language, StopSet};
use crate::error::Result;

#[derive(Debug)]
pub struct CjkAnalyzer {
    inner: LanguageAnalyzer,
}

impl CjkAnalyzer {
    pub fn new() -> Self {
        CjkAnalyzer {
            inner: LanguageAnalyzer::new(Language::Cjk),
        }
    }

    pub fn with_stop_words(self, stop_words: impl Into<StopWords>) -> Self {
        CjkAnalyzer {
            inner: self.inner.with_stop_words(stop_words),
        }
    }

    /// Terms the stop filter must never remove.
    pub fn with_exclusions(self, exclusions: impl Into<Arc<ExclusionSet>>) -> Self {
        CjkAnalyzer {
            inner: self.inner.with_stop_exclusions(exclusions),
        }
    }

    pub fn default_stop_set() -> Arc<StopSet> {
        LanguageAnalyzer::default_stop_set(Language::Cjk)
    }
}

impl Default for CjkAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for CjkAnalyzer {
    fn create_stream(&self, input: &mut dyn CharSource) -> Result<TokenStream> {
        self.inner.create_stream(input)
    }

    fn name(&self) -> &str {
        "cjk"
    }
}
