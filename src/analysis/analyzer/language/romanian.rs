//! Romanian analyzer.
//!
//! # Pipeline
//!
//! 1. WordBreakTokenizer
//! 2. LowercaseFilter
//! 3. StopFilter (packaged Romanian list unless replaced)
//! 4. StemFilter ([`RomanianStemmer`](crate::analysis::token_filter::stem::RomanianStemmer))
//!
//! # Examples
//!
//! ```
//! use falx::analysis::analyzer::Analyzer;
//! use falx::analysis::analyzer::language::romanian::RomanianAnalyzer;
//! use falx::analysis::term_set::ExclusionSet;
//!
//! let analyzer = RomanianAnalyzer::new().with_exclusions(ExclusionSet::new(["absenţa"]));
//! let terms: Vec<String> = analyzer
//!     .analyze("absenţa absenţi")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(terms, vec!["absenţa", "absenţ"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::language::{LanguageAnalyzer, StopWords};
use crate::analysis::analyzer::stream::TokenStream;
use crate::analysis::char_source::CharSource;
use crate::analysis::term_set::{ExclusionSet, Language, StopSet};
use crate::error::Result;

#[derive(Debug)]
pub struct RomanianAnalyzer {
    inner: LanguageAnalyzer,
}

impl RomanianAnalyzer {
    pub fn new() -> Self {
        RomanianAnalyzer {
            inner: LanguageAnalyzer::new(Language::Romanian),
        }
    }

    pub fn with_stop_words(self, stop_words: impl Into<StopWords>) -> Self {
        RomanianAnalyzer {
            inner: self.inner.with_stop_words(stop_words),
        }
    }

    pub fn with_stop_exclusions(self, exclusions: impl Into<Arc<ExclusionSet>>) -> Self {
        RomanianAnalyzer {
            inner: self.inner.with_stop_exclusions(exclusions),
        }
    }

    pub fn with_stem_exclusions(self, exclusions: impl Into<Arc<ExclusionSet>>) -> Self {
        RomanianAnalyzer {
            inner: self.inner.with_stem_exclusions(exclusions),
        }
    }

    /// Terms that are neither removed nor stemmed.
    pub fn with_exclusions(self, exclusions: impl Into<Arc<ExclusionSet>>) -> Self {
        RomanianAnalyzer {
            inner: self.inner.with_exclusions(exclusions),
        }
    }

    /// The packaged Romanian stop set. Needs no analyzer instance.
    pub fn default_stop_set() -> Arc<StopSet> {
        LanguageAnalyzer::default_stop_set(Language::Romanian)
    }

    pub fn inner(&self) -> &LanguageAnalyzer {
        &self.inner
    }
}

impl Default for RomanianAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for RomanianAnalyzer {
    fn create_stream(&self, input: &mut dyn CharSource) -> Result<TokenStream> {
        self.inner.create_stream(input)
    }

    fn name(&self) -> &str {
        "romanian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_romanian_analyzer() {
        let analyzer = RomanianAnalyzer::new();

        let tokens: Vec<Token> = analyzer.analyze("Îl văd absenţa").unwrap().collect();

        // "îl" is a stop word; the survivors keep their positions.
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].position, 1);
        assert_eq!(tokens[1].text, "absenţ");
        assert_eq!(tokens[1].position, 2);
        assert_eq!(tokens[1].start_offset, 9);
        assert_eq!(tokens[1].end_offset, 17);
    }

    #[test]
    fn test_romanian_analyzer_name() {
        assert_eq!(RomanianAnalyzer::new().name(), "romanian");
    }

    #[test]
    fn test_default_stop_set() {
        let stop_set = RomanianAnalyzer::default_stop_set();
        assert!(stop_set.contains("îl"));
        assert!(stop_set.contains("şi"));
    }
}
