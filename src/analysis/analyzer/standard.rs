//! Standard analyzer: Unicode word breaking and lowercasing.
//!
//! # Pipeline
//!
//! 1. WordBreakTokenizer (Unicode word boundaries)
//! 2. LowercaseFilter
//!
//! # Examples
//!
//! ```
//! use falx::analysis::analyzer::Analyzer;
//! use falx::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("Hello the World").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].text, "world");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::analyzer::stream::TokenStream;
use crate::analysis::char_source::CharSource;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::word_break::WordBreakTokenizer;
use crate::error::Result;

/// Language-neutral analyzer without stop words or stemming.
#[derive(Clone, Debug)]
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer.
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WordBreakTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("standard");

        StandardAnalyzer { inner: analyzer }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn create_stream(&self, input: &mut dyn CharSource) -> Result<TokenStream> {
        self.inner.create_stream(input)
    }

    fn name(&self) -> &str {
        "standard"
    }
}
