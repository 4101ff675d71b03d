//! Pipeline analyzer that combines a tokenizer and filters.
//!
//! This is the building block for every other analyzer. Filters run in the
//! order they were added.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use falx::analysis::analyzer::Analyzer;
//! use falx::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use falx::analysis::token_filter::lowercase::LowercaseFilter;
//! use falx::analysis::token_filter::stop::StopFilter;
//! use falx::analysis::tokenizer::word_break::WordBreakTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WordBreakTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(["the", "and"])))
//!     .with_name("my_custom_analyzer");
//!
//! let tokens: Vec<_> = analyzer.analyze("Hello THE world AND test").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[2].text, "test");
//! ```

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::stream::{BufferPool, TokenStream};
use crate::analysis::char_source::CharSource;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Number of idle input buffers an analyzer keeps for reuse.
pub const DEFAULT_POOL_SIZE: usize = 8;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
///
/// Clones share the tokenizer, the filters and the buffer pool.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Arc<[Arc<dyn Filter>]>,
    name: String,
    pool: Arc<BufferPool>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::<Arc<dyn Filter>>::new().into(),
            pool: Arc::new(BufferPool::new(DEFAULT_POOL_SIZE)),
        }
    }

    /// Add a filter to the end of the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        let mut filters = self.filters.to_vec();
        filters.push(filter);
        self.filters = filters.into();
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Keep at most `size` idle buffers for reuse.
    pub fn with_pool_size(mut self, size: usize) -> Self {
        self.pool = Arc::new(BufferPool::new(size));
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn create_stream(&self, input: &mut dyn CharSource) -> Result<TokenStream> {
        let mut stream = TokenStream::pooled(
            Arc::clone(&self.tokenizer),
            Arc::clone(&self.filters),
            Arc::clone(&self.pool),
        );
        stream.reset(input)?;

        debug!(
            "analyzer '{}' opened a stream over {} bytes",
            self.name,
            stream.input().len()
        );
        Ok(stream)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
