//! # Falx
//!
//! A text analysis pipeline for search indexing: raw text goes through a
//! tokenizer and a chain of filters and comes out as a stream of index terms.
//!
//! ## Features
//!
//! - Unicode word breaking and ideographic (CJK) bigram tokenization
//! - Stop word removal with per-stage exclusion sets
//! - Romanian and English (Porter) stemming
//! - Reusable, thread-safe analyzers with pooled per-stream buffers
//! - Name-based component registry and JSON pipeline configuration
//!
//! ## Example
//!
//! ```
//! use falx::analysis::analyzer::Analyzer;
//! use falx::analysis::analyzer::language::cjk::CjkAnalyzer;
//!
//! let analyzer = CjkAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("我是中国人").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[3].text, "国人");
//! assert_eq!((tokens[3].start_offset, tokens[3].end_offset), (9, 15));
//! ```

pub mod analysis;
pub mod cli;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
