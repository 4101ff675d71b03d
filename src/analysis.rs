//! Text analysis: tokenization, filtering and stemming.
//!
//! ```text
//! CharSource → Tokenizer → Filter 1 → ... → Filter N → TokenStream
//! ```
//!
//! - [`token`] - The unit datum flowing through the pipeline
//! - [`char_source`] - Raw text input
//! - [`tokenizer`] - Word-break, ideographic bigram and n-gram tokenizers
//! - [`token_filter`] - Lowercase, stop word and stemming filters
//! - [`term_set`] - Stop sets, exclusion sets and packaged defaults
//! - [`analyzer`] - Tokenizer + filter pipelines and language analyzers
//! - [`factory`] - Components by name with option validation
//! - [`config`] - JSON pipeline configuration and presets

pub mod analyzer;
pub mod char_source;
pub mod config;
pub mod factory;
pub mod term_set;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
