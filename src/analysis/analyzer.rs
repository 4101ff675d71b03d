//! Analyzers: a tokenizer composed with an ordered chain of filters.
//!
//! # Available Analyzers
//!
//! - [`pipeline::PipelineAnalyzer`] - Custom tokenizer + filter chains
//! - [`standard::StandardAnalyzer`] - Word breaking and lowercasing only
//! - [`language::romanian::RomanianAnalyzer`] - Romanian stop words and stemming
//! - [`language::english::EnglishAnalyzer`] - English stop words and Porter stemming
//! - [`language::cjk::CjkAnalyzer`] - Ideographic bigrams
//!
//! Every analyzer hands out independent [`stream::TokenStream`]s, so one
//! analyzer can serve many threads at once while each stream stays with a
//! single caller.

#[allow(clippy::module_inception)]
pub mod analyzer;
pub mod language;
pub mod pipeline;
pub mod standard;
pub mod stream;

pub use analyzer::Analyzer;
pub use language::cjk::CjkAnalyzer;
pub use language::english::EnglishAnalyzer;
pub use language::romanian::RomanianAnalyzer;
pub use language::{LanguageAnalyzer, StopWords};
pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;
pub use stream::TokenStream;
