//! Language-specific analyzers.
//!
//! Every language analyzer is a [`LanguageAnalyzer`] underneath: a fixed
//! pipeline per [`Language`] plus the stop word and exclusion settings chosen
//! by the caller.
//!
//! # Construction policy
//!
//! Constructing an analyzer never fails and never touches the file system.
//! Stop words given as a file are read on the first call to
//! [`Analyzer::create_stream`]; a missing or unreadable file turns into a
//! resource error on that call, and on every later call until the file can be
//! read. Once resolved, the pipeline is cached for the analyzer's lifetime.
//!
//! # Available Languages
//!
//! - [`romanian`] - Word breaking, Romanian stop words and stemming
//! - [`english`] - Word breaking, English stop words and Porter stemming
//! - [`cjk`] - Ideographic bigrams and the CJK stop list
//!
//! # Examples
//!
//! ```
//! use falx::analysis::analyzer::Analyzer;
//! use falx::analysis::analyzer::language::english::EnglishAnalyzer;
//!
//! let analyzer = EnglishAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("Hello the world").unwrap().collect();
//!
//! // "the" is filtered as a stop word
//! assert_eq!(tokens.len(), 2);
//! ```

pub mod cjk;
pub mod english;
pub mod romanian;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, warn};
use parking_lot::Mutex;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::analyzer::stream::TokenStream;
use crate::analysis::char_source::CharSource;
use crate::analysis::term_set::{ExclusionSet, Language, StopSet};
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::cjk::CjkBigramTokenizer;
use crate::analysis::tokenizer::word_break::WordBreakTokenizer;
use crate::error::Result;

/// Where a language analyzer takes its stop words from.
#[derive(Clone, Debug, Default)]
pub enum StopWords {
    /// The packaged list for the analyzer's language.
    #[default]
    Default,
    /// No stop word removal.
    None,
    /// An explicit set.
    Set(Arc<StopSet>),
    /// A word list file, read on first use.
    File(PathBuf),
}

impl StopWords {
    fn resolve(&self, language: Language) -> Result<Option<Arc<StopSet>>> {
        match self {
            StopWords::Default => Ok(Some(StopSet::default_for(language))),
            StopWords::None => Ok(None),
            StopWords::Set(set) => Ok(Some(Arc::clone(set))),
            StopWords::File(path) => {
                debug!("loading {language} stop words from {}", path.display());
                StopSet::from_file(path).map(|set| Some(Arc::new(set)))
            }
        }
    }
}

impl From<StopSet> for StopWords {
    fn from(set: StopSet) -> Self {
        StopWords::Set(Arc::new(set))
    }
}

impl From<Arc<StopSet>> for StopWords {
    fn from(set: Arc<StopSet>) -> Self {
        StopWords::Set(set)
    }
}

/// Analyzer with the fixed pipeline of one [`Language`].
pub struct LanguageAnalyzer {
    language: Language,
    stop_words: StopWords,
    stop_exclusions: Option<Arc<ExclusionSet>>,
    stem_exclusions: Option<Arc<ExclusionSet>>,
    resolved: Mutex<Option<PipelineAnalyzer>>,
}

impl LanguageAnalyzer {
    /// Create an analyzer with the packaged stop words and no exclusions.
    pub fn new(language: Language) -> Self {
        LanguageAnalyzer {
            language,
            stop_words: StopWords::Default,
            stop_exclusions: None,
            stem_exclusions: None,
            resolved: Mutex::new(None),
        }
    }

    /// Replace the stop words.
    pub fn with_stop_words(mut self, stop_words: impl Into<StopWords>) -> Self {
        self.stop_words = stop_words.into();
        self.invalidate()
    }

    /// Terms the stop filter must never remove.
    pub fn with_stop_exclusions(mut self, exclusions: impl Into<Arc<ExclusionSet>>) -> Self {
        self.stop_exclusions = Some(exclusions.into());
        self.invalidate()
    }

    /// Terms the stemmer must never rewrite.
    pub fn with_stem_exclusions(mut self, exclusions: impl Into<Arc<ExclusionSet>>) -> Self {
        self.stem_exclusions = Some(exclusions.into());
        self.invalidate()
    }

    /// Use the same exclusion set for both the stop filter and the stemmer.
    pub fn with_exclusions(self, exclusions: impl Into<Arc<ExclusionSet>>) -> Self {
        let exclusions = exclusions.into();
        self.with_stop_exclusions(Arc::clone(&exclusions))
            .with_stem_exclusions(exclusions)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// The packaged stop set of `language`.
    pub fn default_stop_set(language: Language) -> Arc<StopSet> {
        StopSet::default_for(language)
    }

    fn invalidate(self) -> Self {
        *self.resolved.lock() = None;
        self
    }

    /// The resolved pipeline, building it on first use.
    fn pipeline(&self) -> Result<PipelineAnalyzer> {
        let mut resolved = self.resolved.lock();
        if let Some(pipeline) = resolved.as_ref() {
            return Ok(pipeline.clone());
        }

        let stop_set = self.stop_words.resolve(self.language).inspect_err(|e| {
            warn!("{} analyzer could not load its stop words: {e}", self.language);
        })?;
        let pipeline = self.build(stop_set);
        debug!("resolved {pipeline:?}");

        *resolved = Some(pipeline.clone());
        Ok(pipeline)
    }

    fn build(&self, stop_set: Option<Arc<StopSet>>) -> PipelineAnalyzer {
        let tokenizer: Arc<dyn Tokenizer> = match self.language {
            Language::Cjk => Arc::new(CjkBigramTokenizer::new()),
            Language::Romanian | Language::English => Arc::new(WordBreakTokenizer::new()),
        };

        let mut stop_filter = stop_set.map_or_else(StopFilter::disabled, StopFilter::new);
        if let Some(exclusions) = &self.stop_exclusions {
            stop_filter = stop_filter.with_exclusions(Arc::clone(exclusions));
        }

        let mut pipeline = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(stop_filter))
            .with_name(self.language.as_str());

        if self.language != Language::Cjk {
            let mut stem_filter = StemFilter::for_language(self.language);
            if let Some(exclusions) = &self.stem_exclusions {
                stem_filter = stem_filter.with_exclusions(Arc::clone(exclusions));
            }
            pipeline = pipeline.add_filter(Arc::new(stem_filter));
        }

        pipeline
    }
}

impl Analyzer for LanguageAnalyzer {
    fn create_stream(&self, input: &mut dyn CharSource) -> Result<TokenStream> {
        self.pipeline()?.create_stream(input)
    }

    fn name(&self) -> &str {
        self.language.as_str()
    }
}

impl fmt::Debug for LanguageAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageAnalyzer")
            .field("language", &self.language)
            .field("stop_words", &self.stop_words)
            .field("stop_exclusions", &self.stop_exclusions.as_ref().map(|e| e.len()))
            .field("stem_exclusions", &self.stem_exclusions.as_ref().map(|e| e.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn terms(analyzer: &dyn Analyzer, text: &str) -> Vec<String> {
        analyzer.analyze(text).unwrap().map(|t| t.text).collect()
    }

    #[test]
    fn test_construction_never_fails() {
        for language in Language::ALL {
            let analyzer = LanguageAnalyzer::new(language);
            assert_eq!(analyzer.name(), language.as_str());
            assert!(analyzer.analyze("").unwrap().next().is_none());

            let analyzer = LanguageAnalyzer::new(language)
                .with_stop_words(StopWords::File("/nonexistent".into()));
            assert_eq!(analyzer.language(), language);
        }
    }

    #[test]
    fn test_missing_stop_file_fails_on_use() {
        let analyzer = LanguageAnalyzer::new(Language::Romanian)
            .with_stop_words(StopWords::File("/nonexistent/stop.txt".into()));

        for _ in 0..2 {
            let err = analyzer.analyze("text").unwrap_err();
            assert!(err.is_resource());
            assert!(err.to_string().contains("/nonexistent/stop.txt"));
        }
    }

    #[test]
    fn test_stop_file_is_read_once() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "alfa").unwrap();

        let analyzer = LanguageAnalyzer::new(Language::English)
            .with_stop_words(StopWords::File(file.path().to_path_buf()));
        assert_eq!(terms(&analyzer, "alfa beta"), vec!["beta"]);

        // The resolved pipeline no longer depends on the file.
        let path = file.path().to_path_buf();
        drop(file);
        assert!(!path.exists());
        assert_eq!(terms(&analyzer, "alfa gamma"), vec!["gamma"]);
    }

    #[test]
    fn test_no_stop_words() {
        let analyzer = LanguageAnalyzer::new(Language::English).with_stop_words(StopWords::None);
        assert_eq!(terms(&analyzer, "the cat"), vec!["the", "cat"]);
    }

    #[test]
    fn test_independent_exclusions() {
        let stop_only = LanguageAnalyzer::new(Language::Romanian)
            .with_stop_exclusions(ExclusionSet::new(["îl", "absenţa"]));
        assert_eq!(terms(&stop_only, "îl absenţa"), vec!["îl", "absenţ"]);

        let stem_only = LanguageAnalyzer::new(Language::Romanian)
            .with_stem_exclusions(ExclusionSet::new(["îl", "absenţa"]));
        assert_eq!(terms(&stem_only, "îl absenţa"), vec!["absenţa"]);

        let both = LanguageAnalyzer::new(Language::Romanian)
            .with_exclusions(ExclusionSet::new(["îl", "absenţa"]));
        assert_eq!(terms(&both, "îl absenţa"), vec!["îl", "absenţa"]);
    }

    #[test]
    fn test_default_stop_set_accessor() {
        let set = LanguageAnalyzer::default_stop_set(Language::Romanian);
        assert!(set.contains("îl"));
        assert!(Arc::ptr_eq(&set, &StopSet::default_for(Language::Romanian)));
    }
}
