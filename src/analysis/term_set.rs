//! Immutable term sets used by the filter stages.
//!
//! - [`StopSet`] - case-normalized terms a
//!   [`StopFilter`](crate::analysis::token_filter::StopFilter) removes
//! - [`ExclusionSet`] - terms that bypass one specific stage
//!
//! Default stop sets ship with the crate as packaged word lists and are parsed
//! once per process into read-only values, so they are freely shareable
//! between analyzers and threads.
//!
//! # Examples
//!
//! ```
//! use falx::analysis::term_set::{Language, StopSet};
//!
//! let stop_set = StopSet::default_for(Language::Romanian);
//! assert!(stop_set.contains("îl"));
//! assert!(!stop_set.contains("absenţa"));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{FalxError, Result};

const ROMANIAN_STOP_WORDS: &str = include_str!("../../resources/stopwords/romanian.txt");
const ENGLISH_STOP_WORDS: &str = include_str!("../../resources/stopwords/english.txt");
const CJK_STOP_WORDS: &str = include_str!("../../resources/stopwords/cjk.txt");

static ROMANIAN_STOP_SET: LazyLock<Arc<StopSet>> =
    LazyLock::new(|| Arc::new(StopSet::parse(ROMANIAN_STOP_WORDS)));

static ENGLISH_STOP_SET: LazyLock<Arc<StopSet>> =
    LazyLock::new(|| Arc::new(StopSet::parse(ENGLISH_STOP_WORDS)));

static CJK_STOP_SET: LazyLock<Arc<StopSet>> =
    LazyLock::new(|| Arc::new(StopSet::parse(CJK_STOP_WORDS)));

/// Map comma-below `ș`/`ț` onto the cedilla `ş`/`ţ` used by the packaged lists.
pub fn fold_comma_below(c: char) -> char {
    match c {
        'ș' => 'ş',
        'ț' => 'ţ',
        'Ș' => 'Ş',
        'Ț' => 'Ţ',
        other => other,
    }
}

fn fold_term(term: &str) -> Cow<'_, str> {
    if term.contains(['ș', 'ț', 'Ș', 'Ț']) {
        Cow::Owned(term.chars().map(fold_comma_below).collect())
    } else {
        Cow::Borrowed(term)
    }
}

fn normalize_term(term: &str) -> String {
    fold_term(&term.to_lowercase()).into_owned()
}

/// Languages with packaged analysis resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Romanian,
    English,
    Cjk,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Romanian, Language::English, Language::Cjk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Romanian => "romanian",
            Language::English => "english",
            Language::Cjk => "cjk",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = FalxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "romanian" | "ro" => Ok(Language::Romanian),
            "english" | "en" => Ok(Language::English),
            "cjk" | "zh" | "ja" | "ko" => Ok(Language::Cjk),
            other => Err(FalxError::configuration(format!("Unsupported language '{other}'"))),
        }
    }
}

/// A set of case-normalized stop words.
///
/// Words are lowercased on insertion. Lookups are case sensitive, so callers
/// feed lowercased terms (the analyzers place a lowercase filter before the
/// stop filter). Both spellings of the Romanian ş/ţ match, comma-below or
/// cedilla.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopSet {
    words: AHashSet<String>,
}

impl StopSet {
    /// Build a stop set from a list of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StopSet {
            words: words
                .into_iter()
                .map(|w| normalize_term(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Parse a word list: whitespace separated terms, text after `#` or `|`
    /// on a line is a comment.
    pub fn parse(list: &str) -> Self {
        Self::new(
            list.lines()
                .map(|line| line.split(['#', '|']).next().unwrap_or(""))
                .flat_map(str::split_whitespace),
        )
    }

    /// Load a word list from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let list = fs::read_to_string(path).map_err(|e| {
            FalxError::resource(format!(
                "Failed to load stop words from {}: {e}",
                path.display()
            ))
        })?;
        Ok(Self::parse(&list))
    }

    /// The packaged default stop set for `language`.
    pub fn default_for(language: Language) -> Arc<StopSet> {
        match language {
            Language::Romanian => Arc::clone(&ROMANIAN_STOP_SET),
            Language::English => Arc::clone(&ENGLISH_STOP_SET),
            Language::Cjk => Arc::clone(&CJK_STOP_SET),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(fold_term(word).as_ref())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Terms that must bypass one specific filter stage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    terms: AHashSet<String>,
}

impl ExclusionSet {
    /// Build an exclusion set. Terms are lowercased on insertion and, like
    /// [`StopSet`], match either spelling of ş/ţ.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ExclusionSet {
            terms: terms
                .into_iter()
                .map(|t| normalize_term(t.as_ref()))
                .collect(),
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(fold_term(term).as_ref())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
