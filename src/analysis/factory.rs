//! Name-based construction of tokenizers and filters.
//!
//! Each registered component declares the option keys it understands. A
//! configuration carrying any other key is rejected with a configuration error
//! that lists every offending key; nothing is built in that case.
//!
//! | name | kind | options |
//! |------|------|---------|
//! | `word_break` (`standard`) | tokenizer | `max_token_length` |
//! | `cjk` | tokenizer | none |
//! | `ngram` | tokenizer | `min_gram`, `max_gram` |
//! | `lowercase` | filter | none |
//! | `stop` | filter | `language`, `words`, `ignore_case`, `exclusions` |
//! | `stem` | filter | `language`, `exclusions` |
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//!
//! use falx::analysis::factory::ComponentFactory;
//!
//! let mut options = HashMap::new();
//! options.insert("bogusArg".to_string(), "bogusValue".to_string());
//!
//! let err = ComponentFactory::create_tokenizer("cjk", &options).err().expect("expected an error");
//! assert!(err.is_configuration());
//! assert!(err.to_string().contains("bogusArg"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::analysis::term_set::{ExclusionSet, Language};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::cjk::CjkBigramTokenizer;
use crate::analysis::tokenizer::ngram::NgramTokenizer;
use crate::analysis::tokenizer::word_break::{DEFAULT_MAX_TOKEN_LENGTH, WordBreakTokenizer};
use crate::error::{FalxError, Result};

/// String-keyed component options.
pub type Options = HashMap<String, String>;

/// Kind of a registered component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Tokenizer,
    Filter,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Tokenizer => f.pad("tokenizer"),
            ComponentKind::Filter => f.pad("filter"),
        }
    }
}

/// A component built by [`ComponentFactory::create`].
#[derive(Clone)]
pub enum Component {
    Tokenizer(Arc<dyn Tokenizer>),
    Filter(Arc<dyn Filter>),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Tokenizer(_) => ComponentKind::Tokenizer,
            Component::Filter(_) => ComponentKind::Filter,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Component::Tokenizer(tokenizer) => tokenizer.name(),
            Component::Filter(filter) => filter.name(),
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component({} '{}')", self.kind(), self.name())
    }
}

/// Static description of a registered component.
#[derive(Clone, Debug, Serialize)]
pub struct ComponentInfo {
    pub kind: ComponentKind,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub options: &'static [&'static str],
}

struct Entry<T: ?Sized> {
    name: &'static str,
    aliases: &'static [&'static str],
    options: &'static [&'static str],
    build: fn(&Options) -> Result<Arc<T>>,
}

impl<T: ?Sized> Entry<T> {
    fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }
}

static TOKENIZERS: &[Entry<dyn Tokenizer>] = &[
    Entry {
        name: "word_break",
        aliases: &["standard"],
        options: &["max_token_length"],
        build: build_word_break,
    },
    Entry {
        name: "cjk",
        aliases: &[],
        options: &[],
        build: build_cjk,
    },
    Entry {
        name: "ngram",
        aliases: &[],
        options: &["min_gram", "max_gram"],
        build: build_ngram,
    },
];

static FILTERS: &[Entry<dyn Filter>] = &[
    Entry {
        name: "lowercase",
        aliases: &[],
        options: &[],
        build: build_lowercase,
    },
    Entry {
        name: "stop",
        aliases: &[],
        options: &["language", "words", "ignore_case", "exclusions"],
        build: build_stop,
    },
    Entry {
        name: "stem",
        aliases: &[],
        options: &["language", "exclusions"],
        build: build_stem,
    },
];

/// Registry of the named tokenizers and filters.
pub struct ComponentFactory;

impl ComponentFactory {
    /// Build the tokenizer registered as `name`.
    pub fn create_tokenizer(name: &str, options: &Options) -> Result<Arc<dyn Tokenizer>> {
        let entry = TOKENIZERS
            .iter()
            .find(|entry| entry.matches(name))
            .ok_or_else(|| FalxError::configuration(format!("Unknown tokenizer '{name}'")))?;
        build(ComponentKind::Tokenizer, entry, options)
    }

    /// Build the filter registered as `name`.
    pub fn create_filter(name: &str, options: &Options) -> Result<Arc<dyn Filter>> {
        let entry = FILTERS
            .iter()
            .find(|entry| entry.matches(name))
            .ok_or_else(|| FalxError::configuration(format!("Unknown filter '{name}'")))?;
        build(ComponentKind::Filter, entry, options)
    }

    /// Build whatever is registered as `name`, tokenizers first.
    pub fn create(name: &str, options: &Options) -> Result<Component> {
        if let Some(entry) = TOKENIZERS.iter().find(|entry| entry.matches(name)) {
            return build(ComponentKind::Tokenizer, entry, options).map(Component::Tokenizer);
        }
        if let Some(entry) = FILTERS.iter().find(|entry| entry.matches(name)) {
            return build(ComponentKind::Filter, entry, options).map(Component::Filter);
        }
        Err(FalxError::configuration(format!("Unknown component '{name}'")))
    }

    /// Every registered component, tokenizers first.
    pub fn components() -> Vec<ComponentInfo> {
        let tokenizers = TOKENIZERS.iter().map(|entry| ComponentInfo {
            kind: ComponentKind::Tokenizer,
            name: entry.name,
            aliases: entry.aliases,
            options: entry.options,
        });
        let filters = FILTERS.iter().map(|entry| ComponentInfo {
            kind: ComponentKind::Filter,
            name: entry.name,
            aliases: entry.aliases,
            options: entry.options,
        });
        tokenizers.chain(filters).collect()
    }
}

fn build<T: ?Sized>(kind: ComponentKind, entry: &Entry<T>, options: &Options) -> Result<Arc<T>> {
    check_options(kind, entry.name, entry.options, options)?;
    let component = (entry.build)(options)?;
    debug!("built {kind} '{}' from {} option(s)", entry.name, options.len());
    Ok(component)
}

fn check_options(
    kind: ComponentKind,
    name: &str,
    recognized: &[&str],
    options: &Options,
) -> Result<()> {
    let mut unknown: Vec<&str> = options
        .keys()
        .map(String::as_str)
        .filter(|key| !recognized.contains(key))
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }

    unknown.sort_unstable();
    Err(FalxError::configuration(format!(
        "Unknown parameters for {kind} '{name}': {}",
        unknown.join(", ")
    )))
}

fn parse_option<T: FromStr>(options: &Options, key: &str) -> Result<Option<T>> {
    options
        .get(key)
        .map(|value| {
            value.trim().parse().map_err(|_| {
                FalxError::configuration(format!("Invalid value '{value}' for option '{key}'"))
            })
        })
        .transpose()
}

fn parse_list(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

fn parse_exclusions(options: &Options) -> Option<ExclusionSet> {
    options
        .get("exclusions")
        .map(|value| ExclusionSet::new(parse_list(value)))
}

fn build_word_break(options: &Options) -> Result<Arc<dyn Tokenizer>> {
    let max_token_length =
        parse_option(options, "max_token_length")?.unwrap_or(DEFAULT_MAX_TOKEN_LENGTH);
    Ok(Arc::new(WordBreakTokenizer::with_max_token_length(
        max_token_length,
    )?))
}

fn build_cjk(_options: &Options) -> Result<Arc<dyn Tokenizer>> {
    Ok(Arc::new(CjkBigramTokenizer::new()))
}

fn build_ngram(options: &Options) -> Result<Arc<dyn Tokenizer>> {
    let min_gram = parse_option(options, "min_gram")?.unwrap_or(1);
    let max_gram = parse_option(options, "max_gram")?.unwrap_or(2);
    Ok(Arc::new(NgramTokenizer::new(min_gram, max_gram)?))
}

fn build_lowercase(_options: &Options) -> Result<Arc<dyn Filter>> {
    Ok(Arc::new(LowercaseFilter::new()))
}

fn build_stop(options: &Options) -> Result<Arc<dyn Filter>> {
    let language: Option<Language> = parse_language(options)?;

    let mut filter = match (options.get("words"), language) {
        (Some(words), _) => StopFilter::from_words(parse_list(words)),
        (None, Some(language)) => StopFilter::for_language(language),
        (None, None) => StopFilter::disabled(),
    };
    if let Some(ignore_case) = parse_option(options, "ignore_case")? {
        filter = filter.ignore_case(ignore_case);
    }
    if let Some(exclusions) = parse_exclusions(options) {
        filter = filter.with_exclusions(exclusions);
    }
    Ok(Arc::new(filter))
}

fn build_stem(options: &Options) -> Result<Arc<dyn Filter>> {
    let language = parse_language(options)?.ok_or_else(|| {
        FalxError::configuration("Missing required option 'language' for filter 'stem'")
    })?;

    let mut filter = StemFilter::for_language(language);
    if let Some(exclusions) = parse_exclusions(options) {
        filter = filter.with_exclusions(exclusions);
    }
    Ok(Arc::new(filter))
}

fn parse_language(options: &Options) -> Result<Option<Language>> {
    options
        .get("language")
        .map(|value| value.trim().parse())
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::tokenizer::tokenize;

    fn options(pairs: &[(&str, &str)]) -> Options {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_create_tokenizers() {
        let tokenizer = ComponentFactory::create_tokenizer("cjk", &Options::new()).unwrap();
        assert_eq!(tokenizer.name(), "cjk");

        let tokenizer = ComponentFactory::create_tokenizer("standard", &Options::new()).unwrap();
        assert_eq!(tokenizer.name(), "word_break");

        let tokenizer = ComponentFactory::create_tokenizer(
            "ngram",
            &options(&[("min_gram", "2"), ("max_gram", "3")]),
        )
        .unwrap();
        let texts: Vec<String> = tokenize(tokenizer.as_ref(), "abcd")
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["ab", "abc", "bc", "bcd", "cd"]);
    }

    #[test]
    fn test_unknown_options_are_named() {
        let err = ComponentFactory::create_tokenizer(
            "cjk",
            &options(&[("bogusArg", "bogusValue"), ("anotherOne", "x")]),
        )
        .err().expect("expected an error");

        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "Configuration error: Unknown parameters for tokenizer 'cjk': anotherOne, bogusArg"
        );
    }

    #[test]
    fn test_unknown_names() {
        let err = ComponentFactory::create_tokenizer("lowercase", &Options::new()).err().expect("expected an error");
        assert!(err.is_configuration());

        let err = ComponentFactory::create("nope", &Options::new()).unwrap_err();
        assert!(err.to_string().contains("'nope'"));
    }

    #[test]
    fn test_invalid_values() {
        let err = ComponentFactory::create_tokenizer(
            "word_break",
            &options(&[("max_token_length", "ten")]),
        )
        .err().expect("expected an error");
        assert!(err.is_configuration());
        assert!(err.to_string().contains("max_token_length"));

        let err = ComponentFactory::create_tokenizer("ngram", &options(&[("min_gram", "0")]))
            .err().expect("expected an error");
        assert!(err.is_configuration());

        let err = ComponentFactory::create_filter("stem", &options(&[("language", "klingon")]))
            .err().expect("expected an error");
        assert!(err.is_configuration());

        let err = ComponentFactory::create_filter("stem", &Options::new()).err().expect("expected an error");
        assert!(err.to_string().contains("language"));
    }

    #[test]
    fn test_create_filters() {
        let stop = ComponentFactory::create_filter(
            "stop",
            &options(&[("words", "foo, bar"), ("exclusions", "bar")]),
        )
        .unwrap();
        assert!(stop.apply(Token::new("foo", 0)).is_none());
        assert!(stop.apply(Token::new("bar", 1)).is_some());

        let stop = ComponentFactory::create_filter("stop", &Options::new()).unwrap();
        assert!(stop.apply(Token::new("the", 0)).is_some());

        let stem =
            ComponentFactory::create_filter("stem", &options(&[("language", "ro")])).unwrap();
        assert_eq!(stem.apply(Token::new("absenţi", 0)).unwrap().text, "absenţ");
    }

    #[test]
    fn test_create_any_component() {
        let component = ComponentFactory::create("lowercase", &Options::new()).unwrap();
        assert_eq!(component.kind(), ComponentKind::Filter);
        assert_eq!(component.name(), "lowercase");

        let component = ComponentFactory::create("ngram", &Options::new()).unwrap();
        assert_eq!(component.kind(), ComponentKind::Tokenizer);
    }

    #[test]
    fn test_component_listing() {
        let components = ComponentFactory::components();
        assert_eq!(components.len(), 6);
        assert_eq!(components[0].name, "word_break");
        assert!(components.iter().any(|c| c.name == "stop" && c.options.contains(&"words")));
    }
}
