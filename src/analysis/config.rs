//! JSON analyzer configuration and named presets.
//!
//! ```json
//! {
//!   "name": "romanian_custom",
//!   "tokenizer": { "type": "word_break", "max_token_length": 64 },
//!   "filters": [
//!     { "type": "lowercase" },
//!     { "type": "stop", "language": "romanian", "exclusions": ["şi"] },
//!     { "type": "stem", "language": "romanian" }
//!   ]
//! }
//! ```
//!
//! Option values may be strings, numbers, booleans, or arrays of strings
//! (joined with commas); they are handed to the
//! [`ComponentFactory`](crate::analysis::factory::ComponentFactory), which
//! rejects keys the component does not recognize.
//!
//! # Examples
//!
//! ```
//! use falx::analysis::analyzer::Analyzer;
//! use falx::analysis::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::from_json_str(
//!     r#"{ "tokenizer": { "type": "cjk" }, "filters": [{ "type": "lowercase" }] }"#,
//! )
//! .unwrap();
//! let analyzer = config.build().unwrap();
//!
//! let terms: Vec<String> = analyzer.analyze("我是中国人").unwrap().map(|t| t.text).collect();
//! assert_eq!(terms.len(), 4);
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::language::LanguageAnalyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::analysis::factory::{ComponentFactory, Options};
use crate::analysis::term_set::Language;
use crate::error::{FalxError, Result};

/// Names accepted by [`analyzer_by_name`].
pub const PRESETS: &[&str] = &["standard", "romanian", "english", "cjk"];

/// One tokenizer or filter in a configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Registry name of the component.
    #[serde(rename = "type")]
    pub kind: String,

    /// Every other key is a component option.
    #[serde(flatten)]
    pub options: HashMap<String, Value>,
}

impl ComponentConfig {
    pub fn new<S: Into<String>>(kind: S) -> Self {
        ComponentConfig {
            kind: kind.into(),
            options: HashMap::new(),
        }
    }

    pub fn with_option<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Flatten the JSON option values into factory options.
    pub fn factory_options(&self) -> Result<Options> {
        self.options
            .iter()
            .map(|(key, value)| Ok((key.clone(), option_value(&self.kind, key, value)?)))
            .collect()
    }
}

fn option_value(kind: &str, key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.as_str()),
                _ => Err(invalid_option(kind, key)),
            })
            .collect::<Result<Vec<_>>>()
            .map(|items| items.join(",")),
        Value::Null | Value::Object(_) => Err(invalid_option(kind, key)),
    }
}

fn invalid_option(kind: &str, key: &str) -> FalxError {
    FalxError::configuration(format!(
        "Option '{key}' of '{kind}' must be a string, number, boolean or list of strings"
    ))
}

/// A complete pipeline description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub tokenizer: ComponentConfig,
    #[serde(default)]
    pub filters: Vec<ComponentConfig>,
}

impl AnalyzerConfig {
    pub fn new(tokenizer: ComponentConfig) -> Self {
        AnalyzerConfig {
            name: None,
            tokenizer,
            filters: Vec::new(),
        }
    }

    pub fn with_filter(mut self, filter: ComponentConfig) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| FalxError::configuration(format!("Invalid analyzer configuration: {e}")))
    }

    /// Read and parse a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            FalxError::resource(format!(
                "Failed to read analyzer configuration {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the described pipeline. Any invalid component fails the whole build.
    pub fn build(&self) -> Result<PipelineAnalyzer> {
        let tokenizer = ComponentFactory::create_tokenizer(
            &self.tokenizer.kind,
            &self.tokenizer.factory_options()?,
        )?;

        let mut analyzer = PipelineAnalyzer::new(tokenizer);
        for filter in &self.filters {
            analyzer = analyzer.add_filter(ComponentFactory::create_filter(
                &filter.kind,
                &filter.factory_options()?,
            )?);
        }
        if let Some(name) = &self.name {
            analyzer = analyzer.with_name(name.as_str());
        }

        debug!("built {analyzer:?} from configuration");
        Ok(analyzer)
    }
}

/// Look up a preset analyzer by name. Language codes such as `ro` also work.
pub fn analyzer_by_name(name: &str) -> Result<Arc<dyn Analyzer>> {
    if name.eq_ignore_ascii_case("standard") {
        return Ok(Arc::new(StandardAnalyzer::new()));
    }

    let language: Language = name.parse().map_err(|_| {
        FalxError::configuration(format!(
            "Unknown analyzer '{name}', expected one of: {}",
            PRESETS.join(", ")
        ))
    })?;
    Ok(Arc::new(LanguageAnalyzer::new(language)))
}
