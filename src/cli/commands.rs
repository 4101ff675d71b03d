//! Command implementations for the Falx CLI.

use std::fs::File;
use std::io;
use std::sync::Arc;

use log::info;

use crate::analysis::analyzer::{Analyzer, LanguageAnalyzer, StopWords};
use crate::analysis::char_source::{CharSource, ReaderSource};
use crate::analysis::config::{AnalyzerConfig, analyzer_by_name};
use crate::analysis::factory::ComponentFactory;
use crate::analysis::term_set::{ExclusionSet, Language};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{FalxError, Result};

/// Execute a CLI command.
pub fn execute_command(args: FalxArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
        Command::Components => list_components(&args),
    }
}

/// Analyze text and print the tokens.
fn analyze(args: &AnalyzeArgs, cli_args: &FalxArgs) -> Result<()> {
    let analyzer = build_analyzer(args)?;
    info!("analyzing with '{}'", analyzer.name());

    let stream = match (&args.text, &args.file) {
        (Some(text), _) => {
            let mut source = text.as_str();
            analyzer.create_stream(&mut source)?
        }
        (None, Some(path)) => {
            let file = File::open(path).map_err(|e| {
                FalxError::resource(format!("Failed to open {}: {e}", path.display()))
            })?;
            analyzer.create_stream(&mut ReaderSource::new(file))?
        }
        (None, None) => {
            let mut source = ReaderSource::new(io::stdin().lock());
            analyzer.create_stream(&mut source as &mut dyn CharSource)?
        }
    };

    let result = AnalysisResult {
        analyzer: analyzer.name().to_string(),
        tokens: stream.collect(),
    };
    let message = format!("{} tokens from '{}':", result.tokens.len(), result.analyzer);
    output_result(&message, &result, cli_args)
}

/// Build the analyzer selected by `--config` or `--analyzer`.
pub fn build_analyzer(args: &AnalyzeArgs) -> Result<Arc<dyn Analyzer>> {
    let customized =
        !args.exclusions.is_empty() || args.stop_words.is_some() || args.no_stop_words;

    if let Some(path) = &args.config {
        if customized {
            return Err(FalxError::configuration(
                "--exclude and stop word options apply to preset analyzers only",
            ));
        }
        return Ok(Arc::new(AnalyzerConfig::from_file(path)?.build()?));
    }

    if !customized {
        return analyzer_by_name(&args.analyzer);
    }

    let language: Language = args.analyzer.parse().map_err(|_| {
        FalxError::configuration(format!(
            "Analyzer '{}' has no stop words or stemmer to customize",
            args.analyzer
        ))
    })?;

    let mut analyzer = LanguageAnalyzer::new(language);
    if let Some(path) = &args.stop_words {
        analyzer = analyzer.with_stop_words(StopWords::File(path.clone()));
    } else if args.no_stop_words {
        analyzer = analyzer.with_stop_words(StopWords::None);
    }
    if !args.exclusions.is_empty() {
        analyzer = analyzer.with_exclusions(ExclusionSet::new(&args.exclusions));
    }
    Ok(Arc::new(analyzer))
}

/// List the registered tokenizers and filters.
fn list_components(cli_args: &FalxArgs) -> Result<()> {
    let listing = ComponentListing {
        components: ComponentFactory::components(),
    };
    output_result("Registered components:", &listing, cli_args)
}
