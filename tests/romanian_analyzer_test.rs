//! Integration tests for the Romanian analyzer

use falx::analysis::analyzer::language::cjk::CjkAnalyzer;
use falx::analysis::analyzer::language::english::EnglishAnalyzer;
use falx::analysis::analyzer::language::romanian::RomanianAnalyzer;
use falx::analysis::analyzer::{Analyzer, StopWords};
use falx::analysis::term_set::{ExclusionSet, StopSet};
use falx::error::Result;

fn terms(analyzer: &dyn Analyzer, text: &str) -> Result<Vec<String>> {
    Ok(analyzer.analyze(text)?.map(|token| token.text).collect())
}

#[test]
fn test_construction_without_stop_words() -> Result<()> {
    let analyzers: Vec<Box<dyn Analyzer>> = vec![
        Box::new(RomanianAnalyzer::new().with_stop_words(StopWords::None)),
        Box::new(EnglishAnalyzer::new().with_stop_words(StopWords::None)),
        Box::new(CjkAnalyzer::new().with_stop_words(StopWords::None)),
        Box::new(RomanianAnalyzer::new()),
        Box::new(EnglishAnalyzer::new()),
        Box::new(CjkAnalyzer::new()),
    ];

    for analyzer in &analyzers {
        // Construction alone must not fail; analyzing empty input must not either.
        assert!(terms(analyzer.as_ref(), "")?.is_empty());
    }
    Ok(())
}

#[test]
fn test_exclusion_set_terms_are_kept() -> Result<()> {
    let exclusions = ExclusionSet::new(["absenţa", "îl"]);
    let analyzer = RomanianAnalyzer::new().with_exclusions(exclusions);

    assert_eq!(terms(&analyzer, "absenţa")?, vec!["absenţa"]);
    assert_eq!(terms(&analyzer, "îl")?, vec!["îl"]);
    assert_eq!(terms(&analyzer, "absenţi")?, vec!["absenţ"]);
    Ok(())
}

#[test]
fn test_inflections_stem_together() -> Result<()> {
    let analyzer = RomanianAnalyzer::new();

    assert_eq!(terms(&analyzer, "absenţa")?, vec!["absenţ"]);
    assert_eq!(terms(&analyzer, "absenţi")?, vec!["absenţ"]);
    // Comma-below spelling folds onto the same stem.
    assert_eq!(terms(&analyzer, "absența")?, vec!["absenţ"]);
    Ok(())
}

#[test]
fn test_stop_word_alone_yields_nothing() -> Result<()> {
    let analyzer = RomanianAnalyzer::new();

    assert!(terms(&analyzer, "îl")?.is_empty());
    assert!(terms(&analyzer, "Îl")?.is_empty());
    Ok(())
}

#[test]
fn test_comma_below_stop_words_are_removed() -> Result<()> {
    let analyzer = RomanianAnalyzer::new();

    assert!(terms(&analyzer, "şi")?.is_empty());
    assert!(terms(&analyzer, "și")?.is_empty());
    assert!(terms(&analyzer, "Și ați")?.is_empty());
    assert_eq!(terms(&analyzer, "și absența")?, vec!["absenţ"]);

    let kept = RomanianAnalyzer::new().with_exclusions(ExclusionSet::new(["şi"]));
    assert_eq!(terms(&kept, "și")?, vec!["și"]);
    Ok(())
}

#[test]
fn test_custom_stop_set() -> Result<()> {
    let analyzer = RomanianAnalyzer::new().with_stop_words(StopSet::new(["absenţa"]));

    assert!(terms(&analyzer, "absenţa")?.is_empty());
    assert_eq!(terms(&analyzer, "îl")?, vec!["îl"]);
    Ok(())
}

#[test]
fn test_default_stop_set_is_static() {
    let stop_set = RomanianAnalyzer::default_stop_set();

    assert!(stop_set.contains("îl"));
    assert!(!stop_set.is_empty());
    assert!(!EnglishAnalyzer::default_stop_set().contains("îl"));
    assert!(CjkAnalyzer::default_stop_set().contains("www"));
}
