//! Integration tests for the ideographic bigram tokenizer and the component factory

use std::collections::HashMap;
use std::sync::Arc;

use falx::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use falx::analysis::factory::{Component, ComponentFactory, Options};
use falx::analysis::token::{Token, TokenType};
use falx::error::ErrorKind;

#[test]
fn test_chinese_bigrams() {
    let tokenizer = ComponentFactory::create_tokenizer("cjk", &Options::new()).unwrap();
    let analyzer = PipelineAnalyzer::new(tokenizer);

    let tokens: Vec<Token> = analyzer.analyze("我是中国人").unwrap().collect();
    let spans: Vec<(&str, usize, usize, usize)> = tokens
        .iter()
        .map(|t| (t.text.as_str(), t.start_offset, t.end_offset, t.position))
        .collect();

    assert_eq!(
        spans,
        vec![
            ("我是", 0, 6, 0),
            ("是中", 3, 9, 1),
            ("中国", 6, 12, 2),
            ("国人", 9, 15, 3),
        ]
    );
    assert!(tokens.iter().all(|t| t.token_type == TokenType::Ideographic));
}

#[test]
fn test_single_ideograph_and_mixed_runs() {
    let tokenizer = ComponentFactory::create_tokenizer("cjk", &Options::new()).unwrap();
    let analyzer = PipelineAnalyzer::new(tokenizer);

    let texts: Vec<String> = analyzer
        .analyze("中 abc 日本語 x人")
        .unwrap()
        .map(|t| t.text)
        .collect();

    assert_eq!(texts, vec!["中", "abc", "日本", "本語", "x", "人"]);
}

#[test]
fn test_bogus_argument_is_rejected() {
    let mut options = HashMap::new();
    options.insert("bogusArg".to_string(), "bogusValue".to_string());

    let err = ComponentFactory::create_tokenizer("cjk", &options).err().expect("expected an error");
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("Unknown parameters"));
    assert!(err.to_string().contains("bogusArg"));

    let err = ComponentFactory::create("cjk", &options).unwrap_err();
    assert!(err.to_string().contains("bogusArg"));
}

#[test]
fn test_factory_built_pipeline() {
    let mut stem_options = Options::new();
    stem_options.insert("language".to_string(), "romanian".to_string());
    let mut stop_options = Options::new();
    stop_options.insert("language".to_string(), "romanian".to_string());

    let Component::Tokenizer(tokenizer) =
        ComponentFactory::create("word_break", &Options::new()).unwrap()
    else {
        panic!("Expected a tokenizer");
    };
    let analyzer = PipelineAnalyzer::new(tokenizer)
        .add_filter(ComponentFactory::create_filter("lowercase", &Options::new()).unwrap())
        .add_filter(ComponentFactory::create_filter("stop", &stop_options).unwrap())
        .add_filter(ComponentFactory::create_filter("stem", &stem_options).unwrap());

    let texts: Vec<String> = analyzer
        .analyze("Îl absenţa absenţi")
        .unwrap()
        .map(|t| t.text)
        .collect();
    assert_eq!(texts, vec!["absenţ", "absenţ"]);

    let shared = Arc::new(analyzer);
    assert_eq!(shared.filters().len(), 3);
}
