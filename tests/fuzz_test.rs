//! Randomized input stability tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use falx::analysis::analyzer::language::cjk::CjkAnalyzer;
use falx::analysis::analyzer::language::english::EnglishAnalyzer;
use falx::analysis::analyzer::language::romanian::RomanianAnalyzer;
use falx::analysis::analyzer::{Analyzer, StandardAnalyzer};
use falx::analysis::config::AnalyzerConfig;

const ITERATIONS: usize = 300;

/// Pools of characters the analyzers treat specially, mixed with arbitrary code points.
const INTERESTING: &[char] = &[
    ' ', '\t', '\n', '.', ',', '\'', '-', '_', 'a', 'Z', '0', '9', 'ă', 'â', 'î', 'ş', 'ș', 'ţ',
    'ț', 'I', 'U', '中', '国', 'の', 'カ', '한', 'ｶ', '\u{0301}', '\u{0327}', '\u{200d}', '🦀',
];

fn random_text(rng: &mut StdRng) -> String {
    let len = rng.random_range(0..64);
    (0..len)
        .map(|_| {
            if rng.random_bool(0.6) {
                INTERESTING[rng.random_range(0..INTERESTING.len())]
            } else {
                loop {
                    if let Some(c) = char::from_u32(rng.random_range(0..=0x10FFFF)) {
                        break c;
                    }
                }
            }
        })
        .collect()
}

fn check(analyzer: &dyn Analyzer, text: &str) {
    let tokens: Vec<_> = analyzer.analyze(text).unwrap().collect();

    let mut last_start = 0;
    let mut last_position = None;
    for token in &tokens {
        assert!(token.start_offset <= token.end_offset, "{token:?} in {text:?}");
        assert!(token.end_offset <= text.len());
        assert!(text.is_char_boundary(token.start_offset));
        assert!(text.is_char_boundary(token.end_offset));
        assert!(token.start_offset >= last_start, "offsets went backwards in {text:?}");
        if let Some(last) = last_position {
            assert!(token.position > last, "positions not increasing in {text:?}");
        }
        last_start = token.start_offset;
        last_position = Some(token.position);
    }

    // Same input, same output.
    let again: Vec<_> = analyzer.analyze(text).unwrap().collect();
    assert_eq!(tokens, again);
}

#[test]
fn test_random_unicode_input() {
    let ngram = AnalyzerConfig::from_json_str(
        r#"{ "tokenizer": { "type": "ngram", "min_gram": 1, "max_gram": 3 } }"#,
    )
    .unwrap()
    .build()
    .unwrap();

    let analyzers: Vec<Box<dyn Analyzer>> = vec![
        Box::new(RomanianAnalyzer::new()),
        Box::new(EnglishAnalyzer::new()),
        Box::new(CjkAnalyzer::new()),
        Box::new(StandardAnalyzer::new()),
        Box::new(ngram),
    ];

    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..ITERATIONS {
        let text = random_text(&mut rng);
        for analyzer in &analyzers {
            check(analyzer.as_ref(), &text);
        }
    }
}
