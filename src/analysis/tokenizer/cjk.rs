//! Ideographic bigram tokenizer implementation.
//!
//! Scripts such as Chinese and Japanese do not mark word boundaries with
//! whitespace. This tokenizer indexes every adjacent pair of ideographic
//! characters instead, which gives good recall without a dictionary.
//!
//! For a maximal run of L ideographic characters it emits `max(L - 1, 1)`
//! overlapping bigrams; a lone ideograph becomes a one-character token.
//! Non-ideographic runs in the same input fall back to word-break
//! segmentation and keep their relative order.
//!
//! # Examples
//!
//! ```
//! use falx::analysis::tokenizer::tokenize;
//! use falx::analysis::tokenizer::cjk::CjkBigramTokenizer;
//!
//! let tokenizer = CjkBigramTokenizer::new();
//! let texts: Vec<_> = tokenize(&tokenizer, "我是中国人")
//!     .into_iter()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(texts, vec!["我是", "是中", "中国", "国人"]);
//! ```

use unicode_script::{Script, UnicodeScript};

use crate::analysis::token::{Token, TokenType};
use crate::analysis::tokenizer::word_break::{DEFAULT_MAX_TOKEN_LENGTH, next_word};
use crate::analysis::tokenizer::{Tokenizer, TokenizerState};

/// Check whether `c` belongs to a script segmented by bigrams.
///
/// Classification follows the Unicode Script property: Han (every extension
/// block, compatibility ideographs, 々 and 〇), Hiragana, Katakana and Hangul.
/// The prolonged sound mark and the kana voicing marks are shared between
/// the kana scripts and count as part of the run too.
pub fn is_ideographic(c: char) -> bool {
    match c.script() {
        Script::Han | Script::Hiragana | Script::Katakana | Script::Hangul => true,
        _ => matches!(c, '\u{3099}'..='\u{309C}' | 'ー' | 'ｰ' | 'ﾞ' | 'ﾟ'),
    }
}

/// A tokenizer that emits overlapping bigrams for ideographic text.
#[derive(Clone, Debug, Default)]
pub struct CjkBigramTokenizer;

impl CjkBigramTokenizer {
    /// Create a new bigram tokenizer.
    pub fn new() -> Self {
        CjkBigramTokenizer
    }

    fn emit(text: &str, start: usize, end: usize, state: &mut TokenizerState) -> Token {
        let position = state.next_position();
        Token::with_offsets(&text[start..end], position, start, end)
            .with_token_type(TokenType::Ideographic)
    }
}

impl Tokenizer for CjkBigramTokenizer {
    fn next_token(&self, text: &str, state: &mut TokenizerState) -> Option<Token> {
        loop {
            let rest = text.get(state.offset..)?;
            let first = rest.chars().next()?;

            if is_ideographic(first) {
                let start = state.offset;
                let first_len = first.len_utf8();
                state.offset += first_len;

                match rest[first_len..].chars().next().filter(|c| is_ideographic(*c)) {
                    Some(second) => {
                        state.run_open = true;
                        let end = start + first_len + second.len_utf8();
                        return Some(Self::emit(text, start, end, state));
                    }
                    // Last character of a run, already covered by the previous bigram.
                    None if state.run_open => {
                        state.run_open = false;
                        continue;
                    }
                    None => return Some(Self::emit(text, start, start + first_len, state)),
                }
            }

            state.run_open = false;
            let run_end = state.offset + rest.find(is_ideographic).unwrap_or(rest.len());
            if let Some(token) = next_word(text, run_end, state, DEFAULT_MAX_TOKEN_LENGTH) {
                return Some(token);
            }
        }
    }

    fn name(&self) -> &'static str {
        "cjk"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::tokenize;

    fn texts(input: &str) -> Vec<String> {
        tokenize(&CjkBigramTokenizer::new(), input)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_bigrams() {
        let tokens = tokenize(&CjkBigramTokenizer::new(), "我是中国人");

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].text, "我是");
        assert_eq!(tokens[1].text, "是中");
        assert_eq!(tokens[2].text, "中国");
        assert_eq!(tokens[3].text, "国人");

        // Each ideograph is three bytes; bigrams overlap by one character.
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.start_offset, i * 3);
            assert_eq!(token.end_offset, i * 3 + 6);
            assert_eq!(token.position, i);
            assert_eq!(token.token_type, TokenType::Ideographic);
        }
    }

    #[test]
    fn test_single_ideograph() {
        let tokens = tokenize(&CjkBigramTokenizer::new(), "人");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "人");
        assert_eq!(tokens[0].end_offset, 3);
    }

    #[test]
    fn test_two_ideographs() {
        assert_eq!(texts("中国"), vec!["中国"]);
    }

    #[test]
    fn test_mixed_scripts() {
        assert_eq!(
            texts("我爱Rust语言, 人 ok"),
            vec!["我爱", "Rust", "语言", "人", "ok"]
        );
    }

    #[test]
    fn test_mixed_offsets() {
        let tokens = tokenize(&CjkBigramTokenizer::new(), "ab中文cd");

        assert_eq!(tokens.len(), 3);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 2));
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (2, 8));
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (8, 10));
        assert_eq!(tokens[2].text, "cd");
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_kana_and_hangul() {
        assert_eq!(texts("ゴジラ"), vec!["ゴジ", "ジラ"]);
        assert_eq!(texts("한국어"), vec!["한국", "국어"]);
    }

    #[test]
    fn test_separated_runs() {
        // The space breaks the run, so each lone ideograph is kept.
        assert_eq!(texts("中 国"), vec!["中", "国"]);
        assert_eq!(texts("中国 人"), vec!["中国", "人"]);
    }

    #[test]
    fn test_iteration_mark_and_ideographic_zero() {
        assert_eq!(texts("人々"), vec!["人々"]);
        assert_eq!(texts("人々〇"), vec!["人々", "々〇"]);
        assert_eq!(texts("时时刻刻〆"), vec!["时时", "时刻", "刻刻", "刻〆"]);
    }

    #[test]
    fn test_supplementary_extensions() {
        // Extension G, four bytes per character.
        let tokens = tokenize(&CjkBigramTokenizer::new(), "\u{30000}\u{30001}\u{30002}");
        assert_eq!(tokens.len(), 2);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 8));
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (4, 12));
        assert_eq!(tokens[1].position, 1);

        // Extension F and the compatibility supplement.
        assert_eq!(texts("\u{2CEB0}\u{2F800}").len(), 1);
    }

    #[test]
    fn test_kana_marks_stay_in_run() {
        assert_eq!(texts("コーヒー"), vec!["コー", "ーヒ", "ヒー"]);
        assert_eq!(texts("ｺｰﾋｰ"), vec!["ｺｰ", "ｰﾋ", "ﾋｰ"]);
        assert_eq!(texts("ㇰㇱ"), vec!["ㇰㇱ"]);
        assert_eq!(texts("ㄱㄴ"), vec!["ㄱㄴ"]);
    }

    #[test]
    fn test_is_ideographic() {
        for c in ['中', '々', '〇', '〡', 'あ', 'ア', '한', 'ㄱ', '\u{323AF}'] {
            assert!(is_ideographic(c), "{c:?}");
        }
        for c in ['a', '1', ' ', '、', '。', '・', 'ş'] {
            assert!(!is_ideographic(c), "{c:?}");
        }
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(CjkBigramTokenizer::new().name(), "cjk");
    }
}
