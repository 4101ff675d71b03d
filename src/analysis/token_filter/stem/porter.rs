//! Porter stemming algorithm implementation.
//!
//! The Porter stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals and -ed/-ing suffixes
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! Words containing anything but ASCII letters are only lowercased.
//!
//! # Examples
//!
//! ```
//! use falx::analysis::token_filter::stem::Stemmer;
//! use falx::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Porter stemming algorithm for English.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Check if the byte at `pos` is a vowel. `y` counts as a vowel after a consonant.
    fn is_vowel(&self, word: &[u8], pos: usize) -> bool {
        match word.get(pos) {
            Some(b'a' | b'e' | b'i' | b'o' | b'u') => true,
            Some(b'y') if pos > 0 => !self.is_vowel(word, pos - 1),
            _ => false,
        }
    }

    /// Calculate the measure of a word (number of VC patterns).
    fn measure(&self, word: &[u8]) -> usize {
        let mut m = 0;
        let n = word.len();
        let mut i = 0;

        // Skip initial consonants
        while i < n && !self.is_vowel(word, i) {
            i += 1;
        }

        while i < n {
            while i < n && self.is_vowel(word, i) {
                i += 1;
            }
            if i >= n {
                break;
            }
            m += 1;
            while i < n && !self.is_vowel(word, i) {
                i += 1;
            }
        }

        m
    }

    fn contains_vowel(&self, word: &[u8]) -> bool {
        (0..word.len()).any(|i| self.is_vowel(word, i))
    }

    fn ends_with_double_consonant(&self, word: &[u8]) -> bool {
        let len = word.len();
        len >= 2 && word[len - 1] == word[len - 2] && !self.is_vowel(word, len - 1)
    }

    /// Check if word ends with consonant-vowel-consonant, the last not w, x or y.
    fn ends_cvc(&self, word: &[u8]) -> bool {
        let len = word.len();
        len >= 3
            && !self.is_vowel(word, len - 3)
            && self.is_vowel(word, len - 2)
            && !self.is_vowel(word, len - 1)
            && !matches!(word[len - 1], b'w' | b'x' | b'y')
    }

    /// Replace `suffix` with `replacement` if the remaining stem has measure >= `min_measure`.
    ///
    /// Returns `None` when `word` does not end with `suffix`.
    fn replace_suffix(
        &self,
        word: &mut String,
        suffix: &str,
        replacement: &str,
        min_measure: usize,
    ) -> Option<bool> {
        let stem_len = word.len().checked_sub(suffix.len())?;
        if !word.ends_with(suffix) {
            return None;
        }
        if self.measure(&word.as_bytes()[..stem_len]) >= min_measure {
            word.truncate(stem_len);
            word.push_str(replacement);
            Some(true)
        } else {
            Some(false)
        }
    }

    fn step1a(&self, word: &mut String) {
        if word.ends_with("sses") || word.ends_with("ies") {
            word.truncate(word.len() - 2);
        } else if !word.ends_with("ss") && word.ends_with('s') {
            word.pop();
        }
    }

    fn step1b(&self, word: &mut String) {
        if word.ends_with("eed") {
            self.replace_suffix(word, "eed", "ee", 1);
            return;
        }

        let suffix_len = if word.ends_with("ed") {
            2
        } else if word.ends_with("ing") {
            3
        } else {
            return;
        };

        let stem_len = word.len() - suffix_len;
        if !self.contains_vowel(&word.as_bytes()[..stem_len]) {
            return;
        }
        word.truncate(stem_len);

        let bytes = word.as_bytes();
        if word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz") {
            word.push('e');
        } else if self.ends_with_double_consonant(bytes)
            && !matches!(bytes[bytes.len() - 1], b'l' | b's' | b'z')
        {
            word.pop();
        } else if self.measure(bytes) == 1 && self.ends_cvc(bytes) {
            word.push('e');
        }
    }

    fn step1c(&self, word: &mut String) {
        if word.ends_with('y') && self.contains_vowel(&word.as_bytes()[..word.len() - 1]) {
            word.pop();
            word.push('i');
        }
    }

    fn step2(&self, word: &mut String) {
        const SUFFIXES: &[(&str, &str)] = &[
            ("ational", "ate"),
            ("tional", "tion"),
            ("enci", "ence"),
            ("anci", "ance"),
            ("izer", "ize"),
            ("abli", "able"),
            ("alli", "al"),
            ("entli", "ent"),
            ("eli", "e"),
            ("ousli", "ous"),
            ("ization", "ize"),
            ("ation", "ate"),
            ("ator", "ate"),
            ("alism", "al"),
            ("iveness", "ive"),
            ("fulness", "ful"),
            ("ousness", "ous"),
            ("aliti", "al"),
            ("iviti", "ive"),
            ("biliti", "ble"),
        ];

        for (suffix, replacement) in SUFFIXES {
            if self.replace_suffix(word, suffix, replacement, 1).is_some() {
                return;
            }
        }
    }

    fn step3(&self, word: &mut String) {
        const SUFFIXES: &[(&str, &str)] = &[
            ("icate", "ic"),
            ("ative", ""),
            ("alize", "al"),
            ("iciti", "ic"),
            ("ical", "ic"),
            ("ful", ""),
            ("ness", ""),
        ];

        for (suffix, replacement) in SUFFIXES {
            if self.replace_suffix(word, suffix, replacement, 1).is_some() {
                return;
            }
        }
    }

    fn step4(&self, word: &mut String) {
        const SUFFIXES: &[&str] = &[
            "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion",
            "ou", "ism", "ate", "iti", "ous", "ive", "ize",
        ];

        for suffix in SUFFIXES {
            if !word.ends_with(suffix) {
                continue;
            }
            let stem_len = word.len() - suffix.len();
            let stem = &word.as_bytes()[..stem_len];
            if self.measure(stem) > 1
                && (*suffix != "ion" || matches!(stem.last(), Some(b's' | b't')))
            {
                word.truncate(stem_len);
                return;
            }
        }
    }

    fn step5(&self, word: &mut String) {
        if word.ends_with('e') {
            let stem = &word.as_bytes()[..word.len() - 1];
            let m = self.measure(stem);
            if m > 1 || (m == 1 && !self.ends_cvc(stem)) {
                word.pop();
            }
        }

        if word.ends_with("ll") && self.measure(word.as_bytes()) > 1 {
            word.pop();
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let mut word = word.to_lowercase();
        if word.len() <= 2 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return word;
        }

        self.step1a(&mut word);
        self.step1b(&mut word);
        self.step1c(&mut word);
        self.step2(&mut word);
        self.step3(&mut word);
        self.step4(&mut word);
        self.step5(&mut word);
        word
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
