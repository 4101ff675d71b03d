//! Romanian stemmer.
//!
//! A rule-table, suffix-stripping stemmer in the Snowball family. Words are
//! normalized first: NFC composition, lowercasing, and folding of the
//! comma-below letters `ș`/`ț` onto the cedilla forms `ş`/`ţ` used by the
//! tables. The algorithm then works on three regions:
//!
//! - RV: after the first vowel following a consonant-consonant start, after
//!   the first consonant following a vowel-vowel start, otherwise after the
//!   third letter
//! - R1: after the first non-vowel following a vowel
//! - R2: R1 applied again inside R1
//!
//! and runs five steps, each picking the longest matching suffix:
//!
//! 0. plural and article endings (R1)
//! 1. combo suffix reduction, repeated (R1)
//! 2. standard derivational suffixes (R2)
//! 3. verb endings (RV), only if steps 1-2 removed nothing
//! 4. a residual vowel (RV)
//!
//! # Examples
//!
//! ```
//! use falx::analysis::token_filter::stem::Stemmer;
//! use falx::analysis::token_filter::stem::romanian::RomanianStemmer;
//!
//! let stemmer = RomanianStemmer::new();
//! assert_eq!(stemmer.stem("absenţa"), "absenţ");
//! assert_eq!(stemmer.stem("absenţi"), "absenţ");
//! ```

use unicode_normalization::UnicodeNormalization;

use crate::analysis::term_set::fold_comma_below;
use crate::analysis::token_filter::stem::Stemmer;

/// What a matched suffix is rewritten to.
#[derive(Clone, Copy, Debug)]
enum Action {
    Delete,
    Replace(&'static str),
    /// Replace, unless the suffix directly follows the given letters.
    ReplaceUnlessAfter(&'static str, &'static str),
    /// The suffix must follow `ţ`; suffix and `ţ` become `t`.
    MergeCedillaT,
    /// Delete if the suffix follows a non-vowel or `u` inside the region.
    DeleteAfterConsonantOrU,
}

struct Rule {
    suffixes: &'static [&'static str],
    action: Action,
}

const STEP_0: &[Rule] = &[
    Rule {
        suffixes: &["ul", "ului"],
        action: Action::Delete,
    },
    Rule {
        suffixes: &["aua"],
        action: Action::Replace("a"),
    },
    Rule {
        suffixes: &["ea", "ele", "elor"],
        action: Action::Replace("e"),
    },
    Rule {
        suffixes: &["ii", "iua", "iei", "iile", "iilor", "ilor"],
        action: Action::Replace("i"),
    },
    Rule {
        suffixes: &["ile"],
        action: Action::ReplaceUnlessAfter("i", "ab"),
    },
    Rule {
        suffixes: &["atei"],
        action: Action::Replace("at"),
    },
    Rule {
        suffixes: &["aţie", "aţia"],
        action: Action::Replace("aţi"),
    },
];

const COMBO_SUFFIXES: &[Rule] = &[
    Rule {
        suffixes: &["abilitate", "abilitati", "abilităi", "abilităţi"],
        action: Action::Replace("abil"),
    },
    Rule {
        suffixes: &["ibilitate"],
        action: Action::Replace("ibil"),
    },
    Rule {
        suffixes: &["ivitate", "ivitati", "ivităi", "ivităţi"],
        action: Action::Replace("iv"),
    },
    Rule {
        suffixes: &[
            "icitate", "icitati", "icităi", "icităţi", "icator", "icatori", "iciv", "iciva",
            "icive", "icivi", "icivă", "ical", "icala", "icale", "icali", "icală",
        ],
        action: Action::Replace("ic"),
    },
    Rule {
        suffixes: &[
            "ativ", "ativa", "ative", "ativi", "ativă", "aţiune", "atoare", "ator", "atori",
            "ătoare", "ător", "ători",
        ],
        action: Action::Replace("at"),
    },
    Rule {
        suffixes: &[
            "itiv", "itiva", "itive", "itivi", "itivă", "iţiune", "itoare", "itor", "itori",
        ],
        action: Action::Replace("it"),
    },
];

const STANDARD_SUFFIXES: &[Rule] = &[
    Rule {
        suffixes: &[
            "at", "ata", "ată", "ati", "ate", "ut", "uta", "ută", "uti", "ute", "it", "ita", "ită",
            "iti", "ite", "ic", "ica", "ice", "ici", "ică", "abil", "abila", "abile", "abili",
            "abilă", "ibil", "ibila", "ibile", "ibili", "ibilă", "oasa", "oasă", "oase", "os",
            "osi", "oşi", "ant", "anta", "ante", "anti", "antă", "ator", "atori", "itate",
            "itati", "ităi", "ităţi", "iv", "iva", "ive", "ivi", "ivă",
        ],
        action: Action::Delete,
    },
    Rule {
        suffixes: &["iune", "iuni"],
        action: Action::MergeCedillaT,
    },
    Rule {
        suffixes: &["ism", "isme", "ist", "ista", "iste", "isti", "istă", "işti"],
        action: Action::Replace("ist"),
    },
];

const VERB_SUFFIXES: &[Rule] = &[
    Rule {
        suffixes: &[
            "are", "ere", "ire", "âre", "ind", "ând", "indu", "ându", "eze", "ească", "ez", "ezi",
            "ează", "esc", "eşti", "eşte", "ăsc", "ăşti", "ăşte", "am", "ai", "au", "eam", "eai",
            "ea", "eaţi", "eau", "iam", "iai", "ia", "iaţi", "iau", "ui", "aşi", "arăm", "arăţi",
            "ară", "uşi", "urăm", "urăţi", "ură", "işi", "irăm", "irăţi", "iră", "âi", "âşi",
            "ârăm", "ârăţi", "âră", "asem", "aseşi", "ase", "aserăm", "aserăţi", "aseră", "isem",
            "iseşi", "ise", "iserăm", "iserăţi", "iseră", "âsem", "âseşi", "âse", "âserăm",
            "âserăţi", "âseră", "usem", "useşi", "use", "userăm", "userăţi", "useră",
        ],
        action: Action::DeleteAfterConsonantOrU,
    },
    Rule {
        suffixes: &[
            "ăm", "aţi", "em", "eţi", "im", "iţi", "âm", "âţi", "seşi", "serăm", "serăţi", "seră",
            "sei", "se", "sesem", "seseşi", "sese", "seserăm", "seserăţi", "seseră",
        ],
        action: Action::Delete,
    },
];

const VOWEL_SUFFIXES: &[Rule] = &[Rule {
    suffixes: &["a", "e", "i", "ie", "ă"],
    action: Action::Delete,
}];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'ă' | 'â' | 'e' | 'i' | 'î' | 'o' | 'u')
}

/// Fold orthographic variants onto the forms used by the rule tables.
pub fn normalize(word: &str) -> String {
    word.nfc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .map(fold_comma_below)
        .collect()
}

/// Working state for one word.
struct Word {
    chars: Vec<char>,
    rv: usize,
    r1: usize,
    r2: usize,
}

impl Word {
    fn new(normalized: &str) -> Self {
        let mut chars: Vec<char> = normalized.chars().collect();
        mark_consonant_glides(&mut chars);

        let rv = rv_start(&chars);
        let r1 = region_start(&chars, 0);
        let r2 = region_start(&chars, r1);
        Word { chars, rv, r1, r2 }
    }

    fn ends_with(&self, end: usize, suffix: &str) -> bool {
        let n = suffix.chars().count();
        n <= end && self.chars[end - n..end].iter().copied().eq(suffix.chars())
    }

    /// Find the longest suffix from `rules` that lies entirely at or after `limit`.
    fn longest_match(&self, rules: &'static [Rule], limit: usize) -> Option<(Action, usize)> {
        let len = self.chars.len();
        let mut best: Option<(Action, usize)> = None;

        for rule in rules {
            for suffix in rule.suffixes {
                let n = suffix.chars().count();
                if n > len - limit.min(len) || best.is_some_and(|(_, m)| m >= n) {
                    continue;
                }
                if self.ends_with(len, suffix) {
                    best = Some((rule.action, n));
                }
            }
        }

        best.map(|(action, n)| (action, len - n))
    }

    fn replace_from(&mut self, start: usize, replacement: &str) {
        self.chars.truncate(start);
        self.chars.extend(replacement.chars());
    }

    /// Apply `action` to the suffix starting at `start`. Returns whether the word changed.
    fn apply(&mut self, action: Action, start: usize) -> bool {
        match action {
            Action::Delete => self.replace_from(start, ""),
            Action::Replace(replacement) => self.replace_from(start, replacement),
            Action::ReplaceUnlessAfter(replacement, blocker) => {
                if self.ends_with(start, blocker) {
                    return false;
                }
                self.replace_from(start, replacement);
            }
            Action::MergeCedillaT => {
                if start == 0 || self.chars[start - 1] != 'ţ' {
                    return false;
                }
                self.replace_from(start - 1, "t");
            }
            Action::DeleteAfterConsonantOrU => {
                if start == 0 || start - 1 < self.rv {
                    return false;
                }
                let previous = self.chars[start - 1];
                if is_vowel(previous) && previous != 'u' {
                    return false;
                }
                self.replace_from(start, "");
            }
        }
        true
    }

    /// Longest match anywhere, then require it to start inside the region.
    fn apply_in_region(&mut self, rules: &'static [Rule], region: usize) -> bool {
        match self.longest_match(rules, 0) {
            Some((action, start)) if start >= region => self.apply(action, start),
            _ => false,
        }
    }

    fn step_0(&mut self) {
        self.apply_in_region(STEP_0, self.r1);
    }

    /// Steps 1 and 2. Returns whether a suffix was removed.
    fn standard_suffix(&mut self) -> bool {
        let mut removed = false;
        while self.apply_in_region(COMBO_SUFFIXES, self.r1) {
            removed = true;
        }
        self.apply_in_region(STANDARD_SUFFIXES, self.r2) || removed
    }

    fn verb_suffix(&mut self) {
        // Matching is confined to RV, so a shorter suffix inside RV wins over
        // a longer one reaching outside it.
        if let Some((action, start)) = self.longest_match(VERB_SUFFIXES, self.rv) {
            self.apply(action, start);
        }
    }

    fn vowel_suffix(&mut self) {
        self.apply_in_region(VOWEL_SUFFIXES, self.rv);
    }

    fn finish(self) -> String {
        self.chars
            .into_iter()
            .map(|c| match c {
                'I' => 'i',
                'U' => 'u',
                other => other,
            })
            .collect()
    }
}

/// Upper-case `i` and `u` between vowels so they count as consonants.
fn mark_consonant_glides(chars: &mut [char]) {
    for pos in 1..chars.len().saturating_sub(1) {
        if is_vowel(chars[pos - 1]) && is_vowel(chars[pos + 1]) {
            match chars[pos] {
                'i' => chars[pos] = 'I',
                'u' => chars[pos] = 'U',
                _ => {}
            }
        }
    }
}

/// Position just after the first char at or after `from` matching `predicate`.
fn past(chars: &[char], from: usize, predicate: impl Fn(char) -> bool) -> Option<usize> {
    chars
        .iter()
        .skip(from)
        .position(|&c| predicate(c))
        .map(|i| from + i + 1)
}

fn rv_start(chars: &[char]) -> usize {
    let len = chars.len();
    if len < 2 {
        return len;
    }

    let rv = match (is_vowel(chars[0]), is_vowel(chars[1])) {
        (true, false) => past(chars, 2, is_vowel),
        (true, true) => past(chars, 2, |c| !is_vowel(c)),
        (false, false) => past(chars, 2, is_vowel),
        (false, true) => (len > 2).then_some(3),
    };
    rv.unwrap_or(len)
}

fn region_start(chars: &[char], from: usize) -> usize {
    past(chars, from, is_vowel)
        .and_then(|after_vowel| past(chars, after_vowel, |c| !is_vowel(c)))
        .unwrap_or(chars.len())
}

/// Snowball-style Romanian stemmer.
#[derive(Debug, Clone, Default)]
pub struct RomanianStemmer;

impl RomanianStemmer {
    pub fn new() -> Self {
        RomanianStemmer
    }
}

impl Stemmer for RomanianStemmer {
    fn stem(&self, word: &str) -> String {
        let mut word = Word::new(&normalize(word));

        word.step_0();
        if !word.standard_suffix() {
            word.verb_suffix();
        }
        word.vowel_suffix();
        word.finish()
    }

    fn name(&self) -> &'static str {
        "romanian"
    }
}
