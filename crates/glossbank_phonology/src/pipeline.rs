//! The staged base-to-Thravelemeh conversion.
//!
//! [`PhonologyPipeline::convert`] is a pure function composed of ordered
//! stages, each stage's output feeding the next. Stage order is significant:
//! the dialect is defined by reading the base form backwards, so reversal
//! happens before any phonotactic repair, and the onset prefix is keyed on
//! the length of the fully repaired string.

use crate::substitution::SubstitutionTable;
use crate::tables::{CharClasses, THRAVELEMEH};

/// The epenthetic consonant inserted to break illegal clusters.
const EPENTHETIC: char = 'h';

/// The suffix appended to non-countable nouns and non-finite verbs.
const SUFFIX: char = 'h';

/// The filler vowel appended after characters that may not end a word.
const FILLER: char = 'a';

/// A deterministic string-to-string converter for one target language.
#[derive(Clone, Debug)]
pub struct PhonologyPipeline {
    normalization: SubstitutionTable,
    classes: CharClasses,
}

impl PhonologyPipeline {
    /// Creates a pipeline from a normalization table and character classes.
    #[must_use]
    pub fn new(normalization: SubstitutionTable, classes: CharClasses) -> Self {
        Self {
            normalization,
            classes,
        }
    }

    /// The shipped base-to-Thravelemeh pipeline.
    ///
    /// The normalization table collapses source digraphs onto the target
    /// alphabet before the structural stages run.
    #[must_use]
    pub fn thravelemeh() -> Self {
        let normalization = SubstitutionTable::new([
            ("ck", "k"),
            ("ph", "f"),
            ("qu", "q"),
            ("sh", "s"),
            ("ch", "c"),
            ("th", "t"),
        ]);
        Self::new(normalization, THRAVELEMEH)
    }

    /// Converts `word` into the target orthography.
    ///
    /// `countable` marks countable nouns and main verbs; other words receive
    /// the suffix consonant. Identical input always yields identical output,
    /// and empty input yields empty output.
    #[must_use]
    pub fn convert(&self, word: &str, countable: bool) -> String {
        if word.is_empty() {
            return String::new();
        }
        let s = self.normalization.apply(word);
        let s = reverse(&s);
        let s = remap_chars(&s);
        let s = normalize_geminates(&s);
        let s = self.epenthesis(&s);
        let s = self.apply_suffix(s, countable);
        let s = diphthongize(&s);
        self.prefix_onset(s)
    }

    /// Stage 5: epenthesis.
    ///
    /// Scanning left to right, a consonant immediately followed by a
    /// non-vowel gets the epenthetic consonant inserted after it, unless the
    /// consonant is in the exempt subset. The scan walks the original
    /// character positions while comparisons read the updated string, so an
    /// insertion never retriggers on the character it inserted.
    fn epenthesis(&self, input: &str) -> String {
        let original: Vec<char> = input.chars().collect();
        let mut out = original.clone();
        let mut inserted = 0;
        for (i, &c) in original.iter().enumerate() {
            let next = i + inserted + 1;
            if self.classes.is_consonant(c)
                && next < out.len()
                && !self.classes.is_vowel(out[next])
                && !self.classes.is_epenthesis_exempt(c)
            {
                out.insert(next, EPENTHETIC);
                inserted += 1;
            }
        }
        out.into_iter().collect()
    }

    /// Stage 6: suffix policy.
    ///
    /// Non-countable words take the suffix consonant. A trailing
    /// vowel-plus-suffix boundary is disambiguated by doubling the suffix,
    /// and a final character that may not end a word takes the filler vowel.
    fn apply_suffix(&self, input: String, countable: bool) -> String {
        let mut out: Vec<char> = input.chars().collect();
        if !countable {
            out.push(SUFFIX);
        }
        if out.len() >= 2 && out[out.len() - 1] == SUFFIX && self.classes.is_vowel(out[out.len() - 2])
        {
            out.push(SUFFIX);
        }
        if let Some(&last) = out.last() {
            if self.classes.cannot_end_word(last) {
                out.push(FILLER);
            }
        }
        out.into_iter().collect()
    }

    /// Stage 8: length-keyed onset prefixing.
    ///
    /// If the word starts with a character that requires an onset, a specific
    /// consonant is prepended at the checkpoint lengths 2, 4, and 6; each
    /// check sees the length produced by the previous one.
    fn prefix_onset(&self, input: String) -> String {
        let mut out: Vec<char> = input.chars().collect();
        let Some(&first) = out.first() else {
            return input;
        };
        if self.classes.requires_onset(first) {
            if out.len() == 2 {
                out.insert(0, 'v');
            }
            if out.len() == 4 {
                out.insert(0, 'j');
            }
            if out.len() == 6 {
                out.insert(0, 'q');
            }
        }
        out.into_iter().collect()
    }
}

/// Stage 2: structural reversal.
fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// Stage 3: fixed one-to-one character remaps.
fn remap_chars(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'x' => 'z',
            'w' => 'u',
            'y' => 'i',
            other => other,
        })
        .collect()
}

/// Stage 4: geminate and cluster normalization.
fn normalize_geminates(input: &str) -> String {
    let mut out = input.to_string();
    for (from, to) in [
        ("cc", "c"),
        ("dd", "d"),
        ("ll", "l"),
        ("oo", "aa"),
        ("rr", "r"),
        ("tt", "t"),
    ] {
        out = out.replace(from, to);
    }
    out
}

/// Stage 7: diphthongization.
///
/// Specific vowel sequences are rewritten to semivowel-plus-vowel pairs in a
/// fixed order.
fn diphthongize(input: &str) -> String {
    let mut out = input.to_string();
    for (from, to) in [
        ("ia", "ya"),
        ("ie", "ye"),
        ("io", "yo"),
        ("iu", "yu"),
        ("ua", "wa"),
        ("ue", "we"),
        ("ui", "wi"),
    ] {
        out = out.replace(from, to);
    }
    out
}
