//! Random word generation from slot templates.
//!
//! A template is a sequence of syllable patterns over the slot alphabet
//! `c` (consonant) and `v` (vowel). Each generated word picks one pattern
//! uniformly at random and fills every slot from the matching phoneme pool.

use glossbank_foundation::{Error, Result};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::tables::THRAVELEMEH;

/// A validated template word generator.
///
/// Randomness comes from the caller-supplied [`Rng`]; the generator itself
/// holds no seed and no state, so each call is independently random.
#[derive(Clone, Debug)]
pub struct WordGenerator {
    patterns: Vec<String>,
    consonants: Vec<String>,
    vowels: Vec<String>,
}

impl WordGenerator {
    /// Builds a generator from syllable patterns and phoneme pools.
    ///
    /// Patterns are case-insensitive and may contain only `c` and `v` slots.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTemplate`](glossbank_foundation::ErrorKind::InvalidTemplate)
    /// if any pattern contains a character outside the slot alphabet; no
    /// generator is built in that case.
    pub fn new<P, C, V>(
        patterns: impl IntoIterator<Item = P>,
        consonants: impl IntoIterator<Item = C>,
        vowels: impl IntoIterator<Item = V>,
    ) -> Result<Self>
    where
        P: Into<String>,
        C: Into<String>,
        V: Into<String>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| p.into().to_lowercase())
            .collect();
        for pattern in &patterns {
            if let Some(offending) = pattern.chars().find(|&c| c != 'c' && c != 'v') {
                return Err(Error::invalid_template(pattern.clone(), offending));
            }
        }
        Ok(Self {
            patterns,
            consonants: consonants.into_iter().map(Into::into).collect(),
            vowels: vowels.into_iter().map(Into::into).collect(),
        })
    }

    /// A generator preset with the Thravelemeh phoneme pools.
    #[must_use]
    pub fn thravelemeh() -> Self {
        // Static patterns, already lowercase and slot-valid.
        Self {
            patterns: ["cv", "cvc", "cvv", "cvcv"].map(str::to_string).to_vec(),
            consonants: THRAVELEMEH.consonants.iter().map(char::to_string).collect(),
            vowels: THRAVELEMEH.vowels.iter().map(char::to_string).collect(),
        }
    }

    /// The validated, lowercased patterns.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Generates `count` words.
    ///
    /// Each word chooses one pattern uniformly, then draws each slot
    /// uniformly from the corresponding pool. No deduplication is performed.
    /// A slot whose pool is empty contributes nothing to the word.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
        let mut words = Vec::with_capacity(count);
        for _ in 0..count {
            let mut word = String::new();
            if let Some(pattern) = self.patterns.choose(rng) {
                for slot in pattern.chars() {
                    let pool = if slot == 'c' {
                        &self.consonants
                    } else {
                        &self.vowels
                    };
                    if let Some(phoneme) = pool.choose(rng) {
                        word.push_str(phoneme);
                    }
                }
            }
            words.push(word);
        }
        words
    }
}
