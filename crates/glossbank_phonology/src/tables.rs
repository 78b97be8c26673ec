//! Static character classification tables.
//!
//! A [`CharClasses`] value describes the phonotactic character classes of one
//! target language. The pipeline consults these tables for every structural
//! rule: epenthesis, suffix placement, and onset prefixing.

/// Character classification tables for one language.
///
/// All sets are static data; membership queries never allocate.
#[derive(Clone, Copy, Debug)]
pub struct CharClasses {
    /// The consonant inventory.
    pub consonants: &'static [char],
    /// The vowel inventory.
    pub vowels: &'static [char],
    /// Consonants that never trigger epenthesis (and never retrigger it when
    /// inserted).
    pub epenthesis_exempt: &'static [char],
    /// Characters that may not end a word; a filler vowel follows them.
    pub cannot_end_word: &'static [char],
    /// Characters that require a prepended onset consonant when word-initial.
    pub onset_required: &'static [char],
}

impl CharClasses {
    /// Returns true if `c` is in the consonant inventory.
    #[must_use]
    pub fn is_consonant(&self, c: char) -> bool {
        self.consonants.contains(&c)
    }

    /// Returns true if `c` is in the vowel inventory.
    #[must_use]
    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    /// Returns true if `c` never triggers epenthesis.
    #[must_use]
    pub fn is_epenthesis_exempt(&self, c: char) -> bool {
        self.epenthesis_exempt.contains(&c)
    }

    /// Returns true if `c` may not end a word.
    #[must_use]
    pub fn cannot_end_word(&self, c: char) -> bool {
        self.cannot_end_word.contains(&c)
    }

    /// Returns true if a word starting with `c` needs an onset consonant.
    #[must_use]
    pub fn requires_onset(&self, c: char) -> bool {
        self.onset_required.contains(&c)
    }
}

/// Character classes of Thravelemeh.
pub const THRAVELEMEH: CharClasses = CharClasses {
    consonants: &[
        'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'z',
    ],
    vowels: &['a', 'e', 'i', 'o', 'u'],
    epenthesis_exempt: &['l', 'm', 'n', 'h', 's'],
    cannot_end_word: &['c', 'j', 'q', 'v', 'x', 'z'],
    // Vowels plus the suffix consonant: word-initial they carry no stress of
    // their own, so an onset is prepended at the checkpoint lengths.
    onset_required: &['a', 'e', 'i', 'o', 'u', 'h'],
};
