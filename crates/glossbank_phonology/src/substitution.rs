//! Longest-match-first literal substitution tables.
//!
//! Entries are sorted by key length descending at construction so that
//! multi-character keys are always preferred over their single-character
//! prefixes (`OO` before `O`, `aa` before `a`).

/// An ordered literal substitution table.
#[derive(Clone, Debug)]
pub struct SubstitutionTable {
    /// `(key, value)` pairs, longest key first.
    entries: Vec<(String, String)>,
    /// Whether lowercase keys are also applied in their uppercase form.
    fold_case: bool,
}

impl SubstitutionTable {
    /// Builds a table from `(key, value)` pairs.
    #[must_use]
    pub fn new<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        entries.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        Self {
            entries,
            fold_case: false,
        }
    }

    /// Builds a table that also applies each lowercase key in uppercase form,
    /// mapping to the uppercased value.
    #[must_use]
    pub fn case_folding<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new(pairs);
        table.fold_case = true;
        table
    }

    /// Applies every substitution to `input`, longest keys first.
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        let mut out = input.to_string();
        for (key, value) in &self.entries {
            out = out.replace(key.as_str(), value);
            if self.fold_case && key.chars().all(char::is_lowercase) {
                out = out.replace(&key.to_uppercase(), &value.to_uppercase());
            }
        }
        out
    }

    /// Returns the entries in application order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The shipped diacritic orthography table.
    ///
    /// Doubled vowels become macron forms and apostrophe-marked vowels become
    /// acute forms; case folding applies the same pairs to uppercase input.
    #[must_use]
    pub fn diacritic() -> Self {
        Self::case_folding([
            ("aa", "ā"),
            ("ee", "ē"),
            ("ii", "ī"),
            ("oo", "ō"),
            ("uu", "ū"),
            ("a'", "á"),
            ("e'", "é"),
            ("i'", "í"),
            ("o'", "ó"),
            ("u'", "ú"),
            ("c,", "ç"),
            ("n~", "ñ"),
        ])
    }

    /// The Pipere roman-to-greek table.
    ///
    /// Built by zipping the two alphabets, with `OO`, the hyphen, and both
    /// cases added explicitly; `q` maps to the archaic koppa.
    #[must_use]
    pub fn pipere() -> Self {
        const ROMAN: &str = "ABCDEFGHIKLMNOPQRSTVUZ";
        const GREEK: &str = "ΑΒΨΔΕΦΓΗΙΚΛΜΝΟΠϘΡΣΤѶΥΖ";

        let mut pairs: Vec<(String, String)> = vec![("OO".into(), "Ω".into()), ("-".into(), "⳼".into())];
        for (r, g) in ROMAN.chars().zip(GREEK.chars()) {
            pairs.push((r.to_string(), g.to_string()));
        }
        for (k, v) in pairs.clone() {
            pairs.push((k.to_lowercase(), v.to_lowercase()));
        }
        // The lowercase koppa is reserved; q maps to the lightning koppa.
        pairs.retain(|(k, _)| k != "q");
        pairs.push(("q".into(), "ϟ".into()));

        Self::new(pairs)
    }
}
