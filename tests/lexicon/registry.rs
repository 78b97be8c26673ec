//! Integration tests for the lexicon registry.

use glossbank_foundation::{Error, ErrorKind, Result};
use glossbank_lexicon::{LexiconRegistry, MemoryRowSource, RowBatch, RowSource};

fn seeded() -> MemoryRowSource {
    let mut source = MemoryRowSource::new();
    source.set_rows(
        "zasokese_database",
        vec![
            vec!["mo".into(), "n.".into(), "water".into(), "mo lale".into()],
            vec!["zakose".into(), "n.".into(), "language".into(), String::new()],
        ],
    );
    source.set_rows(
        "thravelemeh_database",
        vec![vec!["harn".into(), "v.".into(), "to sing".into()]],
    );
    source.set_rows(
        "felinkia_database",
        vec![vec!["fel".into(), "n.".into(), "cat".into()]],
    );
    source.set_rows(
        "4351_database",
        vec![vec!["x".into(), "sesa".into(), "n.".into(), "door".into()]],
    );
    source.set_rows(
        "semal_database",
        vec![vec!["sae".into(), "n.".into(), "dawn".into(), "".into()]],
    );
    source.set_rows(
        "xei_database",
        vec![vec!["xe".into(), "-".into(), "sky".into(), "xe fa".into()]],
    );
    source
}

#[test]
fn search_by_name_resolves_the_right_cache() {
    let mut registry = LexiconRegistry::standard();
    let mut source = seeded();

    let result = registry.search(&mut source, "thravelemeh", "harn").unwrap();
    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].record.headword, "harn");
}

#[test]
fn offset_lexicons_read_shifted_columns() {
    let mut registry = LexiconRegistry::standard();
    let mut source = seeded();

    let result = registry.search(&mut source, "4351", "sesa").unwrap();
    assert_eq!(result.matches[0].record.headword, "sesa");
    // The gloss column sits two past the shifted headword.
    let gloss = result.matches[0]
        .record
        .fields
        .iter()
        .find(|f| f.label == "gloss")
        .unwrap();
    assert_eq!(gloss.value, "door");
}

#[test]
fn dialect_search_matches_base_and_displays_derived() {
    let mut registry = LexiconRegistry::standard();
    let mut source = seeded();

    let result = registry
        .search(&mut source, "simetasispika", "zakose")
        .unwrap();
    assert_eq!(result.matches[0].record.headword, "sacose");

    // Searching the base lexicon shows the stored form untouched.
    let base = registry.search(&mut source, "zasokese", "zakose").unwrap();
    assert_eq!(base.matches[0].record.headword, "zakose");
}

#[test]
fn unknown_name_is_reported_not_empty() {
    let mut registry = LexiconRegistry::standard();
    let mut source = seeded();
    let err = registry.search(&mut source, "klingon", "q").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownLexicon(_)));
}

// =============================================================================
// Reload operations
// =============================================================================

#[test]
fn single_reload_affects_only_that_lexicon() {
    let mut registry = LexiconRegistry::standard();
    let mut source = seeded();
    registry.search(&mut source, "zasokese", "mo").unwrap();
    registry.search(&mut source, "thravelemeh", "harn").unwrap();

    source.push_row(
        "zasokese_database",
        vec!["nev".into(), "n.".into(), "new".into(), String::new()],
    );
    registry.reload(&mut source, "zasokese").unwrap();

    let result = registry.search(&mut source, "zasokese", "nev").unwrap();
    assert_eq!(result.matches.len(), 1);
    // The sibling cache was not touched by the reload.
    assert!(!registry.get("thravelemeh").unwrap().is_stale());
}

#[test]
fn reload_all_reports_per_lexicon_outcomes() {
    let mut registry = LexiconRegistry::standard();
    let mut source = seeded();
    let report = registry.reload_all(&mut source);

    assert_eq!(report.len(), 8);
    // Every sheet is present in the seeded source, so every reload lands.
    assert!(report.iter().all(|(_, outcome)| outcome.is_ok()));
    let visited: Vec<_> = report.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(visited, registry.names().collect::<Vec<_>>());
}

/// A source whose fetches fail for one specific table.
struct FlakySource {
    inner: MemoryRowSource,
    down: String,
}

impl RowSource for FlakySource {
    fn fetch(&mut self, source_id: &str) -> Result<RowBatch> {
        if source_id == self.down {
            return Err(Error::source_unavailable(source_id, "quota exceeded"));
        }
        self.inner.fetch(source_id)
    }
}

#[test]
fn reload_all_continues_past_failures() {
    let mut registry = LexiconRegistry::standard();
    let mut source = FlakySource {
        inner: seeded(),
        down: "thravelemeh_database".to_string(),
    };

    let report = registry.reload_all(&mut source);
    let failed: Vec<_> = report
        .iter()
        .filter(|(_, outcome)| outcome.is_err())
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(failed, vec!["thravelemeh"]);
    // Lexicons after the failure in registration order were still reloaded.
    assert!(!registry.get("xei").unwrap().is_stale());
    assert!(registry.get("thravelemeh").unwrap().is_stale());
}
