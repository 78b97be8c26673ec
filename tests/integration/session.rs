//! A full lookup session driven through the registry, the way a chat
//! frontend would: seed sheets, query several lexicons, reload, query again.

use glossbank_lexicon::{LexiconRegistry, MemoryRowSource, SearchOutcome};
use glossbank_phonology::{SubstitutionTable, lumiere_numeral};

fn seeded() -> MemoryRowSource {
    let mut source = MemoryRowSource::new();
    source.set_rows(
        "zasokese_database",
        vec![
            vec!["mo".into(), "n.".into(), "water".into(), "mo lale".into()],
            vec!["mo".into(), "n.".into(), "lake".into(), String::new()],
            vec!["lale".into(), "n.".into(), "song".into(), String::new()],
            vec!["zakose".into(), "n.".into(), "language".into(), String::new()],
        ],
    );
    source.set_rows(
        "thravelemeh_database",
        vec![vec!["harn".into(), "v.".into(), "to sing".into()]],
    );
    source.set_rows("felinkia_database", Vec::new());
    source.set_rows("semal_database", Vec::new());
    source.set_rows("xei_database", Vec::new());
    source.set_rows("4351_database", Vec::new());
    source
}

#[test]
fn lookup_session_with_duplicates_dialects_and_reload() {
    let mut registry = LexiconRegistry::standard();
    let mut source = seeded();

    // A homograph query collapses its duplicates.
    let result = registry.search(&mut source, "zasokese", "mo").unwrap();
    assert_eq!(result.outcome(), SearchOutcome::Hits);
    assert_eq!(result.matches.len(), 2);
    assert_eq!(
        result
            .matches
            .iter()
            .filter(|m| m.render_as_duplicate)
            .count(),
        1
    );

    // The dialect view answers from the same sheet in derived spelling.
    let result = registry
        .search(&mut source, "simetasispika", "zakose")
        .unwrap();
    assert_eq!(result.matches[0].record.headword, "sacose");

    // An upstream edit is invisible until the user reloads.
    source.push_row(
        "zasokese_database",
        vec!["nev".into(), "adj.".into(), "new".into(), String::new()],
    );
    let before = registry.search(&mut source, "zasokese", "nev").unwrap();
    assert_eq!(before.outcome(), SearchOutcome::NoMatches);

    registry.reload(&mut source, "zasokese").unwrap();
    let after = registry.search(&mut source, "zasokese", "nev").unwrap();
    assert_eq!(after.matches.len(), 1);

    // The dialect view caches independently and still serves its old
    // snapshot until its own reload.
    let stale = registry.search(&mut source, "simetasispika", "nev").unwrap();
    assert_eq!(stale.outcome(), SearchOutcome::NoMatches);
}

#[test]
fn broad_queries_truncate_instead_of_flooding() {
    let mut registry = LexiconRegistry::standard();
    let mut source = seeded();
    let rows = (0..30)
        .map(|i| {
            vec![
                format!("harn{i:02}"),
                "v.".into(),
                "to sing".into(),
            ]
        })
        .collect();
    source.set_rows("thravelemeh_database", rows);

    let result = registry.search(&mut source, "thravelemeh", "harn").unwrap();
    assert_eq!(result.outcome(), SearchOutcome::AllTruncated { discarded: 30 });
    assert!(result.matches.is_empty());
}

#[test]
fn display_helpers_complement_the_lookup() {
    // Numbers and diacritic shorthand render alongside dictionary answers.
    assert_eq!(lumiere_numeral(20), "niza");

    let diacritics = SubstitutionTable::diacritic();
    assert_eq!(diacritics.apply("aa"), "ā");
    assert_eq!(diacritics.apply("n~a"), "ña");
}
