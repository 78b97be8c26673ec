//! Integration tests for the search engine's collapse and truncation policy.

use glossbank_lexicon::{
    ColumnLayout, LexemeCache, MemoryRowSource, SearchEngine, SearchOutcome,
};

fn cache_with(rows: Vec<Vec<String>>) -> (LexemeCache, MemoryRowSource) {
    let mut source = MemoryRowSource::new();
    source.set_rows("table", rows);
    (
        LexemeCache::new("test", "table", ColumnLayout::simple()),
        source,
    )
}

// =============================================================================
// The documented zasokese scenario
// =============================================================================

#[test]
fn zasokese_duplicate_scenario() {
    let (mut cache, mut source) = cache_with(vec![
        vec!["mo".into(), "water".into()],
        vec!["mo".into(), "lake".into()],
        vec!["lale".into(), "song".into()],
    ]);

    let result = SearchEngine::search(&mut cache, &mut source, "mo", None).unwrap();
    assert_eq!(result.matches.len(), 2);
    assert!(!result.matches[0].render_as_duplicate);
    assert!(result.matches[1].render_as_duplicate);

    let result = SearchEngine::search(&mut cache, &mut source, "la", None).unwrap();
    assert_eq!(result.matches.len(), 1);
    assert!(!result.matches[0].render_as_duplicate);
}

// =============================================================================
// Duplicate flag arithmetic
// =============================================================================

#[test]
fn n_matches_one_unflagged_n_minus_one_flagged() {
    for n in 2..6 {
        let rows = (0..n)
            .map(|i| vec!["tar".to_string(), format!("sense {i}")])
            .collect();
        let (mut cache, mut source) = cache_with(rows);
        let result = SearchEngine::search(&mut cache, &mut source, "tar", None).unwrap();

        let unflagged = result.matches.iter().filter(|m| !m.render_as_duplicate).count();
        let flagged = result.matches.iter().filter(|m| m.render_as_duplicate).count();
        assert_eq!(unflagged, 1, "n = {n}");
        assert_eq!(flagged, n - 1, "n = {n}");
    }
}

#[test]
fn flags_are_positional_within_the_match_list() {
    // The duplicate group's first *match* is unflagged, regardless of where
    // non-matching rows sit in the source.
    let (mut cache, mut source) = cache_with(vec![
        vec!["other".into(), "noise".into()],
        vec!["eki".into(), "one".into()],
        vec!["other".into(), "noise".into()],
        vec!["eki".into(), "two".into()],
    ]);
    let result = SearchEngine::search(&mut cache, &mut source, "eki", None).unwrap();
    assert_eq!(result.matches.len(), 2);
    assert!(!result.matches[0].render_as_duplicate);
    assert!(result.matches[1].render_as_duplicate);
}

// =============================================================================
// Truncation policy
// =============================================================================

#[test]
fn twenty_six_distinct_matches_truncate_to_nothing() {
    let rows = (0..26)
        .map(|i| vec![format!("entry{i:02}"), "gloss".to_string()])
        .collect();
    let (mut cache, mut source) = cache_with(rows);

    let result = SearchEngine::search(&mut cache, &mut source, "entry", None).unwrap();
    assert!(result.truncated);
    assert!(result.matches.is_empty());
    assert_eq!(result.raw_match_count(), 26);
    assert_eq!(result.outcome(), SearchOutcome::AllTruncated { discarded: 26 });
}

#[test]
fn truncation_survivors_are_whole_groups_in_order() {
    // 24 distinct + one triple = 27 raw matches.
    let mut rows: Vec<Vec<String>> = (0..24)
        .map(|i| vec![format!("entry{i:02}"), "gloss".to_string()])
        .collect();
    rows.insert(3, vec!["entryx".to_string(), "first".to_string()]);
    rows.insert(10, vec!["entryx".to_string(), "second".to_string()]);
    rows.push(vec!["entryx".to_string(), "third".to_string()]);

    let (mut cache, mut source) = cache_with(rows);
    let result = SearchEngine::search(&mut cache, &mut source, "entry", None).unwrap();

    assert!(result.truncated);
    assert_eq!(result.matches.len(), 3);
    assert!(result.matches.iter().all(|m| m.record.headword == "entryx"));
    // Flags cleared: no merging text is emitted post-truncation.
    assert!(result.matches.iter().all(|m| !m.render_as_duplicate));
    // Group members keep their relative order; their glosses prove it.
    let senses: Vec<_> = result
        .matches
        .iter()
        .map(|m| m.record.fields[0].value.as_str())
        .collect();
    assert_eq!(senses, vec!["first", "second", "third"]);
    assert_eq!(result.discarded(), 24);
}

#[test]
fn outcome_distinguishes_empty_from_truncated_empty() {
    let (mut cache, mut source) = cache_with(vec![vec!["mo".into(), "water".into()]]);
    let result = SearchEngine::search(&mut cache, &mut source, "absent", None).unwrap();
    assert_eq!(result.outcome(), SearchOutcome::NoMatches);
    assert_eq!(result.discarded(), 0);
}
