use super::*;

#[test]
fn empty_query_matches_everything() {
    assert!(row_matches(&["Alice", "alice@example.org"], ""));
    assert!(row_matches(&[], ""));
    assert!(row_matches(&["anything"], "   "));
}

#[test]
fn match_is_case_insensitive() {
    assert!(row_matches(&["Alice Cooper"], "alice"));
    assert!(row_matches(&["alice cooper"], "COOPER"));
}

#[test]
fn query_can_match_any_field() {
    assert!(row_matches(&["Alice", "treasurer"], "treas"));
    assert!(!row_matches(&["Alice", "treasurer"], "volunteer"));
}

#[test]
fn no_fields_never_matches_a_real_query() {
    assert!(!row_matches(&[], "alice"));
}
