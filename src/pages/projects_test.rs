use super::*;

#[test]
fn draft_requires_a_name() {
    assert_eq!(build_project_draft("  ", "desc", "active", ""), Err("Project name is required."));
}

#[test]
fn empty_start_date_means_unscheduled() {
    let draft = build_project_draft("Well", "", "active", "  ").unwrap();
    assert_eq!(draft.start_date, None);
}

#[test]
fn populated_draft_keeps_all_fields() {
    let draft = build_project_draft(" Well ", " New water well ", "paused", "2026-02-01").unwrap();
    assert_eq!(draft.name, "Well");
    assert_eq!(draft.description, "New water well");
    assert_eq!(draft.status, "paused");
    assert_eq!(draft.start_date.as_deref(), Some("2026-02-01"));
}

#[test]
fn status_options_cover_the_project_lifecycle() {
    assert_eq!(STATUS_OPTIONS, ["active", "paused", "finished"]);
}
