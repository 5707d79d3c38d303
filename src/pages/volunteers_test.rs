use super::*;

fn project(id: &str, name: &str) -> Project {
    Project {
        id: id.to_owned(),
        name: name.to_owned(),
        description: String::new(),
        status: "active".to_owned(),
        start_date: None,
    }
}

// =============================================================
// Draft validation
// =============================================================

#[test]
fn draft_requires_a_name() {
    assert_eq!(build_volunteer_draft("  ", "", "", ""), Err("Volunteer name is required."));
}

#[test]
fn empty_project_select_means_unassigned() {
    let draft = build_volunteer_draft("Sam", "", "", "").unwrap();
    assert_eq!(draft.project_id, None);
}

#[test]
fn selected_project_is_kept() {
    let draft = build_volunteer_draft("Sam", "sam@example.org", "555-0101", "p-1").unwrap();
    assert_eq!(draft.project_id.as_deref(), Some("p-1"));
    assert_eq!(draft.email.as_deref(), Some("sam@example.org"));
}

// =============================================================
// Project name lookup
// =============================================================

#[test]
fn assigned_project_resolves_to_its_name() {
    let projects = vec![project("p-1", "Well"), project("p-2", "School")];
    assert_eq!(project_name(&projects, Some("p-2")), "School");
}

#[test]
fn unassigned_and_unknown_projects_render_a_dash() {
    let projects = vec![project("p-1", "Well")];
    assert_eq!(project_name(&projects, None), "—");
    assert_eq!(project_name(&projects, Some("p-9")), "—");
}
