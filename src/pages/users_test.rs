use super::*;

#[test]
fn draft_requires_name_and_email() {
    assert_eq!(build_user_draft("", "a@b.org", "user", "pw", true), Err("Name and email are required."));
    assert_eq!(build_user_draft("Alice", "  ", "user", "pw", true), Err("Name and email are required."));
}

#[test]
fn new_accounts_require_a_password() {
    assert_eq!(
        build_user_draft("Alice", "alice@example.org", "user", "  ", true),
        Err("Password is required for new accounts.")
    );
}

#[test]
fn edit_without_password_keeps_the_existing_one() {
    let draft = build_user_draft("Alice", "alice@example.org", "admin", "", false).unwrap();
    assert_eq!(draft.password, None);
    assert_eq!(draft.role, "admin");
}

#[test]
fn inputs_are_trimmed() {
    let draft = build_user_draft("  Alice  ", " alice@example.org ", "user", " pw123 ", true).unwrap();
    assert_eq!(draft.name, "Alice");
    assert_eq!(draft.email, "alice@example.org");
    assert_eq!(draft.password.as_deref(), Some("pw123"));
}
