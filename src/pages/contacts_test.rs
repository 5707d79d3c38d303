use super::*;

#[test]
fn draft_requires_a_name() {
    assert_eq!(build_contact_draft("", "a@b.org", "", ""), Err("Contact name is required."));
}

#[test]
fn blank_optional_fields_become_absent() {
    let draft = build_contact_draft("ACME Foundation", "  ", "", "  ").unwrap();
    assert_eq!(draft.email, None);
    assert_eq!(draft.phone, None);
    assert_eq!(draft.organization, None);
}

#[test]
fn populated_optional_fields_are_trimmed() {
    let draft = build_contact_draft("Jo", " jo@acme.org ", " 555-0100 ", " ACME ").unwrap();
    assert_eq!(draft.email.as_deref(), Some("jo@acme.org"));
    assert_eq!(draft.phone.as_deref(), Some("555-0100"));
    assert_eq!(draft.organization.as_deref(), Some("ACME"));
}
