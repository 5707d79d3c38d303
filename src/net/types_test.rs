use super::*;

// =============================================================
// Profile serde
// =============================================================

#[test]
fn profile_deserializes_from_backend_shape() {
    let json = r#"{
        "id": "u-1",
        "name": "Alice",
        "email": "alice@example.org",
        "role": "admin"
    }"#;
    let profile: Profile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.id, "u-1");
    assert_eq!(profile.role, "admin");
    assert!(profile.is_admin());
}

#[test]
fn profile_defaults_role_when_missing() {
    let json = r#"{"id": "u-2", "name": "Bob", "email": "bob@example.org"}"#;
    let profile: Profile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.role, "user");
    assert!(!profile.is_admin());
}

#[test]
fn profile_requires_email() {
    let json = r#"{"id": "u-3", "name": "Casey"}"#;
    assert!(serde_json::from_str::<Profile>(json).is_err());
}

// =============================================================
// Login payloads
// =============================================================

#[test]
fn login_request_serializes_both_fields() {
    let req = LoginRequest { email: "a@b.org".to_owned(), password: "secret".to_owned() };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({"email": "a@b.org", "password": "secret"}));
}

#[test]
fn login_response_defaults_role() {
    let json = r#"{"token": "tok-123"}"#;
    let resp: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.token, "tok-123");
    assert_eq!(resp.role, "user");
}

// =============================================================
// MoneyKind serde
// =============================================================

#[test]
fn money_kind_serializes_to_lowercase() {
    assert_eq!(serde_json::to_string(&MoneyKind::Income).unwrap(), "\"income\"");
    assert_eq!(serde_json::to_string(&MoneyKind::Expense).unwrap(), "\"expense\"");
}

#[test]
fn money_kind_rejects_uppercase() {
    assert!(serde_json::from_str::<MoneyKind>("\"Income\"").is_err());
}

#[test]
fn money_kind_labels() {
    assert_eq!(MoneyKind::Income.label(), "Income");
    assert_eq!(MoneyKind::Expense.label(), "Expense");
}

// =============================================================
// Drafts
// =============================================================

#[test]
fn user_draft_omits_absent_password() {
    let draft = UserDraft {
        name: "Alice".to_owned(),
        email: "alice@example.org".to_owned(),
        role: "user".to_owned(),
        password: None,
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert!(value.get("password").is_none());
}

#[test]
fn user_draft_includes_password_when_set() {
    let draft = UserDraft {
        name: "Alice".to_owned(),
        email: "alice@example.org".to_owned(),
        role: "user".to_owned(),
        password: Some("hunter2".to_owned()),
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["password"], "hunter2");
}

#[test]
fn project_defaults_description() {
    let json = r#"{
        "id": "p-1",
        "name": "Well construction",
        "status": "active",
        "start_date": "2026-01-15"
    }"#;
    let project: Project = serde_json::from_str(json).unwrap();
    assert_eq!(project.description, "");
    assert_eq!(project.start_date.as_deref(), Some("2026-01-15"));
}

#[test]
fn transaction_deserializes_with_null_category() {
    let json = r#"{
        "id": "t-1",
        "concept": "Donation",
        "amount": 250.5,
        "kind": "income",
        "category_id": null,
        "date": "2026-03-02"
    }"#;
    let tx: Transaction = serde_json::from_str(json).unwrap();
    assert_eq!(tx.kind, MoneyKind::Income);
    assert!(tx.category_id.is_none());
    assert!((tx.amount - 250.5).abs() < f64::EPSILON);
}
