use super::*;

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn collection_endpoint_formats_expected_path() {
    assert_eq!(collection_endpoint("users"), "/api/users");
}

#[test]
fn item_endpoint_formats_expected_path() {
    assert_eq!(item_endpoint("projects", "p-42"), "/api/projects/p-42");
}

#[test]
fn export_endpoint_formats_pdf_and_excel_paths() {
    assert_eq!(export_endpoint("transactions", ExportFormat::Pdf), "/api/transactions/export/pdf");
    assert_eq!(export_endpoint("transactions", ExportFormat::Excel), "/api/transactions/export/excel");
}

// =============================================================
// Resource collections
// =============================================================

#[test]
fn resource_collections_match_backend_routes() {
    assert_eq!(User::COLLECTION, "users");
    assert_eq!(Project::COLLECTION, "projects");
    assert_eq!(Contact::COLLECTION, "contacts");
    assert_eq!(Volunteer::COLLECTION, "volunteers");
    assert_eq!(Category::COLLECTION, "categories");
    assert_eq!(Transaction::COLLECTION, "transactions");
}

// =============================================================
// Export format
// =============================================================

#[test]
fn export_filename_uses_format_extension() {
    assert_eq!(export_filename("contacts", ExportFormat::Pdf), "contacts.pdf");
    assert_eq!(export_filename("contacts", ExportFormat::Excel), "contacts.xlsx");
}

#[test]
fn export_mime_types() {
    assert_eq!(ExportFormat::Pdf.mime(), "application/pdf");
    assert_eq!(
        ExportFormat::Excel.mime(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
}

// =============================================================
// Request correlation
// =============================================================

#[test]
fn request_ids_are_valid_uuids_and_unique() {
    let a = request_id();
    let b = request_id();
    assert!(uuid::Uuid::parse_str(&a).is_ok());
    assert_ne!(a, b);
}

// =============================================================
// Credential requirement
// =============================================================

#[test]
fn list_without_token_fails_before_any_request() {
    let err = futures::executor::block_on(list_all::<User>(None)).unwrap_err();
    assert!(matches!(err, ApiError::MissingCredential));
}

#[test]
fn export_without_token_fails_before_any_request() {
    let err = futures::executor::block_on(export::<Transaction>(ExportFormat::Pdf, None)).unwrap_err();
    assert!(matches!(err, ApiError::MissingCredential));
}
