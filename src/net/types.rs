//! Wire DTOs for the client/backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads one-to-one so serde does
//! all the shaping and screens never touch raw `serde_json::Value`. Dates
//! travel as ISO 8601 strings; the backend owns their canonical form.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user's identity record from `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Access role (`"admin"` unlocks user management).
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_owned()
}

impl Profile {
    /// Whether this profile may manage other user accounts.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Credentials payload for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Bearer token issued on successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer credential to present on subsequent requests.
    pub token: String,
    /// Role echoed by the backend for client-side gating.
    #[serde(default = "default_role")]
    pub role: String,
}

/// A managed user account row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Draft payload for creating or updating a user account.
///
/// `password` is optional on update; the backend keeps the existing one
/// when it is absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// An organization project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Lifecycle status (e.g. `"active"`, `"finished"`).
    pub status: String,
    /// ISO 8601 start date, if scheduled.
    pub start_date: Option<String>,
}

/// Draft payload for creating or updating a project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub status: String,
    pub start_date: Option<String>,
}

/// An external contact (donor, partner, supplier).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
}

/// Draft payload for creating or updating a contact.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
}

/// A registered volunteer, optionally assigned to a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Project this volunteer is assigned to, if any.
    pub project_id: Option<String>,
}

/// Draft payload for creating or updating a volunteer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerDraft {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub project_id: Option<String>,
}

/// Direction of money movement for categories and transactions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoneyKind {
    #[default]
    Income,
    Expense,
}

impl MoneyKind {
    /// Display label for tables and select options.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

/// A transaction category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub kind: MoneyKind,
}

/// Draft payload for creating or updating a category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub kind: MoneyKind,
}

/// A financial transaction row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Short human description of the movement.
    pub concept: String,
    /// Absolute amount; `kind` carries the sign.
    pub amount: f64,
    pub kind: MoneyKind,
    pub category_id: Option<String>,
    /// ISO 8601 date of the movement.
    pub date: String,
}

/// Draft payload for creating or updating a transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub concept: String,
    pub amount: f64,
    pub kind: MoneyKind,
    pub category_id: Option<String>,
    pub date: String,
}
