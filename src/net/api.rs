//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with the bearer
//! credential attached. Server-side (SSR): stubs returning
//! `None`/`Unavailable` since these endpoints are only meaningful in the
//! browser.
//!
//! DESIGN
//! ======
//! The six entity collections share one wire shape (list/create/update/
//! delete/export), so the calls are generic over [`Resource`] instead of
//! being cloned per entity. Mutating requests carry a client-generated
//! `x-request-id` so backend logs can be correlated with user actions.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    Category, CategoryDraft, Contact, ContactDraft, LoginRequest, LoginResponse, Profile, Project, ProjectDraft,
    Transaction, TransactionDraft, User, UserDraft, Volunteer, VolunteerDraft,
};

/// A backend collection reachable at `/api/{COLLECTION}` with the standard
/// list/create/update/delete/export surface.
pub trait Resource: DeserializeOwned + 'static {
    /// Path segment of the collection.
    const COLLECTION: &'static str;
    /// Payload for create and update calls.
    type Draft: Serialize;
}

impl Resource for User {
    const COLLECTION: &'static str = "users";
    type Draft = UserDraft;
}

impl Resource for Project {
    const COLLECTION: &'static str = "projects";
    type Draft = ProjectDraft;
}

impl Resource for Contact {
    const COLLECTION: &'static str = "contacts";
    type Draft = ContactDraft;
}

impl Resource for Volunteer {
    const COLLECTION: &'static str = "volunteers";
    type Draft = VolunteerDraft;
}

impl Resource for Category {
    const COLLECTION: &'static str = "categories";
    type Draft = CategoryDraft;
}

impl Resource for Transaction {
    const COLLECTION: &'static str = "transactions";
    type Draft = TransactionDraft;
}

/// Output format for a table export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl ExportFormat {
    /// Path segment under `/export/`.
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "excel",
        }
    }

    /// MIME type of the exported payload.
    #[must_use]
    pub fn mime(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    /// File extension for the download name.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "xlsx",
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn collection_endpoint(collection: &str) -> String {
    format!("/api/{collection}")
}

#[cfg(any(test, feature = "hydrate"))]
fn item_endpoint(collection: &str, id: &str) -> String {
    format!("/api/{collection}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn export_endpoint(collection: &str, format: ExportFormat) -> String {
    format!("/api/{collection}/export/{}", format.path_segment())
}

/// Download name for an exported table, e.g. `transactions.xlsx`.
#[must_use]
pub fn export_filename(collection: &str, format: ExportFormat) -> String {
    format!("{collection}.{}", format.extension())
}

#[cfg(any(test, feature = "hydrate"))]
fn request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server rejects the
/// credentials, or the response cannot be decoded.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = "/api/auth/login";
        let resp = gloo_net::http::Request::post(path).json(request)?.send().await?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status(), path: path.to_owned() });
        }
        Ok(resp.json::<LoginResponse>().await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the authenticated profile from `/api/auth/me`.
/// Returns `None` on any failure — missing credential, rejection, network
/// trouble, malformed body — or on the server.
pub async fn fetch_profile(token: &str) -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Profile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Fetch the full collection for `T`.
///
/// # Errors
///
/// Returns an [`ApiError`] on missing credential, transport failure,
/// non-OK status, or an undecodable body.
pub async fn list_all<T: Resource>(token: Option<&str>) -> Result<Vec<T>, ApiError> {
    let token = token.ok_or(ApiError::MissingCredential)?;
    #[cfg(feature = "hydrate")]
    {
        let path = collection_endpoint(T::COLLECTION);
        let resp = gloo_net::http::Request::get(&path)
            .header("Authorization", &bearer(token))
            .send()
            .await?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status(), path });
        }
        Ok(resp.json::<Vec<T>>().await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Create a row in `T`'s collection and return the stored record.
///
/// # Errors
///
/// Returns an [`ApiError`] as for [`list_all`].
pub async fn create<T: Resource>(draft: &T::Draft, token: Option<&str>) -> Result<T, ApiError> {
    let token = token.ok_or(ApiError::MissingCredential)?;
    #[cfg(feature = "hydrate")]
    {
        let path = collection_endpoint(T::COLLECTION);
        let resp = gloo_net::http::Request::post(&path)
            .header("Authorization", &bearer(token))
            .header("x-request-id", &request_id())
            .json(draft)?
            .send()
            .await?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status(), path });
        }
        Ok(resp.json::<T>().await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (draft, token);
        Err(ApiError::Unavailable)
    }
}

/// Replace the row `id` in `T`'s collection and return the stored record.
///
/// # Errors
///
/// Returns an [`ApiError`] as for [`list_all`].
pub async fn update<T: Resource>(id: &str, draft: &T::Draft, token: Option<&str>) -> Result<T, ApiError> {
    let token = token.ok_or(ApiError::MissingCredential)?;
    #[cfg(feature = "hydrate")]
    {
        let path = item_endpoint(T::COLLECTION, id);
        let resp = gloo_net::http::Request::put(&path)
            .header("Authorization", &bearer(token))
            .header("x-request-id", &request_id())
            .json(draft)?
            .send()
            .await?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status(), path });
        }
        Ok(resp.json::<T>().await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft, token);
        Err(ApiError::Unavailable)
    }
}

/// Delete the row `id` from `T`'s collection.
///
/// # Errors
///
/// Returns an [`ApiError`] as for [`list_all`].
pub async fn remove<T: Resource>(id: &str, token: Option<&str>) -> Result<(), ApiError> {
    let token = token.ok_or(ApiError::MissingCredential)?;
    #[cfg(feature = "hydrate")]
    {
        let path = item_endpoint(T::COLLECTION, id);
        let resp = gloo_net::http::Request::delete(&path)
            .header("Authorization", &bearer(token))
            .header("x-request-id", &request_id())
            .send()
            .await?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status(), path });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, token);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the exported bytes of `T`'s collection in `format`.
///
/// # Errors
///
/// Returns an [`ApiError`] as for [`list_all`].
pub async fn export<T: Resource>(format: ExportFormat, token: Option<&str>) -> Result<Vec<u8>, ApiError> {
    let token = token.ok_or(ApiError::MissingCredential)?;
    #[cfg(feature = "hydrate")]
    {
        let path = export_endpoint(T::COLLECTION, format);
        let resp = gloo_net::http::Request::get(&path)
            .header("Authorization", &bearer(token))
            .send()
            .await?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status(), path });
        }
        Ok(resp.binary().await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (format, token);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
