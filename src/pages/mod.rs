//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, list fetch, dialog
//! state, API calls) and delegates shared rendering details to
//! `components`.

pub mod categories;
pub mod contacts;
pub mod login;
pub mod overview;
pub mod projects;
pub mod transactions;
pub mod users;
pub mod volunteers;

use leptos::prelude::*;

use crate::net::api::Resource;
use crate::session::{SessionContext, SessionMonitor};

/// List resource for an entity collection, fetching with the stored
/// credential on mount and on every `refetch()` after a mutation.
pub(crate) fn entity_resource<T>(monitor: SessionContext) -> LocalResource<Result<Vec<T>, String>>
where
    T: Resource + Clone,
{
    LocalResource::new(move || async move {
        let token = monitor.with_value(SessionMonitor::token);
        crate::net::api::list_all::<T>(token.as_deref())
            .await
            .map_err(|e| e.to_string())
    })
}
