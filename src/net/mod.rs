//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP calls, `error` classifies their failures, and `types`
//! defines the wire schema shared with the backend.

pub mod api;
pub mod error;
pub mod types;
