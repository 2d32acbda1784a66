//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the JSON bodies, and
//! `error` the failure taxonomy pages turn into user-facing text.

pub mod api;
pub mod error;
pub mod types;
