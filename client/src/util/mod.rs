//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` isolates browser persistence behind a trait; `auth` holds the
//! pure route-guard decision so it can be tested without a browser.

pub mod auth;
pub mod storage;
