//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers. `navbar` sits
//! above every route; `protected_route` wraps role-gated pages.

pub mod navbar;
pub mod protected_route;
