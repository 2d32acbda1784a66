//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Role-gated pages do not check
//! access themselves; `app.rs` wraps them in `ProtectedRoute`.

pub mod dashboard;
pub mod desks;
pub mod home;
pub mod login;
pub mod records;
pub mod register;
