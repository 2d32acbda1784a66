//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns persisted identity, `role` its vocabulary, and `auth` the
//! reactive view of it that components subscribe to.

pub mod auth;
pub mod role;
pub mod session;
