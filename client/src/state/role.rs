//! Role vocabulary shared by the session store, route guard, and navbar.
//!
//! DESIGN
//! ======
//! The backend speaks free-form role strings. They are parsed into a closed
//! `Role` enum at the edge so guard decisions match exhaustively, while
//! `RoleClaim::Unrecognized` keeps unknown strings representable.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A role the backend can grant to a user account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Admin")]
    Admin,
    #[serde(rename = "Base Commander")]
    BaseCommander,
    #[serde(rename = "Logistics Officer")]
    LogisticsOfficer,
}

impl Role {
    /// Every known role, in registration-form order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::BaseCommander, Role::LogisticsOfficer];

    /// Wire and storage spelling of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::BaseCommander => "Base Commander",
            Role::LogisticsOfficer => "Logistics Officer",
        }
    }

    /// Exact, case-sensitive lookup by wire spelling.
    pub fn from_name(raw: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == raw)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of the known roles.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Role::from_name(raw).ok_or_else(|| UnknownRole(raw.to_owned()))
    }
}

/// The role half of a session as read back from storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleClaim {
    Known(Role),
    /// A non-empty role string that is not one of the known roles.
    Unrecognized(String),
}

impl RoleClaim {
    /// Parse a stored role string. Matching is exact, including case.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<Role>() {
            Ok(role) => RoleClaim::Known(role),
            Err(UnknownRole(raw)) => RoleClaim::Unrecognized(raw),
        }
    }

    pub fn known(&self) -> Option<Role> {
        match self {
            RoleClaim::Known(role) => Some(*role),
            RoleClaim::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RoleClaim::Known(role) => role.as_str(),
            RoleClaim::Unrecognized(raw) => raw,
        }
    }
}

impl From<Role> for RoleClaim {
    fn from(role: Role) -> Self {
        RoleClaim::Known(role)
    }
}
