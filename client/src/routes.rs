//! Route table: paths, access policies, and post-login landing.
//!
//! Policies are static configuration. They are looked up again on every
//! guard evaluation and never persisted.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::role::{Role, RoleClaim};
use crate::util::auth::RouteAccessPolicy;

const ADMIN_ONLY: RouteAccessPolicy = RouteAccessPolicy::new(&[Role::Admin]);
const LOGISTICS_DESK: RouteAccessPolicy = RouteAccessPolicy::new(&[Role::LogisticsOfficer, Role::Admin]);
const COMMAND_DESK: RouteAccessPolicy = RouteAccessPolicy::new(&[Role::BaseCommander, Role::Admin]);

/// Every route the router declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Login,
    Register,
    Dashboard,
    Logistics,
    Commander,
    Admin,
    Purchases,
    Transfers,
    Assignments,
    Expenditures,
}

impl AppRoute {
    pub const ALL: [AppRoute; 11] = [
        AppRoute::Home,
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::Dashboard,
        AppRoute::Logistics,
        AppRoute::Commander,
        AppRoute::Admin,
        AppRoute::Purchases,
        AppRoute::Transfers,
        AppRoute::Assignments,
        AppRoute::Expenditures,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Login => "/login",
            AppRoute::Register => "/register",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Logistics => "/logistics",
            AppRoute::Commander => "/commander",
            AppRoute::Admin => "/admin",
            AppRoute::Purchases => "/purchases",
            AppRoute::Transfers => "/transfers",
            AppRoute::Assignments => "/assignments",
            AppRoute::Expenditures => "/expenditures",
        }
    }

    /// Access rule for protected routes; `None` for public ones.
    pub fn policy(self) -> Option<RouteAccessPolicy> {
        match self {
            AppRoute::Home | AppRoute::Login | AppRoute::Register | AppRoute::Dashboard => None,
            AppRoute::Logistics => Some(LOGISTICS_DESK),
            AppRoute::Commander => Some(COMMAND_DESK),
            AppRoute::Admin
            | AppRoute::Purchases
            | AppRoute::Transfers
            | AppRoute::Assignments
            | AppRoute::Expenditures => Some(ADMIN_ONLY),
        }
    }

    /// Where a freshly logged-in user is sent.
    ///
    /// Unrecognized roles fall through to the logistics desk, where the guard
    /// refuses them like any other unauthorized session.
    pub fn landing_for(role: &RoleClaim) -> AppRoute {
        match role.known() {
            Some(Role::Admin) => AppRoute::Admin,
            Some(Role::BaseCommander) => AppRoute::Commander,
            Some(Role::LogisticsOfficer) | None => AppRoute::Logistics,
        }
    }

    /// The dashboard a role's navbar button points at.
    pub fn panel_for(role: Role) -> AppRoute {
        match role {
            Role::Admin => AppRoute::Admin,
            Role::BaseCommander => AppRoute::Commander,
            Role::LogisticsOfficer => AppRoute::Logistics,
        }
    }
}
