use std::sync::Arc;

use super::*;
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStorage;

const ADMIN_ONLY: RouteAccessPolicy = RouteAccessPolicy::new(&[Role::Admin]);
const LOGISTICS: RouteAccessPolicy = RouteAccessPolicy::new(&[Role::LogisticsOfficer, Role::Admin]);

fn session(token: Option<&str>, role: Option<&str>) -> Session {
    Session {
        token: token.map(str::to_owned),
        role: role.map(RoleClaim::parse),
    }
}

// =============================================================
// Token check
// =============================================================

#[test]
fn missing_token_redirects_for_every_role_and_policy() {
    for policy in [ADMIN_ONLY, LOGISTICS] {
        for role in Role::ALL {
            let s = session(None, Some(role.as_str()));
            assert_eq!(policy.authorize(&s), Decision::RedirectToHome, "{role} on {policy:?}");
        }
        assert_eq!(policy.authorize(&session(None, None)), Decision::RedirectToHome);
    }
}

#[test]
fn empty_token_redirects_even_with_permitted_role() {
    assert_eq!(ADMIN_ONLY.authorize(&session(Some(""), Some("Admin"))), Decision::RedirectToHome);
}

// =============================================================
// Role check
// =============================================================

#[test]
fn role_outside_policy_redirects() {
    for role in Role::ALL.into_iter().filter(|r| !ADMIN_ONLY.permits(*r)) {
        let s = session(Some("tok"), Some(role.as_str()));
        assert_eq!(ADMIN_ONLY.authorize(&s), Decision::RedirectToHome, "{role}");
    }
}

#[test]
fn role_inside_policy_renders() {
    for policy in [ADMIN_ONLY, LOGISTICS] {
        for &role in policy.allowed_roles() {
            let s = session(Some("tok"), Some(role.as_str()));
            assert_eq!(policy.authorize(&s), Decision::Render, "{role} on {policy:?}");
        }
    }
}

#[test]
fn unrecognized_role_redirects() {
    let s = session(Some("tok"), Some("Quartermaster"));
    assert_eq!(LOGISTICS.authorize(&s), Decision::RedirectToHome);
}

#[test]
fn token_without_role_redirects() {
    assert_eq!(ADMIN_ONLY.authorize(&session(Some("tok"), None)), Decision::RedirectToHome);
}

#[test]
fn role_match_is_case_sensitive() {
    assert_eq!(ADMIN_ONLY.authorize(&session(Some("tok"), Some("admin"))), Decision::RedirectToHome);
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn admin_route_refuses_logistics_session() {
    let s = session(Some("abc"), Some("Logistics Officer"));
    assert_eq!(authorize(&[Role::Admin], &s), Decision::RedirectToHome);
}

#[test]
fn multi_role_route_admits_matching_session() {
    let s = session(Some("abc"), Some("Logistics Officer"));
    assert_eq!(authorize(&[Role::LogisticsOfficer, Role::Admin], &s), Decision::Render);
}

#[test]
fn logout_is_reflected_on_next_evaluation() {
    let store = SessionStore::new(Arc::new(MemoryStorage::new()));
    store.save_auth("abc", "Admin");
    assert_eq!(ADMIN_ONLY.authorize(&store.session()), Decision::Render);

    store.clear_auth();
    assert_eq!(ADMIN_ONLY.authorize(&store.session()), Decision::RedirectToHome);
}

#[test]
fn stored_role_without_token_redirects() {
    let backend = Arc::new(MemoryStorage::new());
    let store = SessionStore::new(backend.clone());
    crate::util::storage::StorageBackend::set_item(backend.as_ref(), "role", "Admin");
    assert_eq!(ADMIN_ONLY.authorize(&store.session()), Decision::RedirectToHome);
}

#[test]
fn policy_exposes_its_roles() {
    assert_eq!(LOGISTICS.allowed_roles(), &[Role::LogisticsOfficer, Role::Admin]);
    assert!(LOGISTICS.permits(Role::Admin));
    assert!(!LOGISTICS.permits(Role::BaseCommander));
}

#[test]
#[should_panic(expected = "route policy must allow at least one role")]
fn empty_policy_is_refused_at_runtime_too() {
    let roles: &'static [Role] = &[];
    RouteAccessPolicy::new(roles);
}
