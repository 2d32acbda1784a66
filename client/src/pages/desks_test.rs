use super::*;
use crate::components::protected_route::decide;
use crate::state::role::RoleClaim;
use crate::state::session::Session;
use crate::util::auth::Decision;

#[test]
fn every_desk_is_a_protected_route() {
    for desk in Desk::ALL {
        assert!(desk.route().policy().is_some(), "{desk:?}");
    }
}

#[test]
fn desk_links_are_reachable_by_every_admitted_role() {
    for desk in Desk::ALL {
        let policy = desk.route().policy().unwrap();
        for &role in policy.allowed_roles() {
            let session = Session { token: Some("tok".to_owned()), role: Some(RoleClaim::Known(role)) };
            for module in desk.modules() {
                if let Some(route) = module.route {
                    assert_eq!(decide(route, &session), Decision::Render, "{desk:?} -> {route:?} as {role}");
                }
            }
        }
    }
}

#[test]
fn admin_desk_links_all_record_pages() {
    let routes: Vec<_> = Desk::Admin.modules().iter().filter_map(|m| m.route).collect();
    assert_eq!(
        routes,
        vec![AppRoute::Purchases, AppRoute::Transfers, AppRoute::Assignments, AppRoute::Expenditures]
    );
}

#[test]
fn desks_have_modules_and_headings() {
    for desk in Desk::ALL {
        assert!(!desk.modules().is_empty(), "{desk:?}");
        assert!(!desk.heading().is_empty());
    }
}
