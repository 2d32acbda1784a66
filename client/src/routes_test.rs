use super::*;
use crate::state::session::Session;
use crate::util::auth::Decision;

fn signed_in(role: Role) -> Session {
    Session { token: Some("tok".to_owned()), role: Some(RoleClaim::Known(role)) }
}

#[test]
fn paths_are_unique_and_rooted() {
    let mut seen = std::collections::HashSet::new();
    for route in AppRoute::ALL {
        assert!(route.path().starts_with('/'), "{route:?}");
        assert!(seen.insert(route.path()), "duplicate path for {route:?}");
    }
}

#[test]
fn public_routes_have_no_policy() {
    for route in [AppRoute::Home, AppRoute::Login, AppRoute::Register, AppRoute::Dashboard] {
        assert_eq!(route.policy(), None, "{route:?}");
    }
}

#[test]
fn admin_data_pages_are_admin_only() {
    for route in [
        AppRoute::Admin,
        AppRoute::Purchases,
        AppRoute::Transfers,
        AppRoute::Assignments,
        AppRoute::Expenditures,
    ] {
        let policy = route.policy().unwrap();
        assert_eq!(policy.allowed_roles(), &[Role::Admin], "{route:?}");
    }
}

#[test]
fn desk_routes_admit_their_role_and_admin() {
    let logistics = AppRoute::Logistics.policy().unwrap();
    assert_eq!(logistics.authorize(&signed_in(Role::LogisticsOfficer)), Decision::Render);
    assert_eq!(logistics.authorize(&signed_in(Role::Admin)), Decision::Render);
    assert_eq!(logistics.authorize(&signed_in(Role::BaseCommander)), Decision::RedirectToHome);

    let commander = AppRoute::Commander.policy().unwrap();
    assert_eq!(commander.authorize(&signed_in(Role::BaseCommander)), Decision::Render);
    assert_eq!(commander.authorize(&signed_in(Role::Admin)), Decision::Render);
    assert_eq!(commander.authorize(&signed_in(Role::LogisticsOfficer)), Decision::RedirectToHome);
}

#[test]
fn landing_route_follows_role() {
    assert_eq!(AppRoute::landing_for(&RoleClaim::Known(Role::Admin)), AppRoute::Admin);
    assert_eq!(AppRoute::landing_for(&RoleClaim::Known(Role::BaseCommander)), AppRoute::Commander);
    assert_eq!(AppRoute::landing_for(&RoleClaim::Known(Role::LogisticsOfficer)), AppRoute::Logistics);
    assert_eq!(AppRoute::landing_for(&RoleClaim::parse("Quartermaster")), AppRoute::Logistics);
}

#[test]
fn every_role_can_reach_its_landing_route() {
    for role in Role::ALL {
        let landing = AppRoute::landing_for(&RoleClaim::Known(role));
        let policy = landing.policy().unwrap();
        assert_eq!(policy.authorize(&signed_in(role)), Decision::Render, "{role}");
        assert_eq!(AppRoute::panel_for(role), landing);
    }
}
