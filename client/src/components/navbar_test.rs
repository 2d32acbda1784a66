use super::*;
use crate::state::role::RoleClaim;
use crate::state::session::Session;

fn loaded(token: Option<&str>, role: Option<&str>) -> AuthState {
    AuthState {
        session: Session { token: token.map(str::to_owned), role: role.map(RoleClaim::parse) },
        loading: false,
    }
}

#[test]
fn panel_link_per_role() {
    assert_eq!(
        panel_link(&loaded(Some("t"), Some("Admin"))),
        Some(PanelLink { route: AppRoute::Admin, label: "Admin Panel" })
    );
    assert_eq!(
        panel_link(&loaded(Some("t"), Some("Logistics Officer"))),
        Some(PanelLink { route: AppRoute::Logistics, label: "Logistics Panel" })
    );
    assert_eq!(
        panel_link(&loaded(Some("t"), Some("Base Commander"))),
        Some(PanelLink { route: AppRoute::Commander, label: "Base Commander" })
    );
}

#[test]
fn panel_link_hidden_for_unknown_or_missing_role() {
    assert_eq!(panel_link(&loaded(Some("t"), Some("Auditor"))), None);
    assert_eq!(panel_link(&loaded(Some("t"), None)), None);
}

#[test]
fn panel_link_hidden_when_anonymous_or_loading() {
    assert_eq!(panel_link(&loaded(None, None)), None);
    let mut state = loaded(Some("t"), Some("Admin"));
    state.loading = true;
    assert_eq!(panel_link(&state), None);
}

#[test]
fn auth_controls_follow_session() {
    assert_eq!(auth_controls(&AuthState::default()), None);
    assert_eq!(auth_controls(&loaded(None, None)), Some(AuthControls::Guest));
    assert_eq!(auth_controls(&loaded(Some("t"), Some("Admin"))), Some(AuthControls::Logout));
    assert_eq!(auth_controls(&loaded(Some("t"), None)), Some(AuthControls::Logout));
}
