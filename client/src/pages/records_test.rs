use super::*;
use crate::state::role::Role;

#[test]
fn record_pages_map_to_admin_only_routes() {
    for kind in [
        RecordKind::Purchases,
        RecordKind::Transfers,
        RecordKind::Assignments,
        RecordKind::Expenditures,
    ] {
        let policy = kind.route().policy().unwrap();
        assert_eq!(policy.allowed_roles(), &[Role::Admin], "{kind:?}");
        assert!(kind.route().path().ends_with(&kind.title().to_ascii_lowercase()));
    }
}
