use super::*;

// =============================================================
// Role parsing
// =============================================================

#[test]
fn role_parse_accepts_closed_set() {
    assert_eq!(Role::parse("customer"), Some(Role::Customer));
    assert_eq!(Role::parse("merchant"), Some(Role::Merchant));
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
}

#[test]
fn role_parse_accepts_legacy_user_label() {
    assert_eq!(Role::parse("user"), Some(Role::Customer));
}

#[test]
fn role_parse_rejects_unknown_labels() {
    assert_eq!(Role::parse(""), None);
    assert_eq!(Role::parse("superadmin"), None);
    assert_eq!(Role::parse("Admin"), None);
}

#[test]
fn role_round_trips_through_as_str() {
    for role in [Role::Customer, Role::Merchant, Role::Admin] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

// =============================================================
// Home and login paths
// =============================================================

#[test]
fn each_role_has_one_home_path() {
    assert_eq!(Role::Customer.home_path(), "/");
    assert_eq!(Role::Merchant.home_path(), "/merchant");
    assert_eq!(Role::Admin.home_path(), "/admin");
}

#[test]
fn login_paths_follow_role_namespace() {
    assert_eq!(Role::Customer.login_path(), "/login");
    assert_eq!(Role::Merchant.login_path(), "/merchant/login");
    assert_eq!(Role::Admin.login_path(), "/admin/login");
}
