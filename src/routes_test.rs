use super::*;

const ALL_PATHS: &[&str] = &[
    "/",
    "/login",
    "/signup",
    "/merchant/login",
    "/merchant/signup",
    "/admin/login",
    "/admin/signup",
    "/product/12",
    "/cart",
    "/checkout",
    "/orders",
    "/orders/9",
    "/wallet",
    "/merchant",
    "/admin",
    "/no-such-page",
];

const ALL_ROLES: &[Option<Role>] = &[
    None,
    Some(Role::Customer),
    Some(Role::Merchant),
    Some(Role::Admin),
];

// =============================================================
// Rule table
// =============================================================

#[test]
fn auth_pages_are_public() {
    for path in ["/login", "/signup", "/merchant/login", "/merchant/signup", "/admin/login", "/admin/signup"] {
        assert!(rule_for(path).public, "{path} should be public");
    }
}

#[test]
fn catalog_requires_any_session() {
    for path in ["/", "/product/3"] {
        let rule = rule_for(path);
        assert!(!rule.public);
        assert!(rule.roles.is_none());
    }
}

#[test]
fn customer_paths_require_customer_role() {
    for path in ["/cart", "/checkout", "/orders", "/orders/1", "/wallet"] {
        assert_eq!(rule_for(path).roles, Some(&[Role::Customer][..]), "{path}");
    }
}

#[test]
fn dashboards_require_their_role() {
    assert_eq!(rule_for("/merchant").roles, Some(&[Role::Merchant][..]));
    assert_eq!(rule_for("/admin").roles, Some(&[Role::Admin][..]));
}

// =============================================================
// Guard policy
// =============================================================

#[test]
fn anonymous_admin_path_redirects_to_admin_login() {
    assert_eq!(can_access(None, "/admin"), Access::RedirectTo("/admin/login"));
}

#[test]
fn anonymous_merchant_path_redirects_to_merchant_login() {
    assert_eq!(can_access(None, "/merchant"), Access::RedirectTo("/merchant/login"));
}

#[test]
fn anonymous_customer_path_redirects_to_general_login() {
    assert_eq!(can_access(None, "/cart"), Access::RedirectTo("/login"));
    assert_eq!(can_access(None, "/"), Access::RedirectTo("/login"));
}

#[test]
fn customer_on_admin_path_goes_home_not_to_admin_login() {
    assert_eq!(can_access(Some(Role::Customer), "/admin"), Access::RedirectTo("/"));
}

#[test]
fn merchant_on_customer_path_goes_to_merchant_home() {
    assert_eq!(can_access(Some(Role::Merchant), "/cart"), Access::RedirectTo("/merchant"));
}

#[test]
fn admin_reaches_admin_dashboard() {
    assert_eq!(can_access(Some(Role::Admin), "/admin"), Access::Allow);
}

#[test]
fn any_session_reaches_catalog() {
    for role in [Role::Customer, Role::Merchant, Role::Admin] {
        assert_eq!(can_access(Some(role), "/"), Access::Allow);
        assert_eq!(can_access(Some(role), "/product/5"), Access::Allow);
    }
}

#[test]
fn public_pages_allow_everyone() {
    for role in ALL_ROLES {
        assert_eq!(can_access(*role, "/login"), Access::Allow);
        assert_eq!(can_access(*role, "/admin/signup"), Access::Allow);
    }
}

// =============================================================
// Totality and loop freedom
// =============================================================

#[test]
fn guard_is_total_and_redirects_terminate() {
    for path in ALL_PATHS {
        for role in ALL_ROLES {
            match can_access(*role, path) {
                Access::Allow => {}
                Access::RedirectTo(target) => {
                    // The redirect target must itself be reachable for
                    // the same session, so denial never loops.
                    assert_eq!(
                        can_access(*role, target),
                        Access::Allow,
                        "redirect loop: {role:?} {path} -> {target}"
                    );
                }
            }
        }
    }
}
