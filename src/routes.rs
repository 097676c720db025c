//! Route access rules and the navigation guard.
//!
//! The rule table is static; the guard is a pure, total function over
//! `(session role, path)` and is re-evaluated on every navigation rather
//! than cached, since the session can change between navigations.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::Role;

/// Access declaration for one navigable path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRule {
    /// Reachable with no session at all.
    pub public: bool,
    /// `None` = any authenticated session; a set = only those roles.
    pub roles: Option<&'static [Role]>,
}

impl RouteRule {
    const fn public() -> Self {
        Self { public: true, roles: None }
    }

    const fn authenticated() -> Self {
        Self { public: false, roles: None }
    }

    const fn only(roles: &'static [Role]) -> Self {
        Self { public: false, roles: Some(roles) }
    }
}

/// Guard verdict for a navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    RedirectTo(&'static str),
}

/// Look up the rule for a path. Total: unknown paths fall through to the
/// public not-found view.
pub fn rule_for(path: &str) -> RouteRule {
    let mut segments = path.trim_start_matches('/').splitn(2, '/');
    let head = segments.next().unwrap_or("");
    let rest = segments.next().unwrap_or("");

    match head {
        "login" | "signup" => RouteRule::public(),
        "admin" => match rest {
            "login" | "signup" => RouteRule::public(),
            _ => RouteRule::only(&[Role::Admin]),
        },
        "merchant" => match rest {
            "login" | "signup" => RouteRule::public(),
            _ => RouteRule::only(&[Role::Merchant]),
        },
        "" | "product" => RouteRule::authenticated(),
        "cart" | "checkout" | "orders" | "wallet" => RouteRule::only(&[Role::Customer]),
        _ => RouteRule::public(),
    }
}

/// The login page serving the attempted path's namespace. Denied admin
/// paths go to the admin login, merchant paths to the merchant login,
/// everything else to the general login.
pub fn login_path_for(path: &str) -> &'static str {
    if path == "/admin" || path.starts_with("/admin/") {
        Role::Admin.login_path()
    } else if path == "/merchant" || path.starts_with("/merchant/") {
        Role::Merchant.login_path()
    } else {
        Role::Customer.login_path()
    }
}

/// Decide whether a navigation target is reachable for the given session.
///
/// Denial never dead-ends: an anonymous visitor is sent to the login page
/// of the path's namespace, a mismatched role to its own home path.
pub fn can_access(role: Option<Role>, path: &str) -> Access {
    let rule = rule_for(path);
    match role {
        None => {
            if rule.public {
                Access::Allow
            } else {
                Access::RedirectTo(login_path_for(path))
            }
        }
        Some(role) => match rule.roles {
            Some(allowed) if !allowed.contains(&role) => Access::RedirectTo(role.home_path()),
            _ => Access::Allow,
        },
    }
}
