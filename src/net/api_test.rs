use super::*;

// =============================================================
// Endpoint routing per principal kind
// =============================================================

#[test]
fn login_endpoints_are_kind_specific() {
    assert_eq!(login_endpoint(Role::Customer), "/api/auth/login");
    assert_eq!(login_endpoint(Role::Merchant), "/api/merchant/login");
    assert_eq!(login_endpoint(Role::Admin), "/api/admin/login");
}

#[test]
fn signup_endpoints_match_backend_routes() {
    assert_eq!(signup_endpoint(Role::Customer), "/api/auth/signup");
    // The merchant and admin signup routes are not under /api.
    assert_eq!(signup_endpoint(Role::Merchant), "/merchant/signup");
    assert_eq!(signup_endpoint(Role::Admin), "/admin/signup");
}

#[test]
fn base_url_defaults_to_local_backend() {
    assert!(base_url().starts_with("http"));
}

// =============================================================
// Authorization header
// =============================================================

#[test]
fn bearer_token_is_attached_when_present() {
    assert_eq!(auth_header(Some("tok-1")).as_deref(), Some("Bearer tok-1"));
}

#[test]
fn no_authorization_header_without_a_token() {
    assert_eq!(auth_header(None), None);
}

// =============================================================
// Request body shaping
// =============================================================

#[test]
fn credentials_serialize_to_expected_body() {
    let body = json_body(&Credentials {
        email: "a@x.com".to_owned(),
        password: "pw".to_owned(),
    })
    .expect("body");
    assert_eq!(body, serde_json::json!({"email":"a@x.com","password":"pw"}));
}

#[test]
fn checkout_request_carries_payment_method() {
    let body = json_body(&CheckoutRequest { payment_method: "wallet".to_owned() }).expect("body");
    assert_eq!(body, serde_json::json!({"payment_method":"wallet"}));
}
