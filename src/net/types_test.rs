use super::*;

// =============================================================
// AuthPayload -> Session
// =============================================================

#[test]
fn admin_session_role_comes_from_endpoint_kind_not_payload() {
    let payload: AuthPayload = serde_json::from_str(
        r#"{"access_token":"t","user_id":1,"email":"a@x.com","name":"A","role":"user"}"#,
    )
    .expect("payload");
    let session = payload.into_session(Role::Admin);
    assert_eq!(session.role, Role::Admin);
}

#[test]
fn admin_session_with_missing_role_field() {
    let payload: AuthPayload =
        serde_json::from_str(r#"{"access_token":"t","user_id":"u-1"}"#).expect("payload");
    let session = payload.into_session(Role::Admin);
    assert_eq!(session.role, Role::Admin);
    assert!(session.extras.is_none());
}

#[test]
fn customer_session_carries_wallet_extras() {
    let payload: AuthPayload = serde_json::from_str(
        r#"{"access_token":"t","user_id":3,"email":"c@x.com","name":"C",
            "account":{"account_id":77,"balance":42.5}}"#,
    )
    .expect("payload");
    let session = payload.into_session(Role::Customer);
    match session.extras {
        Some(crate::state::session::SessionExtras::Wallet(w)) => {
            assert_eq!(w.account_id.as_deref(), Some("77"));
            assert_eq!(w.balance, 42.5);
        }
        other => panic!("expected wallet extras, got {other:?}"),
    }
}

#[test]
fn merchant_session_carries_business_extras() {
    let payload: AuthPayload = serde_json::from_str(
        r#"{"access_token":"t","user_id":"m-1","business_name":"Shop","business_category":"toys"}"#,
    )
    .expect("payload");
    let session = payload.into_session(Role::Merchant);
    match session.extras {
        Some(crate::state::session::SessionExtras::Business(b)) => {
            assert_eq!(b.business_name, "Shop");
            assert_eq!(b.business_category.as_deref(), Some("toys"));
        }
        other => panic!("expected business extras, got {other:?}"),
    }
}

// =============================================================
// Field normalization
// =============================================================

#[test]
fn full_name_alias_is_accepted() {
    let payload: AuthPayload = serde_json::from_str(
        r#"{"access_token":"t","user_id":"1","full_name":"Asha K"}"#,
    )
    .expect("payload");
    assert_eq!(payload.name, "Asha K");
}

#[test]
fn numeric_ids_become_strings() {
    let product: Product =
        serde_json::from_str(r#"{"product_id":12,"name":"Tea","price":3.5}"#).expect("product");
    assert_eq!(product.product_id, "12");

    let order: Order = serde_json::from_str(r#"{"order_id":"ord-8"}"#).expect("order");
    assert_eq!(order.order_id, "ord-8");
}

#[test]
fn product_defaults_fill_missing_fields() {
    let product: Product =
        serde_json::from_str(r#"{"product_id":"p","name":"Tea","price":3.5}"#).expect("product");
    assert!(product.description.is_empty());
    assert!(product.category.is_empty());
    assert!(product.image_url.is_none());
    assert!(product.stock.is_none());
}

#[test]
fn reward_summary_defaults_to_empty() {
    let summary: RewardSummary = serde_json::from_str("{}").expect("summary");
    assert_eq!(summary.total_points, 0);
    assert!(summary.rewards.is_empty());
}

#[test]
fn activity_log_accepts_message_alias() {
    let log: ActivityLog =
        serde_json::from_str(r#"{"message":"price updated","created_at":"2024-01-01"}"#)
            .expect("log");
    assert_eq!(log.action, "price updated");
}

// =============================================================
// Profile merge
// =============================================================

#[test]
fn profile_merge_keeps_token_and_role() {
    let mut session = AuthPayload {
        access_token: "tok".to_owned(),
        user_id: "1".to_owned(),
        email: "old@x.com".to_owned(),
        name: "Old".to_owned(),
        role: None,
        business_name: None,
        business_category: None,
        account: None,
    }
    .into_session(Role::Customer);

    let profile: UserProfile = serde_json::from_str(
        r#"{"user_id":1,"email":"new@x.com","full_name":"New Name",
            "account":{"balance":10.0}}"#,
    )
    .expect("profile");
    profile.merge_into(&mut session);

    assert_eq!(session.token, "tok");
    assert_eq!(session.role, Role::Customer);
    assert_eq!(session.email, "new@x.com");
    assert_eq!(session.name, "New Name");
}

#[test]
fn profile_merge_skips_empty_fields() {
    let mut session = AuthPayload {
        access_token: "tok".to_owned(),
        user_id: "1".to_owned(),
        email: "keep@x.com".to_owned(),
        name: "Keep".to_owned(),
        role: None,
        business_name: None,
        business_category: None,
        account: None,
    }
    .into_session(Role::Merchant);

    let profile: UserProfile =
        serde_json::from_str(r#"{"user_id":"1"}"#).expect("profile");
    profile.merge_into(&mut session);

    assert_eq!(session.email, "keep@x.com");
    assert_eq!(session.name, "Keep");
}

// =============================================================
// Signup body
// =============================================================

#[test]
fn signup_form_omits_absent_business_fields() {
    let form = SignupForm {
        name: "A".to_owned(),
        email: "a@x.com".to_owned(),
        password: "pw".to_owned(),
        ..SignupForm::default()
    };
    let json = serde_json::to_string(&form).expect("json");
    assert!(!json.contains("business_name"));
}
