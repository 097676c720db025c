use super::*;

fn customer_session() -> Session {
    Session {
        user_id: "42".to_owned(),
        email: "a@example.com".to_owned(),
        name: "Asha".to_owned(),
        role: Role::Customer,
        token: "tok-1".to_owned(),
        extras: Some(SessionExtras::Wallet(WalletSummary {
            account_id: Some("acct-9".to_owned()),
            balance: 120.5,
        })),
    }
}

// =============================================================
// encode / decode round trip
// =============================================================

#[test]
fn encode_then_decode_preserves_customer_session() {
    let session = customer_session();
    let (token, user) = encode(&session);
    let restored = decode(&token, &user).expect("session");
    assert_eq!(restored, session);
}

#[test]
fn encode_then_decode_preserves_merchant_extras() {
    let session = Session {
        user_id: "7".to_owned(),
        email: "m@example.com".to_owned(),
        name: "Mira".to_owned(),
        role: Role::Merchant,
        token: "tok-2".to_owned(),
        extras: Some(SessionExtras::Business(BusinessSummary {
            business_name: "Mira Goods".to_owned(),
            business_category: Some("grocery".to_owned()),
        })),
    };
    let (token, user) = encode(&session);
    assert_eq!(decode(&token, &user), Some(session));
}

// =============================================================
// decode tolerance
// =============================================================

#[test]
fn decode_corrupt_json_is_absent_not_error() {
    assert!(decode("tok", "{not json").is_none());
    assert!(decode("tok", "").is_none());
    assert!(decode("tok", "[1,2,3]").is_none());
}

#[test]
fn decode_empty_token_is_absent() {
    let (_, user) = encode(&customer_session());
    assert!(decode("", &user).is_none());
}

#[test]
fn decode_unknown_role_is_absent() {
    let json = r#"{"user_id":"1","email":"x","name":"x","role":"root"}"#;
    assert!(decode("tok", json).is_none());
}

#[test]
fn decode_accepts_minimal_record() {
    let json = r#"{"user_id":"1","role":"customer"}"#;
    let session = decode("tok", json).expect("session");
    assert_eq!(session.role, Role::Customer);
    assert!(session.email.is_empty());
    assert!(session.extras.is_none());
}

#[test]
fn decode_accepts_full_name_alias() {
    let json = r#"{"user_id":"1","role":"user","full_name":"Asha K"}"#;
    let session = decode("tok", json).expect("session");
    assert_eq!(session.name, "Asha K");
    assert_eq!(session.role, Role::Customer);
}

#[test]
fn decode_admin_carries_no_extras() {
    let json = r#"{"user_id":"1","role":"admin","business_name":"stale"}"#;
    let session = decode("tok", json).expect("session");
    assert!(session.extras.is_none());
}
