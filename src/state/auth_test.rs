use super::*;
use crate::state::session::SessionExtras;

fn session(role: Role) -> Session {
    Session {
        user_id: "u-1".to_owned(),
        email: "u@x.com".to_owned(),
        name: "U".to_owned(),
        role,
        token: "tok".to_owned(),
        extras: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = AuthState::default();
    assert_eq!(state.phase, AuthPhase::Unauthenticated);
    assert!(state.session.is_none());
    assert!(state.error.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Login transitions
// =============================================================

#[test]
fn begin_authenticating_clears_prior_error() {
    let mut state = AuthState::default();
    state.auth_failed("bad password".to_owned());
    state.begin_authenticating();
    assert_eq!(state.phase, AuthPhase::Authenticating);
    assert!(state.error.is_none());
}

#[test]
fn authenticated_sets_session_and_role() {
    let mut state = AuthState::default();
    state.begin_authenticating();
    state.authenticated(session(Role::Merchant));
    assert_eq!(state.phase, AuthPhase::Authenticated);
    assert_eq!(state.current_role(), Some(Role::Merchant));
    assert_eq!(state.token().as_deref(), Some("tok"));
}

#[test]
fn failed_login_writes_no_session() {
    let mut state = AuthState::default();
    state.begin_authenticating();
    state.auth_failed("invalid credentials".to_owned());
    assert_eq!(state.phase, AuthPhase::Unauthenticated);
    assert!(state.session.is_none());
    assert_eq!(state.error.as_deref(), Some("invalid credentials"));
}

#[test]
fn second_login_replaces_prior_session() {
    let mut state = AuthState::default();
    state.authenticated(session(Role::Customer));
    state.authenticated(session(Role::Admin));
    assert_eq!(state.current_role(), Some(Role::Admin));
    assert!(state.session.as_ref().is_some_and(|s| s.extras.is_none()));
}

#[test]
fn role_is_hidden_while_authenticating() {
    let mut state = AuthState::default();
    state.authenticated(session(Role::Customer));
    state.begin_authenticating();
    assert_eq!(state.current_role(), None);
}

// =============================================================
// Logout and invalidation
// =============================================================

#[test]
fn signed_out_clears_everything() {
    let mut state = AuthState::default();
    state.authenticated(session(Role::Customer));
    state.signed_out();
    assert_eq!(state.phase, AuthPhase::Unauthenticated);
    assert!(state.session.is_none());
    assert!(state.error.is_none());
}

#[test]
fn invalidated_clears_session_once() {
    let mut state = AuthState::default();
    state.authenticated(session(Role::Customer));

    assert!(state.invalidated("expired".to_owned()));
    assert_eq!(state.phase, AuthPhase::Invalid);
    assert!(state.session.is_none());
    assert_eq!(state.error.as_deref(), Some("expired"));

    // Concurrent in-flight 401s observe a session already gone.
    assert!(!state.invalidated("expired".to_owned()));
    assert!(!state.invalidated("expired again".to_owned()));
    assert_eq!(state.error.as_deref(), Some("expired"));
}

#[test]
fn invalidated_without_session_is_a_no_op() {
    let mut state = AuthState::default();
    assert!(!state.invalidated("expired".to_owned()));
    assert_eq!(state.phase, AuthPhase::Unauthenticated);
    assert!(state.error.is_none());
}

// =============================================================
// Rehydration failure policy
// =============================================================

#[test]
fn rejected_token_discards_persisted_session() {
    assert!(rehydration_discards_session(ErrorKind::Unauthorized));
    assert!(rehydration_discards_session(ErrorKind::Forbidden));
    assert!(rehydration_discards_session(ErrorKind::NotFound));
    assert!(rehydration_discards_session(ErrorKind::Network));
}

#[test]
fn server_outage_keeps_persisted_session() {
    assert!(!rehydration_discards_session(ErrorKind::ServerError));
}

#[test]
fn login_after_invalidation_recovers() {
    let mut state = AuthState::default();
    state.authenticated(session(Role::Customer));
    state.invalidated("expired".to_owned());
    state.begin_authenticating();
    state.authenticated(Session {
        extras: Some(SessionExtras::Wallet(crate::state::session::WalletSummary::default())),
        ..session(Role::Customer)
    });
    assert_eq!(state.current_role(), Some(Role::Customer));
    assert!(state.error.is_none());
}
