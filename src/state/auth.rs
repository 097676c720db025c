//! Authentication state machine and session controller.
//!
//! The controller is the only writer of the auth signal and the only
//! code that touches the session store. Views read session data through
//! the signal and report API errors back via [`absorb`] (or the [`watch`]
//! wrapper), so a 401 anywhere in the app invalidates the session through
//! exactly one code path.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::{ApiError, ErrorKind};
use crate::net::types::{Credentials, SignupForm};
use crate::state::session::{Role, Session};
use crate::state::store;

/// Where the client stands with the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// No session; nothing persisted.
    #[default]
    Unauthenticated,
    /// A login, signup, or silent rehydration is in flight.
    Authenticating,
    /// A session is active.
    Authenticated,
    /// A token was present but the server rejected it; the session has
    /// been cleared and the user must log in again.
    Invalid,
}

/// Authentication state tracking the current session and phase.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub session: Option<Session>,
    pub error: Option<String>,
}

impl AuthState {
    /// Role of the active session. `None` unless fully authenticated.
    pub fn current_role(&self) -> Option<Role> {
        if self.phase == AuthPhase::Authenticated {
            self.session.as_ref().map(|s| s.role)
        } else {
            None
        }
    }

    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    // --- transitions -----------------------------------------

    pub fn begin_authenticating(&mut self) {
        self.phase = AuthPhase::Authenticating;
        self.error = None;
    }

    /// A login/signup/rehydration succeeded. Replaces any prior session.
    pub fn authenticated(&mut self, session: Session) {
        self.phase = AuthPhase::Authenticated;
        self.session = Some(session);
        self.error = None;
    }

    /// A login/signup attempt failed; no session is written.
    pub fn auth_failed(&mut self, detail: String) {
        self.phase = AuthPhase::Unauthenticated;
        self.session = None;
        self.error = Some(detail);
    }

    /// Explicit logout.
    pub fn signed_out(&mut self) {
        self.phase = AuthPhase::Unauthenticated;
        self.session = None;
        self.error = None;
    }

    /// The server rejected our credential. Returns `true` only on the
    /// first call that actually clears something, so concurrent 401s
    /// from parallel in-flight requests collapse into one invalidation.
    pub fn invalidated(&mut self, detail: String) -> bool {
        let had_session = self.session.is_some();
        if had_session {
            self.session = None;
            self.phase = AuthPhase::Invalid;
            self.error = Some(detail);
        }
        had_session
    }
}

// =============================================================
// Controller operations
// =============================================================

/// Log in as the given principal kind.
///
/// On success the session's role is the principal kind that was
/// authenticated, regardless of the payload's own role field, and the
/// session is persisted before the signal flips to `Authenticated`.
pub async fn login(
    auth: RwSignal<AuthState>,
    kind: Role,
    creds: Credentials,
) -> Result<(), ApiError> {
    auth.update(AuthState::begin_authenticating);
    match api::login(kind, &creds).await {
        Ok(payload) => {
            let session = payload.into_session(kind);
            store::save(&session);
            auth.update(|a| a.authenticated(session));
            Ok(())
        }
        Err(err) => {
            auth.update(|a| a.auth_failed(err.detail.clone()));
            Err(err)
        }
    }
}

/// Create an account and authenticate in one step.
pub async fn signup(
    auth: RwSignal<AuthState>,
    kind: Role,
    form: SignupForm,
) -> Result<(), ApiError> {
    auth.update(AuthState::begin_authenticating);
    match api::signup(kind, &form).await {
        Ok(payload) => {
            let session = payload.into_session(kind);
            store::save(&session);
            auth.update(|a| a.authenticated(session));
            Ok(())
        }
        Err(err) => {
            auth.update(|a| a.auth_failed(err.detail.clone()));
            Err(err)
        }
    }
}

/// Log out: clear the store and the signal in one step, so no later
/// call can pick up a stale token.
pub fn logout(auth: RwSignal<AuthState>) {
    store::clear();
    auth.update(AuthState::signed_out);
}

/// Reconcile persisted session data with the server at startup.
///
/// With stored data present the machine enters `Authenticating` silently
/// and revalidates the token against the profile endpoint. A rejection
/// clears the store and lands in `Unauthenticated` without surfacing an
/// error banner; a server-side outage leaves the store untouched so the
/// next load can try again.
pub fn restore(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(mut session) = store::load() else {
            return;
        };
        auth.update(AuthState::begin_authenticating);
        leptos::task::spawn_local(async move {
            match api::fetch_profile(&session.token).await {
                Ok(profile) => {
                    profile.merge_into(&mut session);
                    store::save(&session);
                    auth.update(|a| a.authenticated(session));
                }
                Err(err) => {
                    leptos::logging::warn!("session rehydration rejected: {err}");
                    if rehydration_discards_session(err.kind) {
                        store::clear();
                    }
                    auth.update(AuthState::signed_out);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Whether a failed rehydration should discard the persisted session.
///
/// A 5xx is the backend's problem, not a verdict on the token; keeping
/// the store lets the next page load retry. Everything else means the
/// credential did not pass and the stored session is dead weight.
fn rehydration_discards_session(kind: ErrorKind) -> bool {
    kind != ErrorKind::ServerError
}

/// Centralized authorization-error interceptor.
///
/// Every view routes failed API results through here; only
/// `Unauthorized` clears the session, and only once.
pub fn absorb(auth: RwSignal<AuthState>, err: &ApiError) {
    if err.kind != ErrorKind::Unauthorized {
        return;
    }
    let mut cleared = false;
    auth.update(|a| cleared = a.invalidated(err.detail.clone()));
    if cleared {
        store::clear();
        leptos::logging::warn!("session invalidated: {err}");
    }
}

/// Run an API call and feed any failure through [`absorb`] before
/// handing the result back to the view.
pub async fn watch<T>(
    auth: RwSignal<AuthState>,
    fut: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    let res = fut.await;
    if let Err(err) = &res {
        absorb(auth, err);
    }
    res
}
