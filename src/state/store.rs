//! Durable session persistence over browser `localStorage`.
//!
//! The store owns exactly two fixed keys: `token` (the raw bearer string)
//! and `user` (a JSON identity record). Everything else in the app reads
//! session data through the auth controller, never from storage directly.
//!
//! Corrupt or partial persisted data is treated as "logged out": `load`
//! returns `None` rather than erroring, and the next `save` overwrites
//! whatever was there.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::{Deserialize, Serialize};

use crate::state::session::{BusinessSummary, Role, Session, SessionExtras, WalletSummary};

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "user";

/// Persisted identity record, matching the backend's loose field set.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct StoredUser {
    user_id: String,
    #[serde(default)]
    email: String,
    #[serde(default, alias = "full_name")]
    name: String,
    role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    business_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    balance: Option<f64>,
}

/// Serialize a session into its persisted `(token, user)` pair.
fn encode(session: &Session) -> (String, String) {
    let mut user = StoredUser {
        user_id: session.user_id.clone(),
        email: session.email.clone(),
        name: session.name.clone(),
        role: session.role.as_str().to_owned(),
        ..StoredUser::default()
    };
    match &session.extras {
        Some(SessionExtras::Wallet(w)) => {
            user.account_id = w.account_id.clone();
            user.balance = Some(w.balance);
        }
        Some(SessionExtras::Business(b)) => {
            user.business_name = Some(b.business_name.clone());
            user.business_category = b.business_category.clone();
        }
        None => {}
    }
    let json = serde_json::to_string(&user).unwrap_or_else(|_| "{}".to_owned());
    (session.token.clone(), json)
}

/// Rebuild a session from persisted data.
///
/// Returns `None` on malformed JSON, an unknown role label, or an empty
/// token — a session without a valid credential is not a session.
fn decode(token: &str, user_json: &str) -> Option<Session> {
    if token.is_empty() {
        return None;
    }
    let user: StoredUser = serde_json::from_str(user_json).ok()?;
    let role = Role::parse(&user.role)?;

    let extras = match role {
        Role::Customer if user.account_id.is_some() || user.balance.is_some() => {
            Some(SessionExtras::Wallet(WalletSummary {
                account_id: user.account_id,
                balance: user.balance.unwrap_or(0.0),
            }))
        }
        Role::Merchant => user.business_name.map(|business_name| {
            SessionExtras::Business(BusinessSummary {
                business_name,
                business_category: user.business_category,
            })
        }),
        _ => None,
    };

    Some(Session {
        user_id: user.user_id,
        email: user.email,
        name: user.name,
        role,
        token: token.to_owned(),
        extras,
    })
}

/// Persist the session, replacing any prior value.
pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let (token, user) = encode(session);
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &token);
            let _ = storage.set_item(USER_KEY, &user);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Load the persisted session, if any survives deserialization.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let user = storage.get_item(USER_KEY).ok().flatten()?;
        decode(&token, &user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove all persisted session data.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
