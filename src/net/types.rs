//! Per-endpoint response contracts.
//!
//! The backend's payloads are loosely shaped: identifiers arrive as
//! numbers or strings, display names as `name` or `full_name`, and
//! optional blocks come and go per role. Every contract here normalizes
//! on receipt so downstream code never branches on which field happened
//! to be present.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::state::session::{BusinessSummary, Role, Session, SessionExtras, WalletSummary};

/// Accept identifiers as either JSON strings or numbers.
fn id_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(de)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("expected id, got {other}"))),
    }
}

fn opt_id_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(de)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!("expected id, got {other}"))),
    }
}

// =============================================================
// Auth
// =============================================================

/// Response body of all three login/signup endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthPayload {
    pub access_token: String,
    #[serde(deserialize_with = "id_string")]
    pub user_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "full_name")]
    pub name: String,
    /// Advisory only; the session's role is fixed by which endpoint
    /// authenticated it, never by this field.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub business_category: Option<String>,
    #[serde(default)]
    pub account: Option<AccountSummary>,
}

impl AuthPayload {
    /// Build the session for the principal kind that was authenticated.
    ///
    /// `kind` wins over the payload's own `role` field: the admin
    /// endpoint in particular has been observed to omit or mislabel it.
    pub fn into_session(self, kind: Role) -> Session {
        let extras = match kind {
            Role::Customer => self.account.map(|a| {
                SessionExtras::Wallet(WalletSummary {
                    account_id: a.account_id,
                    balance: a.balance,
                })
            }),
            Role::Merchant => self.business_name.map(|business_name| {
                SessionExtras::Business(BusinessSummary {
                    business_name,
                    business_category: self.business_category,
                })
            }),
            Role::Admin => None,
        };
        Session {
            user_id: self.user_id,
            email: self.email,
            name: self.name,
            role: kind,
            token: self.access_token,
            extras,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AccountSummary {
    #[serde(default, deserialize_with = "opt_id_string")]
    pub account_id: Option<String>,
    #[serde(default)]
    pub balance: f64,
}

/// Response of `GET /api/account/user/profile`, used for rehydration.
#[derive(Clone, Debug, Deserialize)]
pub struct UserProfile {
    #[serde(deserialize_with = "id_string")]
    pub user_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "full_name")]
    pub name: String,
    #[serde(default)]
    pub account: Option<AccountSummary>,
}

impl UserProfile {
    /// Merge freshly fetched profile fields into a rehydrated session.
    /// The token and role of the stored session are kept as-is.
    pub fn merge_into(self, session: &mut Session) {
        session.user_id = self.user_id;
        if !self.email.is_empty() {
            session.email = self.email;
        }
        if !self.name.is_empty() {
            session.name = self.name;
        }
        if session.role == Role::Customer {
            if let Some(a) = self.account {
                session.extras = Some(SessionExtras::Wallet(WalletSummary {
                    account_id: a.account_id,
                    balance: a.balance,
                }));
            }
        }
    }
}

/// Login form body.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup form body; the business fields are sent for merchants only.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_category: Option<String>,
}

// =============================================================
// Catalog
// =============================================================

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Product {
    #[serde(deserialize_with = "id_string")]
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
}

/// Body of `POST /api/merchant/products`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub stock: i64,
}

// =============================================================
// Cart and orders
// =============================================================

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CartItem {
    #[serde(deserialize_with = "id_string")]
    pub product_id: String,
    #[serde(default)]
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Body of `POST /api/checkout`.
#[derive(Clone, Debug, Serialize)]
pub struct CheckoutRequest {
    pub payment_method: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CheckoutOutcome {
    #[serde(deserialize_with = "id_string")]
    pub order_id: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub points_earned: Option<i64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "id_string")]
    pub order_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OrderItem {
    #[serde(deserialize_with = "id_string")]
    pub product_id: String,
    #[serde(default)]
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

// =============================================================
// Wallet and rewards
// =============================================================

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Balance {
    #[serde(default)]
    pub balance: f64,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub account_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RewardSummary {
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub points_value: f64,
    #[serde(default)]
    pub rewards: Vec<RewardEntry>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RewardEntry {
    pub points: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub order_id: Option<String>,
}

/// Response of `POST /api/account/redeem-rewards/{points}`.
#[derive(Clone, Debug, Deserialize)]
pub struct RedeemOutcome {
    pub new_balance: f64,
    #[serde(default)]
    pub remaining_points: Option<i64>,
}

// =============================================================
// Merchant and admin
// =============================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MerchantProfile {
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub business_category: Option<String>,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MerchantStats {
    #[serde(default)]
    pub total_products: i64,
    #[serde(default)]
    pub total_orders: i64,
    #[serde(default)]
    pub total_revenue: f64,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: i64,
    #[serde(default)]
    pub total_merchants: i64,
    #[serde(default)]
    pub total_orders: i64,
    #[serde(default)]
    pub total_revenue: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ActivityLog {
    #[serde(default, alias = "message")]
    pub action: String,
    #[serde(default)]
    pub created_at: String,
}
