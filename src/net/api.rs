//! REST API client for the storefront backend.
//!
//! One request helper attaches `Authorization: Bearer <token>` when a
//! token is supplied and normalizes every failure into [`ApiError`].
//! Each call is a single attempt: no retry, no timeout — callers decide
//! whether to try again.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error, since these
//! endpoints are only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::net::types::{
    ActivityLog, AdminStats, AuthPayload, Balance, Cart, CheckoutOutcome, CheckoutRequest,
    Credentials, MerchantProfile, MerchantStats, NewProduct, Order, Product, RedeemOutcome,
    RewardSummary, SignupForm, UserProfile,
};
use crate::state::session::Role;

/// Backend base URL; overridable at build time.
pub fn base_url() -> &'static str {
    option_env!("STOREFRONT_API_URL").unwrap_or("http://localhost:8000")
}

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Login endpoint for a principal kind. The three flows share one code
/// path; only the route differs.
pub fn login_endpoint(kind: Role) -> &'static str {
    match kind {
        Role::Customer => "/api/auth/login",
        Role::Merchant => "/api/merchant/login",
        Role::Admin => "/api/admin/login",
    }
}

/// Signup endpoint for a principal kind. The merchant and admin routes
/// are not under `/api`; that asymmetry is the backend's.
pub fn signup_endpoint(kind: Role) -> &'static str {
    match kind {
        Role::Customer => "/api/auth/signup",
        Role::Merchant => "/merchant/signup",
        Role::Admin => "/admin/signup",
    }
}

async fn request_json<T: DeserializeOwned>(
    verb: Verb,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(verb, path, token, body).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::network(format!("unexpected response body: {e}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, token, body);
        Err(ApiError::network("not available on the server"))
    }
}

async fn request_empty(
    verb: Verb,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(verb, path, token, body).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, token, body);
        Err(ApiError::network("not available on the server"))
    }
}

#[cfg(feature = "hydrate")]
async fn send(
    verb: Verb,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let url = format!("{}{path}", base_url());
    let builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Delete => Request::delete(&url),
    };
    let builder = match auth_header(token) {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    };

    let sent = match body {
        Some(b) => {
            builder
                .json(&b)
                .map_err(|e| ApiError::network(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| ApiError::network(e.to_string()))?;

    if resp.ok() {
        Ok(resp)
    } else {
        let text = resp.text().await.unwrap_or_default();
        Err(ApiError::from_status(resp.status(), &text))
    }
}

fn json_body(value: &impl Serialize) -> Option<serde_json::Value> {
    serde_json::to_value(value).ok()
}

/// `Authorization` header value for an outbound request.
fn auth_header(token: Option<&str>) -> Option<String> {
    token.map(|t| format!("Bearer {t}"))
}

// =============================================================
// Auth
// =============================================================

pub async fn login(kind: Role, creds: &Credentials) -> Result<AuthPayload, ApiError> {
    request_json(Verb::Post, login_endpoint(kind), None, json_body(creds)).await
}

pub async fn signup(kind: Role, form: &SignupForm) -> Result<AuthPayload, ApiError> {
    request_json(Verb::Post, signup_endpoint(kind), None, json_body(form)).await
}

/// Profile check used to revalidate a rehydrated session.
pub async fn fetch_profile(token: &str) -> Result<UserProfile, ApiError> {
    request_json(Verb::Get, "/api/account/user/profile", Some(token), None).await
}

// =============================================================
// Catalog
// =============================================================

/// Catalog reads take the token as optional: the backend serves them to
/// anyone, but a request made while a session is present still carries
/// the session's credential like every other call.
pub async fn fetch_products(token: Option<&str>) -> Result<Vec<Product>, ApiError> {
    request_json(Verb::Get, "/api/products/", token, None).await
}

pub async fn fetch_featured_products(token: Option<&str>) -> Result<Vec<Product>, ApiError> {
    request_json(Verb::Get, "/api/products/featured", token, None).await
}

pub async fn fetch_product(token: Option<&str>, product_id: &str) -> Result<Product, ApiError> {
    request_json(Verb::Get, &format!("/api/products/{product_id}"), token, None).await
}

pub async fn fetch_products_by_category(
    token: Option<&str>,
    category: &str,
) -> Result<Vec<Product>, ApiError> {
    request_json(Verb::Get, &format!("/api/products/category/{category}"), token, None).await
}

pub async fn fetch_categories(token: Option<&str>) -> Result<Vec<String>, ApiError> {
    request_json(Verb::Get, "/api/products/categories", token, None).await
}

// =============================================================
// Cart and checkout
// =============================================================

pub async fn fetch_cart(token: &str) -> Result<Cart, ApiError> {
    request_json(Verb::Get, "/api/cart", Some(token), None).await
}

pub async fn add_to_cart(token: &str, product_id: &str, quantity: u32) -> Result<(), ApiError> {
    let body = serde_json::json!({ "product_id": product_id, "quantity": quantity });
    request_empty(Verb::Post, "/api/cart/add", Some(token), Some(body)).await
}

pub async fn update_cart_item(
    token: &str,
    product_id: &str,
    quantity: u32,
) -> Result<(), ApiError> {
    let body = serde_json::json!({ "quantity": quantity });
    request_empty(Verb::Put, &format!("/api/cart/product/{product_id}"), Some(token), Some(body))
        .await
}

pub async fn remove_cart_item(token: &str, product_id: &str) -> Result<(), ApiError> {
    request_empty(Verb::Delete, &format!("/api/cart/product/{product_id}"), Some(token), None)
        .await
}

pub async fn place_order(
    token: &str,
    request: &CheckoutRequest,
) -> Result<CheckoutOutcome, ApiError> {
    request_json(Verb::Post, "/api/checkout", Some(token), json_body(request)).await
}

pub async fn fetch_orders(token: &str) -> Result<Vec<Order>, ApiError> {
    request_json(Verb::Get, "/api/orders", Some(token), None).await
}

pub async fn fetch_order(token: &str, order_id: &str) -> Result<Order, ApiError> {
    request_json(Verb::Get, &format!("/api/orders/{order_id}"), Some(token), None).await
}

// =============================================================
// Wallet and rewards
// =============================================================

pub async fn fetch_balance(token: &str) -> Result<Balance, ApiError> {
    request_json(Verb::Get, "/api/account/balance", Some(token), None).await
}

pub async fn fetch_rewards(token: &str) -> Result<RewardSummary, ApiError> {
    request_json(Verb::Get, "/api/account/rewards", Some(token), None).await
}

pub async fn redeem_points(token: &str, points: i64) -> Result<RedeemOutcome, ApiError> {
    request_json(Verb::Post, &format!("/api/account/redeem-rewards/{points}"), Some(token), None)
        .await
}

// =============================================================
// Merchant
// =============================================================

pub async fn fetch_merchant_products(token: &str) -> Result<Vec<Product>, ApiError> {
    request_json(Verb::Get, "/api/merchant/products", Some(token), None).await
}

pub async fn create_product(token: &str, product: &NewProduct) -> Result<Product, ApiError> {
    request_json(Verb::Post, "/api/merchant/products", Some(token), json_body(product)).await
}

pub async fn fetch_merchant_profile(token: &str) -> Result<MerchantProfile, ApiError> {
    request_json(Verb::Get, "/api/merchant/profile", Some(token), None).await
}

pub async fn update_merchant_profile(
    token: &str,
    profile: &MerchantProfile,
) -> Result<MerchantProfile, ApiError> {
    request_json(Verb::Put, "/api/merchant/profile", Some(token), json_body(profile)).await
}

pub async fn fetch_merchant_logs(
    token: &str,
    merchant_id: &str,
) -> Result<Vec<ActivityLog>, ApiError> {
    request_json(Verb::Get, &format!("/api/merchant/{merchant_id}/logs"), Some(token), None).await
}

pub async fn fetch_merchant_stats(token: &str) -> Result<MerchantStats, ApiError> {
    request_json(Verb::Get, "/api/merchant/stats", Some(token), None).await
}

// =============================================================
// Admin
// =============================================================

pub async fn fetch_admin_stats(token: &str) -> Result<AdminStats, ApiError> {
    request_json(Verb::Get, "/api/admin/stats", Some(token), None).await
}

pub async fn fetch_admin_orders(token: &str) -> Result<Vec<Order>, ApiError> {
    request_json(Verb::Get, "/api/admin/orders", Some(token), None).await
}

pub async fn fetch_admin_logs(token: &str) -> Result<Vec<ActivityLog>, ApiError> {
    request_json(Verb::Get, "/api/admin/logs", Some(token), None).await
}
