#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Principal kind of the authenticated user.
///
/// The three kinds are mutually exclusive; a session carries exactly one
/// for its whole lifetime. Changing kind requires a fresh login.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Customer,
    Merchant,
    Admin,
}

impl Role {
    /// Parse a backend role string. The backend is loose here and has
    /// historically emitted `user` for customers.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "customer" | "user" => Some(Self::Customer),
            "merchant" => Some(Self::Merchant),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Merchant => "merchant",
            Self::Admin => "admin",
        }
    }

    /// The single landing path for this kind after login or on denial.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Customer => "/",
            Self::Merchant => "/merchant",
            Self::Admin => "/admin",
        }
    }

    /// The login page serving this kind's path namespace.
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Customer => "/login",
            Self::Merchant => "/merchant/login",
            Self::Admin => "/admin/login",
        }
    }
}

/// The client-held record of the currently authenticated principal.
///
/// `token` is an opaque bearer credential; the client never parses it.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub token: String,
    pub extras: Option<SessionExtras>,
}

/// Role-specific payload issued alongside the session.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionExtras {
    /// Wallet account summary, issued to customers.
    Wallet(WalletSummary),
    /// Business profile summary, issued to merchants.
    Business(BusinessSummary),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalletSummary {
    pub account_id: Option<String>,
    pub balance: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BusinessSummary {
    pub business_name: String,
    pub business_category: Option<String>,
}
