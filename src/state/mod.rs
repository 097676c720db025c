//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `session`, `cart`, etc.) so
//! individual components can depend on small focused models. The session
//! is the only shared mutable resource: every view reads it, only the
//! auth controller writes it.

pub mod auth;
pub mod cart;
pub mod session;
pub mod store;
pub mod wallet;
