//! Network layer: REST client, error taxonomy, and response contracts.

pub mod api;
pub mod error;
pub mod types;
