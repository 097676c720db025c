//! Reusable UI components shared across pages.

pub mod error_banner;
pub mod navbar;
pub mod product_card;
