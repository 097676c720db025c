#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::net::types::CartItem;

/// Quantities the cart UI will send to the backend.
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 99;

/// Aggregate figures for a cart, computed before rendering so the view
/// never shows partial totals.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CartTotals {
    pub item_count: u32,
    pub subtotal: f64,
}

pub fn line_total(item: &CartItem) -> f64 {
    item.price * f64::from(item.quantity)
}

pub fn totals(items: &[CartItem]) -> CartTotals {
    CartTotals {
        item_count: items.iter().map(|i| i.quantity).sum(),
        subtotal: items.iter().map(line_total).sum(),
    }
}

/// Clamp a quantity edit into the allowed range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_quantity(requested: i64) -> u32 {
    requested.clamp(i64::from(MIN_QUANTITY), i64::from(MAX_QUANTITY)) as u32
}
