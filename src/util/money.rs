//! Currency display helpers. Amounts are backend-computed floats; the
//! client only formats them to two decimals with the ₹ symbol the
//! storefront uses everywhere.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Format an amount with the currency symbol, two decimals.
pub fn display(value: f64) -> String {
    format!("₹{value:.2}")
}
