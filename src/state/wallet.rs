//! Reward-point arithmetic.
//!
//! Points are issued and converted server-side; the client only previews
//! the figures. 1 point = 0.10 currency units; 5% of an order's value
//! comes back as points.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

/// Currency value of one reward point.
pub const POINT_VALUE: f64 = 0.10;

/// Share of an order's value returned as points.
pub const EARN_RATE: f64 = 0.05;

/// Currency value of a number of points.
#[allow(clippy::cast_precision_loss)]
pub fn conversion_value(points: i64) -> f64 {
    points as f64 * POINT_VALUE
}

/// Points earned for an order total, rounded down to whole points.
#[allow(clippy::cast_possible_truncation)]
pub fn points_earned(order_total: f64) -> i64 {
    if order_total <= 0.0 {
        0
    } else {
        (order_total * EARN_RATE).floor() as i64
    }
}

/// Points left after a conversion.
pub fn remaining_points(total: i64, converted: i64) -> i64 {
    (total - converted).max(0)
}

/// Validate a conversion request against the available balance.
/// The message is shown inline at the conversion form.
pub fn validate_conversion(requested: i64, available: i64) -> Result<(), String> {
    if requested <= 0 {
        return Err("Enter a number of points to convert.".to_owned());
    }
    if requested > available {
        return Err(format!("You only have {available} points available."));
    }
    Ok(())
}
