use super::*;

// =============================================================
// Conversion value
// =============================================================

#[test]
fn two_hundred_fifty_points_convert_to_twenty_five() {
    assert_eq!(conversion_value(250), 25.0);
}

#[test]
fn zero_points_convert_to_zero() {
    assert_eq!(conversion_value(0), 0.0);
}

// =============================================================
// Remaining points
// =============================================================

#[test]
fn remaining_points_subtracts_converted() {
    assert_eq!(remaining_points(300, 250), 50);
}

#[test]
fn remaining_points_never_negative() {
    assert_eq!(remaining_points(100, 250), 0);
}

// =============================================================
// Earn rate
// =============================================================

#[test]
fn five_percent_of_order_value_as_points() {
    assert_eq!(points_earned(100.0), 5);
    assert_eq!(points_earned(2000.0), 100);
}

#[test]
fn fractional_points_round_down() {
    assert_eq!(points_earned(59.0), 2);
    assert_eq!(points_earned(19.0), 0);
}

#[test]
fn non_positive_order_earns_nothing() {
    assert_eq!(points_earned(0.0), 0);
    assert_eq!(points_earned(-10.0), 0);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn conversion_within_balance_is_valid() {
    assert!(validate_conversion(250, 300).is_ok());
    assert!(validate_conversion(300, 300).is_ok());
}

#[test]
fn conversion_over_balance_names_the_limit() {
    let err = validate_conversion(400, 300).unwrap_err();
    assert_eq!(err, "You only have 300 points available.");
}

#[test]
fn non_positive_conversion_is_rejected() {
    assert!(validate_conversion(0, 300).is_err());
    assert!(validate_conversion(-1, 300).is_err());
}
