use super::*;

#[test]
fn display_keeps_two_decimals() {
    assert_eq!(display(25.0), "₹25.00");
    assert_eq!(display(3.5), "₹3.50");
    assert_eq!(display(0.0), "₹0.00");
}

#[test]
fn display_rounds_to_cents() {
    assert_eq!(display(1.005), "₹1.00");
    assert_eq!(display(1.006), "₹1.01");
}

#[test]
fn display_prefixes_symbol() {
    assert_eq!(display(120.5), "₹120.50");
}
