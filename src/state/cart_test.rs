use super::*;

fn item(price: f64, quantity: u32) -> CartItem {
    CartItem {
        product_id: "p".to_owned(),
        name: String::new(),
        price,
        quantity,
    }
}

// =============================================================
// Totals
// =============================================================

#[test]
fn empty_cart_totals_are_zero() {
    let t = totals(&[]);
    assert_eq!(t.item_count, 0);
    assert_eq!(t.subtotal, 0.0);
}

#[test]
fn totals_sum_line_totals() {
    let t = totals(&[item(3.5, 2), item(10.0, 1)]);
    assert_eq!(t.item_count, 3);
    assert_eq!(t.subtotal, 17.0);
}

#[test]
fn line_total_multiplies_price_by_quantity() {
    assert_eq!(line_total(&item(2.25, 4)), 9.0);
}

// =============================================================
// Quantity clamping
// =============================================================

#[test]
fn clamp_quantity_bounds() {
    assert_eq!(clamp_quantity(0), MIN_QUANTITY);
    assert_eq!(clamp_quantity(-5), MIN_QUANTITY);
    assert_eq!(clamp_quantity(1), 1);
    assert_eq!(clamp_quantity(50), 50);
    assert_eq!(clamp_quantity(1000), MAX_QUANTITY);
}
