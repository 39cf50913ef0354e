//! Cart pricing formulas
//!
//! All calculations are pure functions over `f64`. Rates are fixed
//! business constants, not runtime state.

use crate::domain::shipping::ShippingMethod;

/// Sales tax rate applied to the cart total.
pub const TAX_RATE: f64 = 0.05;

/// Discount fraction applied for members.
pub const DISCOUNT_RATE: f64 = 0.10;

/// Loyalty points earned per unit of purchase amount.
pub const LOYALTY_POINTS_MULTIPLIER: f64 = 2.0;

/// Running cart total after adding one more item.
pub fn cart_total(current_total: f64, new_item_price: f64) -> f64 {
    current_total + new_item_price
}

/// Final price after the membership discount. Non-members pay full price.
pub fn discounted_price(total: f64, is_member: bool) -> f64 {
    if is_member {
        total * (1.0 - DISCOUNT_RATE)
    } else {
        total
    }
}

/// Sales tax owed on a cart total.
pub fn sales_tax(total: f64) -> f64 {
    total * TAX_RATE
}

/// Estimated delivery time, rounded up to whole days.
pub fn delivery_days(method: ShippingMethod, distance: f64) -> i64 {
    (distance / method.distance_per_day()).ceil() as i64
}

/// Loyalty points earned for a purchase.
pub fn loyalty_points(purchase_amount: f64) -> f64 {
    purchase_amount * LOYALTY_POINTS_MULTIPLIER
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_total_adds_item_price() {
        assert_eq!(cart_total(40.0, 10.0), 50.0);
        assert_eq!(cart_total(0.0, 0.0), 0.0);
        assert_eq!(cart_total(2.5, 0.25), 2.75);
    }

    #[test]
    fn members_get_ten_percent_off() {
        assert_eq!(discounted_price(100.0, true), 90.0);
    }

    #[test]
    fn non_members_pay_full_price() {
        assert_eq!(discounted_price(100.0, false), 100.0);
    }

    #[test]
    fn tax_is_five_percent() {
        assert_eq!(sales_tax(200.0), 10.0);
        assert_eq!(sales_tax(0.0), 0.0);
    }

    #[test]
    fn standard_covers_50_per_day() {
        // 120 / 50 = 2.4 → 3 days
        assert_eq!(delivery_days(ShippingMethod::Standard, 120.0), 3);
    }

    #[test]
    fn express_covers_100_per_day() {
        // 120 / 100 = 1.2 → 2 days
        assert_eq!(delivery_days(ShippingMethod::Express, 120.0), 2);
    }

    #[test]
    fn exact_multiples_do_not_round_up() {
        assert_eq!(delivery_days(ShippingMethod::Standard, 100.0), 2);
        assert_eq!(delivery_days(ShippingMethod::Express, 100.0), 1);
    }

    #[test]
    fn zero_distance_ships_in_zero_days() {
        assert_eq!(delivery_days(ShippingMethod::Standard, 0.0), 0);
    }

    #[test]
    fn loyalty_points_double_the_amount() {
        assert_eq!(loyalty_points(30.0), 60.0);
        assert_eq!(loyalty_points(0.5), 1.0);
    }
}
