//! Derived pricing for bookings
//!
//! One figure everywhere: the total computed here is frozen into the booking
//! at creation, sent to the payment gateway, and reported to the customer.
//! No display-only variants exist.

/// Booking total: adults and children priced per head, whole rupees.
pub fn total(adults: i32, children: i32, adult_price: i64, child_price: i64) -> i64 {
    i64::from(adults) * adult_price + i64::from(children) * child_price
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_per_head() {
        assert_eq!(total(2, 1, 899, 499), 2297);
        assert_eq!(total(1, 0, 1500, 900), 1500);
        assert_eq!(total(4, 3, 1200, 600), 6600);
    }

    #[test]
    fn test_children_priced_separately() {
        assert_eq!(total(2, 2, 1000, 500), 3000);
        assert_eq!(total(2, 0, 1000, 500), 2000);
    }
}
