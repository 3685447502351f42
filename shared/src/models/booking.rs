//! Booking lifecycle model
//!
//! A booking is created `(pending, pending)` and moves through exactly one of
//! two terminal paths: payment settlement to `(confirmed, completed)` or
//! cancellation. The contact info and the total are snapshots frozen at
//! creation; neither follows later camp or profile changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Booking lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_db(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// Payment lifecycle state, tracked independently of [`BookingStatus`]
/// because a booking exists (reserved) before payment completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_db(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            "refunded" => Some(Self::Refunded),
            _ => None,
        }
    }
}

/// Customer contact snapshot embedded in a booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Party size
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Persons {
    pub adults: i32,
    pub children: i32,
}

/// Booking record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Human-readable identifier, unique and immutable once assigned
    pub booking_id: String,
    pub camp_id: i64,
    pub customer: CustomerInfo,
    pub booking_date: NaiveDate,
    pub persons: Persons,
    /// Frozen at creation from the camp's price at booking time;
    /// never recomputed
    pub total_amount: i64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub razorpay_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub razorpay_payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub razorpay_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Booking {
    /// Whether payment settlement may proceed. Only a live, unpaid booking
    /// settles; everything else must refuse before any mutation.
    pub fn can_settle(&self) -> bool {
        self.status == BookingStatus::Pending && self.payment_status == PaymentStatus::Pending
    }

    /// Whether cancellation may proceed. Cancelled is terminal and reachable
    /// from pending only.
    pub fn can_cancel(&self) -> bool {
        self.status == BookingStatus::Pending
    }

    /// Invariant check: confirmed implies completed payment with a verified
    /// gateway payment id
    pub fn is_settled(&self) -> bool {
        self.status == BookingStatus::Confirmed
            && self.payment_status == PaymentStatus::Completed
            && self.razorpay_payment_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(status: BookingStatus, payment_status: PaymentStatus) -> Booking {
        Booking {
            booking_id: "BK20260101ABCD2345".into(),
            camp_id: 1,
            customer: CustomerInfo {
                name: "Asha Rao".into(),
                email: "asha@example.com".into(),
                phone: "+919876543210".into(),
            },
            booking_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            persons: Persons {
                adults: 2,
                children: 1,
            },
            total_amount: 2297,
            status,
            payment_status,
            razorpay_order_id: None,
            razorpay_payment_id: None,
            razorpay_signature: None,
            paid_amount: None,
            payment_date: None,
            notes: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_status_db_round_trip() {
        for s in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::parse(s.as_db()), Some(s));
        }
        for p in [
            PaymentStatus::Pending,
            PaymentStatus::Completed,
            PaymentStatus::Failed,
            PaymentStatus::Refunded,
        ] {
            assert_eq!(PaymentStatus::parse(p.as_db()), Some(p));
        }
        assert_eq!(BookingStatus::parse("paid"), None);
    }

    #[test]
    fn test_only_live_unpaid_booking_settles() {
        assert!(booking(BookingStatus::Pending, PaymentStatus::Pending).can_settle());
        assert!(!booking(BookingStatus::Confirmed, PaymentStatus::Completed).can_settle());
        assert!(!booking(BookingStatus::Cancelled, PaymentStatus::Pending).can_settle());
        assert!(!booking(BookingStatus::Pending, PaymentStatus::Completed).can_settle());
    }

    #[test]
    fn test_cancelled_is_terminal() {
        assert!(booking(BookingStatus::Pending, PaymentStatus::Pending).can_cancel());
        assert!(!booking(BookingStatus::Confirmed, PaymentStatus::Completed).can_cancel());
        assert!(!booking(BookingStatus::Cancelled, PaymentStatus::Pending).can_cancel());
    }

    #[test]
    fn test_settled_requires_payment_id() {
        let mut b = booking(BookingStatus::Confirmed, PaymentStatus::Completed);
        assert!(!b.is_settled());
        b.razorpay_payment_id = Some("pay_xyz".into());
        assert!(b.is_settled());
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let b = booking(BookingStatus::Pending, PaymentStatus::Pending);
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["bookingId"], "BK20260101ABCD2345");
        assert_eq!(json["totalAmount"], 2297);
        assert_eq!(json["paymentStatus"], "pending");
        assert_eq!(json["bookingDate"], "2026-01-15");
        assert_eq!(json["persons"]["adults"], 2);
        // Unattempted payment fields stay off the wire
        assert!(json.get("razorpayOrderId").is_none());
    }
}
