//! Booking queries
//!
//! Every state mutation here is a conditional update checking
//! `rows_affected`, so concurrent callers converge instead of clobbering
//! each other: orders attach once, settlement happens once, cancellation
//! only ever takes a pending booking.

use chrono::NaiveDate;
use shared::models::booking::{Booking, BookingStatus, CustomerInfo, PaymentStatus, Persons};
use sqlx::PgPool;

#[derive(sqlx::FromRow)]
struct BookingRow {
    booking_id: String,
    camp_id: i64,
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    booking_date: NaiveDate,
    adults: i32,
    children: i32,
    total_amount: i64,
    status: String,
    payment_status: String,
    razorpay_order_id: Option<String>,
    razorpay_payment_id: Option<String>,
    razorpay_signature: Option<String>,
    paid_amount: Option<i64>,
    payment_date: Option<i64>,
    notes: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl From<BookingRow> for Booking {
    fn from(r: BookingRow) -> Self {
        Booking {
            booking_id: r.booking_id,
            camp_id: r.camp_id,
            customer: CustomerInfo {
                name: r.customer_name,
                email: r.customer_email,
                phone: r.customer_phone,
            },
            booking_date: r.booking_date,
            persons: Persons {
                adults: r.adults,
                children: r.children,
            },
            total_amount: r.total_amount,
            status: BookingStatus::parse(&r.status).unwrap_or(BookingStatus::Pending),
            payment_status: PaymentStatus::parse(&r.payment_status)
                .unwrap_or(PaymentStatus::Pending),
            razorpay_order_id: r.razorpay_order_id,
            razorpay_payment_id: r.razorpay_payment_id,
            razorpay_signature: r.razorpay_signature,
            paid_amount: r.paid_amount,
            payment_date: r.payment_date,
            notes: r.notes,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

pub struct CreateBooking<'a> {
    pub booking_id: &'a str,
    pub camp_id: i64,
    pub customer: &'a CustomerInfo,
    pub booking_date: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub total_amount: i64,
    pub notes: Option<&'a str>,
    pub now: i64,
}

/// Insert a new (pending, pending) booking. Returns `false` on a booking_id
/// collision so the caller can regenerate and retry.
pub async fn insert(pool: &PgPool, b: &CreateBooking<'_>) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO bookings (booking_id, camp_id, customer_name, customer_email, customer_phone,
                               booking_date, adults, children, total_amount, status, payment_status,
                               notes, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'pending', 'pending', $10, $11, $11)
         ON CONFLICT (booking_id) DO NOTHING",
    )
    .bind(b.booking_id)
    .bind(b.camp_id)
    .bind(&b.customer.name)
    .bind(&b.customer.email)
    .bind(&b.customer.phone)
    .bind(b.booking_date)
    .bind(b.adults)
    .bind(b.children)
    .bind(b.total_amount)
    .bind(b.notes)
    .bind(b.now)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() == 1)
}

pub async fn find_by_booking_id(
    pool: &PgPool,
    booking_id: &str,
) -> Result<Option<Booking>, sqlx::Error> {
    let row: Option<BookingRow> = sqlx::query_as("SELECT * FROM bookings WHERE booking_id = $1")
        .bind(booking_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Booking::from))
}

/// Attach a gateway order iff none is attached yet.
///
/// Returns `false` when an order was already attached; the caller answers
/// with that one instead of minting a duplicate.
pub async fn attach_gateway_order(
    pool: &PgPool,
    booking_id: &str,
    order_id: &str,
    now: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE bookings SET razorpay_order_id = $1, updated_at = $2
         WHERE booking_id = $3 AND razorpay_order_id IS NULL",
    )
    .bind(order_id)
    .bind(now)
    .bind(booking_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() == 1)
}

pub struct Settlement<'a> {
    pub booking_id: &'a str,
    pub payment_id: &'a str,
    pub signature: &'a str,
    pub now: i64,
}

/// Settle payment: (pending, pending) → (confirmed, completed).
///
/// `paid_amount` is copied from the frozen total inside the statement; the
/// client never supplies it. The status guard makes concurrent gateway
/// callbacks settle exactly once; returns `false` for the loser.
pub async fn settle_payment(pool: &PgPool, s: &Settlement<'_>) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE bookings
         SET status = 'confirmed', payment_status = 'completed',
             razorpay_payment_id = $1, razorpay_signature = $2,
             paid_amount = total_amount, payment_date = $3, updated_at = $3
         WHERE booking_id = $4 AND status = 'pending' AND payment_status = 'pending'",
    )
    .bind(s.payment_id)
    .bind(s.signature)
    .bind(s.now)
    .bind(s.booking_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() == 1)
}

/// Cancel: pending → cancelled (terminal). Returns `false` when the booking
/// was not pending anymore.
pub async fn cancel(pool: &PgPool, booking_id: &str, now: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE bookings SET status = 'cancelled', updated_at = $1
         WHERE booking_id = $2 AND status = 'pending'",
    )
    .bind(now)
    .bind(booking_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() == 1)
}
