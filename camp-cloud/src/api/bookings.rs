//! Booking lifecycle endpoints
//!
//! POST /api/bookings             — create a (pending, pending) booking
//! GET  /api/bookings/{id}        — fetch by booking id, camp populated
//! POST /api/bookings/{id}/cancel — pending → cancelled (terminal)

use axum::Json;
use axum::extract::{Path, State};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::booking::{Booking, BookingStatus};
use shared::models::camp::Camp;

use crate::db;
use crate::db::camps::SlotReservation;
use crate::error::ServiceError;
use crate::state::AppState;
use crate::{notify, pricing, util};

type ApiResult<T> = Result<Json<ApiResponse<T>>, ServiceError>;

// ── Request / Response types ──

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateBookingRequest {
    pub camp_id: i64,
    pub customer: CustomerPayload,
    /// Reserved date, `YYYY-MM-DD`
    pub booking_date: String,
    pub persons: PersonsPayload,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonsPayload {
    pub adults: i32,
    pub children: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreated {
    pub booking_id: String,
    pub booking: Booking,
}

#[derive(Serialize)]
pub struct BookingWithCamp {
    pub booking: Booking,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camp: Option<Camp>,
}

// ── Validation ──

fn validate(req: &CreateBookingRequest) -> Result<(), AppError> {
    if req.customer.name.trim().is_empty() {
        return Err(AppError::required("customer.name"));
    }
    if req.customer.email.trim().is_empty() {
        return Err(AppError::required("customer.email"));
    }
    if !req.customer.email.contains('@') {
        return Err(AppError::validation("Invalid email address"));
    }
    let digits = req.customer.phone.chars().filter(char::is_ascii_digit).count();
    if digits < 10 {
        return Err(AppError::validation("Invalid phone number"));
    }
    if req.persons.adults < 1 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "At least one adult is required",
        ));
    }
    if req.persons.children.is_some_and(|c| c < 0) {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "Children count cannot be negative",
        ));
    }
    Ok(())
}

// ── POST /api/bookings ──

pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> ApiResult<BookingCreated> {
    validate(&req)?;

    let booking_date = NaiveDate::parse_from_str(&req.booking_date, "%Y-%m-%d").map_err(|_| {
        AppError::with_message(ErrorCode::InvalidFormat, "bookingDate must be YYYY-MM-DD")
    })?;

    let camp = db::camps::find_by_id(&state.pool, req.camp_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CampNotFound))?;

    // Capacity check against the availability calendar; dates without a
    // calendar row stay uncapped
    match db::camps::try_reserve_slot(&state.pool, camp.id, booking_date).await? {
        SlotReservation::Full => {
            return Err(AppError::new(ErrorCode::NoAvailability).into());
        }
        SlotReservation::Reserved | SlotReservation::NoCalendar => {}
    }

    let adults = req.persons.adults;
    let children = req.persons.children.unwrap_or(0);

    // Price snapshot: the camp's price at this moment, frozen into the record
    let total_amount = pricing::total(adults, children, camp.price_adult, camp.price_child);
    let now = util::now_millis();

    // The unique constraint on booking_id is authoritative; regenerate on
    // the (rare) collision
    let customer = shared::models::booking::CustomerInfo {
        name: req.customer.name.trim().to_owned(),
        email: req.customer.email.trim().to_owned(),
        phone: req.customer.phone.trim().to_owned(),
    };
    let mut booking_id = util::generate_booking_id();
    let mut attempts = 0;
    loop {
        let create = db::bookings::CreateBooking {
            booking_id: &booking_id,
            camp_id: camp.id,
            customer: &customer,
            booking_date,
            adults,
            children,
            total_amount,
            notes: req.notes.as_deref(),
            now,
        };
        if db::bookings::insert(&state.pool, &create).await? {
            break;
        }
        attempts += 1;
        if attempts >= 5 {
            db::camps::release_slot(&state.pool, camp.id, booking_date).await?;
            return Err(AppError::internal("Could not allocate a booking id").into());
        }
        booking_id = util::generate_booking_id();
    }

    let booking = db::bookings::find_by_booking_id(&state.pool, &booking_id)
        .await?
        .ok_or_else(|| AppError::internal("Booking missing after insert"))?;

    tracing::info!(
        booking_id = %booking_id,
        camp = %camp.slug,
        total_amount,
        "Booking created"
    );

    notify::booking_created(&state, &booking, &camp);

    Ok(Json(ApiResponse::success(BookingCreated {
        booking_id,
        booking,
    })))
}

// ── GET /api/bookings/{id} ──

pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<BookingWithCamp> {
    let booking = db::bookings::find_by_booking_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::BookingNotFound))?;

    let camp = db::camps::find_by_id(&state.pool, booking.camp_id).await?;

    Ok(Json(ApiResponse::success(BookingWithCamp { booking, camp })))
}

// ── POST /api/bookings/{id}/cancel ──

pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Booking> {
    let lock = state.booking_locks.get(&id);
    let _guard = lock.lock().await;

    let booking = db::bookings::find_by_booking_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::BookingNotFound))?;

    match booking.status {
        BookingStatus::Confirmed => {
            return Err(AppError::new(ErrorCode::BookingAlreadyConfirmed).into());
        }
        BookingStatus::Cancelled => {
            return Err(AppError::new(ErrorCode::BookingCancelled).into());
        }
        BookingStatus::Pending => {}
    }

    if !db::bookings::cancel(&state.pool, &id, util::now_millis()).await? {
        // Raced with a settlement between the read and the update
        return Err(AppError::new(ErrorCode::BookingAlreadyConfirmed).into());
    }

    db::camps::release_slot(&state.pool, booking.camp_id, booking.booking_date).await?;

    tracing::info!(booking_id = %id, "Booking cancelled");

    let booking = db::bookings::find_by_booking_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::BookingNotFound))?;

    Ok(Json(ApiResponse::success(booking)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateBookingRequest {
        CreateBookingRequest {
            camp_id: 1,
            customer: CustomerPayload {
                name: "Asha Rao".into(),
                email: "asha@example.com".into(),
                phone: "+91 98765 43210".into(),
            },
            booking_date: "2026-08-15".into(),
            persons: PersonsPayload {
                adults: 2,
                children: Some(1),
            },
            notes: None,
        }
    }

    #[test]
    fn test_accepts_valid_request() {
        assert!(validate(&valid_request()).is_ok());
    }

    #[test]
    fn test_rejects_zero_adults() {
        let mut req = valid_request();
        req.persons.adults = 0;
        let err = validate(&req).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_children_zero_accepted() {
        let mut req = valid_request();
        req.persons.children = Some(0);
        assert!(validate(&req).is_ok());
        req.persons.children = None;
        assert!(validate(&req).is_ok());
        req.persons.children = Some(-1);
        assert!(validate(&req).is_err());
    }

    #[test]
    fn test_rejects_bad_contact_info() {
        let mut req = valid_request();
        req.customer.email = "not-an-email".into();
        assert!(validate(&req).is_err());

        let mut req = valid_request();
        req.customer.phone = "12345".into();
        assert!(validate(&req).is_err());

        let mut req = valid_request();
        req.customer.name = "  ".into();
        assert_eq!(validate(&req).unwrap_err().code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let json = r#"{
            "campId": 1,
            "customer": {"name": "A", "email": "a@b.c", "phone": "9876543210"},
            "bookingDate": "2026-08-15",
            "persons": {"adults": 1},
            "surprise": true
        }"#;
        assert!(serde_json::from_str::<CreateBookingRequest>(json).is_err());
    }
}
