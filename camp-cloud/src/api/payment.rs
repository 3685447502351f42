//! Payment endpoints — gateway order creation and verification
//!
//! POST /api/payment/create-order — mint (or return) the gateway order
//! POST /api/payment/verify       — settle the booking on a verified signature
//!
//! Order creation is idempotent per booking: an attached order is answered
//! as-is, never re-minted. Verification checks the cryptographic proof and
//! the stored order id before any state mutation; settlement itself is a
//! conditional update so concurrent callbacks settle exactly once.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::booking::{Booking, BookingStatus, PaymentStatus};
use shared::models::camp::Camp;

use crate::db;
use crate::error::ServiceError;
use crate::razorpay::{self, GatewayError};
use crate::state::AppState;
use crate::{notify, util};

type ApiResult<T> = Result<Json<ApiResponse<T>>, ServiceError>;

// ── Request / Response types ──

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateOrderRequest {
    pub booking_id: String,
    /// The amount the client showed the customer; cross-checked against the
    /// frozen booking total, never trusted as the charge amount
    pub amount: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: String,
    /// Minor units (paise)
    pub amount: i64,
    pub currency: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VerifyPaymentRequest {
    pub booking_id: String,
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

#[derive(Serialize)]
pub struct VerifiedBooking {
    pub booking: Booking,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camp: Option<Camp>,
}

// ── POST /api/payment/create-order ──

pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> ApiResult<OrderResponse> {
    if req.booking_id.trim().is_empty() {
        return Err(AppError::required("bookingId").into());
    }

    // Serialize order creation per booking so the gateway is never asked
    // for two live orders
    let lock = state.booking_locks.get(&req.booking_id);
    let _guard = lock.lock().await;

    let booking = db::bookings::find_by_booking_id(&state.pool, &req.booking_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::BookingNotFound))?;

    match booking.status {
        BookingStatus::Cancelled => {
            return Err(AppError::new(ErrorCode::BookingCancelled).into());
        }
        BookingStatus::Confirmed => {
            return Err(AppError::new(ErrorCode::BookingAlreadyConfirmed).into());
        }
        BookingStatus::Pending => {}
    }

    if req.amount != booking.total_amount {
        return Err(AppError::new(ErrorCode::AmountMismatch)
            .with_detail("expected", booking.total_amount)
            .into());
    }

    // Idempotent: answer with the attached order when one exists
    if let Some(order_id) = booking.razorpay_order_id {
        return Ok(Json(ApiResponse::success(OrderResponse {
            order_id,
            amount: razorpay::to_minor_units(booking.total_amount),
            currency: "INR".into(),
        })));
    }

    let order = razorpay::create_order(
        &state.http,
        &state.razorpay_key_id,
        &state.razorpay_key_secret,
        &booking.booking_id,
        razorpay::to_minor_units(booking.total_amount),
    )
    .await
    .map_err(|e| gateway_error(&booking.booking_id, e))?;

    let attached = db::bookings::attach_gateway_order(
        &state.pool,
        &booking.booking_id,
        &order.order_id,
        util::now_millis(),
    )
    .await?;

    if !attached {
        // Lost a race to a concurrent call; answer with the winner's order
        let current = db::bookings::find_by_booking_id(&state.pool, &booking.booking_id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::BookingNotFound))?;
        if let Some(order_id) = current.razorpay_order_id {
            return Ok(Json(ApiResponse::success(OrderResponse {
                order_id,
                amount: razorpay::to_minor_units(current.total_amount),
                currency: "INR".into(),
            })));
        }
        return Err(AppError::new(ErrorCode::PaymentOrderFailed).into());
    }

    tracing::info!(
        booking_id = %booking.booking_id,
        order_id = %order.order_id,
        amount = order.amount,
        "Gateway order created"
    );

    Ok(Json(ApiResponse::success(OrderResponse {
        order_id: order.order_id,
        amount: order.amount,
        currency: order.currency,
    })))
}

fn gateway_error(booking_id: &str, e: GatewayError) -> ServiceError {
    match e {
        GatewayError::Timeout => {
            // Order state at the gateway is unknown; leave the booking
            // untouched and let the client retry after reconciliation
            tracing::error!(booking_id = %booking_id, "Gateway order creation timed out");
            AppError::new(ErrorCode::TimeoutError).into()
        }
        GatewayError::Transport(msg) => {
            tracing::error!(booking_id = %booking_id, error = %msg, "Gateway unreachable");
            AppError::new(ErrorCode::NetworkError).into()
        }
        GatewayError::Rejected(msg) => {
            tracing::error!(booking_id = %booking_id, error = %msg, "Gateway rejected order");
            AppError::new(ErrorCode::PaymentOrderFailed).into()
        }
    }
}

// ── POST /api/payment/verify ──

pub async fn verify_payment(
    State(state): State<AppState>,
    Json(req): Json<VerifyPaymentRequest>,
) -> ApiResult<VerifiedBooking> {
    for (field, value) in [
        ("bookingId", &req.booking_id),
        ("razorpayOrderId", &req.razorpay_order_id),
        ("razorpayPaymentId", &req.razorpay_payment_id),
        ("razorpaySignature", &req.razorpay_signature),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::required(field).into());
        }
    }

    let lock = state.booking_locks.get(&req.booking_id);
    let _guard = lock.lock().await;

    let booking = db::bookings::find_by_booking_id(&state.pool, &req.booking_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::BookingNotFound))?;

    // Signature first: nothing mutates unless the proof checks out
    if !razorpay::verify_payment_signature(
        &req.razorpay_order_id,
        &req.razorpay_payment_id,
        &req.razorpay_signature,
        &state.razorpay_key_secret,
    ) {
        tracing::warn!(
            booking_id = %booking.booking_id,
            order_id = %req.razorpay_order_id,
            "Payment signature verification failed"
        );
        return Err(AppError::new(ErrorCode::SignatureInvalid).into());
    }

    // The callback must reference the order this booking actually holds
    if booking.razorpay_order_id.as_deref() != Some(req.razorpay_order_id.as_str()) {
        tracing::warn!(
            booking_id = %booking.booking_id,
            order_id = %req.razorpay_order_id,
            "Verified signature for a foreign order id"
        );
        return Err(AppError::new(ErrorCode::OrderMismatch).into());
    }

    if booking.status == BookingStatus::Cancelled {
        return Err(AppError::new(ErrorCode::BookingCancelled).into());
    }

    let settled = db::bookings::settle_payment(
        &state.pool,
        &db::bookings::Settlement {
            booking_id: &booking.booking_id,
            payment_id: &req.razorpay_payment_id,
            signature: &req.razorpay_signature,
            now: util::now_millis(),
        },
    )
    .await?;

    let booking = db::bookings::find_by_booking_id(&state.pool, &booking.booking_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::BookingNotFound))?;

    if !settled {
        // Someone else settled first. The same payment id gets an idempotent
        // success; anything else is a genuine conflict.
        if booking.payment_status == PaymentStatus::Completed
            && booking.razorpay_payment_id.as_deref() == Some(req.razorpay_payment_id.as_str())
        {
            let camp = db::camps::find_by_id(&state.pool, booking.camp_id).await?;
            return Ok(Json(ApiResponse::success_with_message(
                "Payment already verified",
                VerifiedBooking { booking, camp },
            )));
        }
        return Err(AppError::new(ErrorCode::BookingAlreadyConfirmed).into());
    }

    tracing::info!(
        booking_id = %booking.booking_id,
        payment_id = %req.razorpay_payment_id,
        "Payment verified, booking confirmed"
    );

    let camp = db::camps::find_by_id(&state.pool, booking.camp_id).await?;
    if let Some(ref camp) = camp {
        notify::payment_confirmed(&state, &booking, camp);
    }

    Ok(Json(ApiResponse::success_with_message(
        "Payment verified successfully",
        VerifiedBooking { booking, camp },
    )))
}
