//! WhatsApp notifications via the Twilio REST API (no SDK dependency)

use super::BookingSnapshot;
use crate::state::AppState;

/// Best-effort WhatsApp send; skipped with a log line when Twilio is not
/// configured, and failures never propagate
pub async fn send_booking_whatsapp(state: &AppState, s: &BookingSnapshot) {
    let Some(ref twilio) = state.twilio else {
        tracing::debug!(booking_id = %s.booking_id, "Twilio not configured, skipping WhatsApp");
        return;
    };

    // WhatsApp requires a country code prefix
    let to = if s.customer_phone.starts_with('+') {
        s.customer_phone.clone()
    } else {
        format!("+{}", s.customer_phone)
    };

    let body = format!(
        "Booking Confirmed!\n\n\
         Booking ID: {id}\n\
         Camp: {camp}\n\
         Date: {date}\n\n\
         Your camping adventure is all set! We'll send you a detailed\n\
         itinerary 48 hours before your trip.\n\n\
         Contact: {phone}\n\n\
         - WeekendCamps Team",
        id = s.booking_id,
        camp = s.camp_title,
        date = s.booking_date,
        phone = state.contact_phone,
    );

    let url = format!(
        "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
        twilio.account_sid
    );

    let result = state
        .http
        .post(&url)
        .basic_auth(&twilio.account_sid, Some(&twilio.auth_token))
        .form(&[
            ("From", format!("whatsapp:{}", twilio.whatsapp_number)),
            ("To", format!("whatsapp:{to}")),
            ("Body", body),
        ])
        .send()
        .await;

    match result {
        Ok(r) if r.status().is_success() => {
            tracing::info!(booking_id = %s.booking_id, "WhatsApp notification sent");
        }
        Ok(r) => {
            tracing::error!(
                booking_id = %s.booking_id,
                status = %r.status(),
                "WhatsApp send rejected"
            );
        }
        Err(e) => {
            tracing::error!(booking_id = %s.booking_id, error = %e, "WhatsApp send failed");
        }
    }
}
