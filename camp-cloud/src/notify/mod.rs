//! Lifecycle notifications — fire-and-forget
//!
//! Dispatch never blocks the request and never fails the lifecycle
//! transition that triggered it: sends run on spawned tasks, every failure
//! is logged with the booking id and swallowed here. No ordering guarantee
//! relative to the HTTP response.

mod email;
mod sms;

use shared::models::booking::Booking;
use shared::models::camp::Camp;
use shared::models::contact::Contact;

use crate::state::AppState;

/// Snapshot handed to senders, detached from the live record
#[derive(Clone)]
pub struct BookingSnapshot {
    pub booking_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub camp_title: String,
    pub booking_date: String,
    pub adults: i32,
    pub children: i32,
    pub total_amount: i64,
}

impl BookingSnapshot {
    fn new(booking: &Booking, camp: &Camp) -> Self {
        Self {
            booking_id: booking.booking_id.clone(),
            customer_name: booking.customer.name.clone(),
            customer_email: booking.customer.email.clone(),
            customer_phone: booking.customer.phone.clone(),
            camp_title: camp.title.clone(),
            booking_date: booking.booking_date.format("%d %b %Y").to_string(),
            adults: booking.persons.adults,
            children: booking.persons.children,
            total_amount: booking.total_amount,
        }
    }
}

/// Booking created: confirmation to the customer, heads-up to the admin,
/// WhatsApp when Twilio is configured
pub fn booking_created(state: &AppState, booking: &Booking, camp: &Camp) {
    let snapshot = BookingSnapshot::new(booking, camp);
    let state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = email::send_booking_confirmation(&state, &snapshot).await {
            tracing::error!(
                booking_id = %snapshot.booking_id,
                error = %e,
                "Booking confirmation email failed"
            );
        }
        if let Err(e) = email::send_admin_notification(&state, &snapshot).await {
            tracing::error!(
                booking_id = %snapshot.booking_id,
                error = %e,
                "Admin notification email failed"
            );
        }
        sms::send_booking_whatsapp(&state, &snapshot).await;
    });
}

/// Payment verified: confirmation to the customer and the admin
pub fn payment_confirmed(state: &AppState, booking: &Booking, camp: &Camp) {
    let snapshot = BookingSnapshot::new(booking, camp);
    let state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = email::send_booking_confirmation(&state, &snapshot).await {
            tracing::error!(
                booking_id = %snapshot.booking_id,
                error = %e,
                "Payment confirmation email failed"
            );
        }
        if let Err(e) = email::send_admin_notification(&state, &snapshot).await {
            tracing::error!(
                booking_id = %snapshot.booking_id,
                error = %e,
                "Admin notification email failed"
            );
        }
    });
}

/// Contact form received: notify the admin
pub fn contact_received(state: &AppState, contact: &Contact) {
    let state = state.clone();
    let contact = contact.clone();
    tokio::spawn(async move {
        if let Err(e) = email::send_contact_notification(&state, &contact).await {
            tracing::error!(
                contact_id = contact.id,
                error = %e,
                "Contact notification email failed"
            );
        }
    });
}
