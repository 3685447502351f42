//! Email sending via AWS SES

use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use shared::models::contact::Contact;

use super::BookingSnapshot;
use crate::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

async fn send(state: &AppState, to: &str, subject: &str, body_text: String) -> Result<(), BoxError> {
    let subject = Content::builder().data(subject).build()?;

    let body = Body::builder()
        .text(Content::builder().data(body_text).build()?)
        .build();

    let message = Message::builder().subject(subject).body(body).build();

    state
        .ses
        .send_email()
        .from_email_address(&state.ses_from_email)
        .destination(Destination::builder().to_addresses(to).build())
        .content(EmailContent::builder().simple(message).build())
        .send()
        .await?;

    Ok(())
}

pub async fn send_booking_confirmation(
    state: &AppState,
    s: &BookingSnapshot,
) -> Result<(), BoxError> {
    let subject = format!("Booking Confirmation - {}", s.booking_id);

    let body_text = format!(
        "Dear {name},\n\n\
         Thank you for booking with WeekendCamps!\n\n\
         Booking ID: {id}\n\
         Camp: {camp}\n\
         Date: {date}\n\
         Adults: {adults}\n\
         Children: {children}\n\
         Total Amount: Rs. {total}\n\n\
         Save your booking ID. You'll receive a detailed itinerary 48 hours\n\
         before your trip.\n\n\
         Track your booking: {base}/track-booking?id={id}\n\n\
         For any queries: {phone}\n\n\
         - WeekendCamps Team",
        name = s.customer_name,
        id = s.booking_id,
        camp = s.camp_title,
        date = s.booking_date,
        adults = s.adults,
        children = s.children,
        total = s.total_amount,
        base = state.public_base_url,
        phone = state.contact_phone,
    );

    send(state, &s.customer_email, &subject, body_text).await?;
    tracing::info!(booking_id = %s.booking_id, to = %s.customer_email, "Booking confirmation sent");
    Ok(())
}

pub async fn send_admin_notification(
    state: &AppState,
    s: &BookingSnapshot,
) -> Result<(), BoxError> {
    let subject = format!("New Booking Received - {}", s.booking_id);

    let body_text = format!(
        "New booking received.\n\n\
         Booking ID: {id}\n\
         Customer: {name} <{email}> ({phone})\n\
         Camp: {camp}\n\
         Date: {date}\n\
         Party: {adults} adults, {children} children\n\
         Total Amount: Rs. {total}",
        id = s.booking_id,
        name = s.customer_name,
        email = s.customer_email,
        phone = s.customer_phone,
        camp = s.camp_title,
        date = s.booking_date,
        adults = s.adults,
        children = s.children,
        total = s.total_amount,
    );

    send(state, &state.admin_email, &subject, body_text).await?;
    tracing::info!(booking_id = %s.booking_id, "Admin notification sent");
    Ok(())
}

pub async fn send_contact_notification(state: &AppState, c: &Contact) -> Result<(), BoxError> {
    let subject = format!("New Contact Inquiry: {}", c.subject);

    let body_text = format!(
        "From: {name} <{email}> ({phone})\n\
         Subject: {subject}\n\n\
         {message}",
        name = c.name,
        email = c.email,
        phone = c.phone,
        subject = c.subject,
        message = c.message,
    );

    send(state, &state.admin_email, &subject, body_text).await?;
    tracing::info!(contact_id = c.id, "Contact notification sent");
    Ok(())
}
