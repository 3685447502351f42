//! Razorpay integration via REST API (no SDK dependency)
//!
//! Stateless boundary: order creation and signature verification only.
//! All persistence stays with the booking handlers, so the module is
//! substitutable for any gateway with the same two primitives.

use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Gateway call failure classes.
///
/// `Timeout` means the order state at Razorpay is unknown, not failed;
/// callers surface it separately so the operator can reconcile.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway request timed out")]
    Timeout,
    #[error("gateway request failed: {0}")]
    Transport(String),
    #[error("gateway rejected request: {0}")]
    Rejected(String),
}

/// Order minted at the gateway; the client-side payment widget completes
/// against it
#[derive(Debug, Clone)]
pub struct GatewayOrder {
    pub order_id: String,
    /// Amount in minor units (paise)
    pub amount: i64,
    pub currency: String,
}

/// Convert whole rupees to paise.
///
/// Razorpay expects the smallest currency unit; INR has two decimal
/// subunits, so the factor is fixed at 100. A zero-decimal currency would
/// need a different factor.
pub fn to_minor_units(amount: i64) -> i64 {
    amount * 100
}

/// Create a Razorpay order keyed by the booking identifier
pub async fn create_order(
    http: &reqwest::Client,
    key_id: &str,
    key_secret: &str,
    receipt: &str,
    amount_paise: i64,
) -> Result<GatewayOrder, GatewayError> {
    let body = serde_json::json!({
        "amount": amount_paise,
        "currency": "INR",
        "receipt": receipt,
        "notes": { "booking_id": receipt },
    });

    let resp = http
        .post("https://api.razorpay.com/v1/orders")
        .basic_auth(key_id, Some(key_secret))
        .json(&body)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::Transport(e.to_string())
            }
        })?;

    let resp: serde_json::Value = resp
        .json()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;

    match resp["id"].as_str() {
        Some(id) => Ok(GatewayOrder {
            order_id: id.to_string(),
            amount: resp["amount"].as_i64().unwrap_or(amount_paise),
            currency: resp["currency"].as_str().unwrap_or("INR").to_string(),
        }),
        None => Err(GatewayError::Rejected(resp.to_string())),
    }
}

/// Verify a Razorpay payment signature (HMAC-SHA256, constant-time)
///
/// The signature covers `"{order_id}|{payment_id}"` keyed by the API key
/// secret. Comparison goes through `Mac::verify_slice`, never string
/// equality.
pub fn verify_payment_signature(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    secret: &str,
) -> bool {
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(format!("{order_id}|{payment_id}").as_bytes());

    let Ok(sig_bytes) = hex::decode(signature) else {
        return false;
    };
    mac.verify_slice(&sig_bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(order_id: &str, payment_id: &str, secret: &str) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(format!("{order_id}|{payment_id}").as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_accepts_correct_signature() {
        let sig = sign("order_abc", "pay_xyz", "s3cret");
        assert!(verify_payment_signature(
            "order_abc",
            "pay_xyz",
            &sig,
            "s3cret"
        ));
    }

    #[test]
    fn test_rejects_tampered_signature() {
        let mut sig = sign("order_abc", "pay_xyz", "s3cret");
        let last = sig.pop().unwrap();
        sig.push(if last == '0' { '1' } else { '0' });
        assert!(!verify_payment_signature(
            "order_abc",
            "pay_xyz",
            &sig,
            "s3cret"
        ));
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let sig = sign("order_abc", "pay_xyz", "s3cret");
        assert!(!verify_payment_signature(
            "order_abc",
            "pay_xyz",
            &sig,
            "another-secret"
        ));
    }

    #[test]
    fn test_rejects_swapped_identifiers() {
        let sig = sign("order_abc", "pay_xyz", "s3cret");
        assert!(!verify_payment_signature(
            "pay_xyz",
            "order_abc",
            &sig,
            "s3cret"
        ));
    }

    #[test]
    fn test_rejects_non_hex_signature() {
        assert!(!verify_payment_signature(
            "order_abc",
            "pay_xyz",
            "zz-not-hex",
            "s3cret"
        ));
    }

    #[test]
    fn test_rupees_to_paise() {
        assert_eq!(to_minor_units(2297), 229_700);
        assert_eq!(to_minor_units(1), 100);
        assert_eq!(to_minor_units(0), 0);
    }
}
