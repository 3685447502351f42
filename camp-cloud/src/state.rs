//! Application state for camp-cloud

use std::sync::Arc;

use aws_sdk_sesv2::Client as SesClient;
use dashmap::DashMap;
use sqlx::PgPool;
use tokio::sync::Mutex;

use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Twilio credentials for WhatsApp notifications; absent when not configured
#[derive(Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub whatsapp_number: String,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// AWS SES client for sending emails
    pub ses: SesClient,
    /// Outbound HTTP client (Razorpay, Twilio, OpenWeather) with a bounded
    /// timeout; a gateway timeout means "state unknown", not "failed"
    pub http: reqwest::Client,
    /// Razorpay API key id
    pub razorpay_key_id: String,
    /// Razorpay API key secret
    pub razorpay_key_secret: String,
    /// SES sender email address
    pub ses_from_email: String,
    /// Admin notification address
    pub admin_email: String,
    /// Public site base URL
    pub public_base_url: String,
    /// Support phone shown in notifications
    pub contact_phone: String,
    /// Twilio credentials (WhatsApp), when configured
    pub twilio: Option<TwilioConfig>,
    /// OpenWeather API key, when configured
    pub openweather_api_key: Option<String>,
    /// Per-booking serialization locks
    pub booking_locks: BookingLocks,
}

impl AppState {
    /// Create a new AppState
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let ses = SesClient::new(&aws_config);

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.gateway_timeout_secs))
            .build()?;

        let twilio = match (
            &config.twilio_account_sid,
            &config.twilio_auth_token,
            &config.twilio_whatsapp_number,
        ) {
            (Some(sid), Some(token), Some(number)) => Some(TwilioConfig {
                account_sid: sid.clone(),
                auth_token: token.clone(),
                whatsapp_number: number.clone(),
            }),
            _ => {
                tracing::info!("Twilio not configured, WhatsApp notifications disabled");
                None
            }
        };

        Ok(Self {
            pool,
            ses,
            http,
            razorpay_key_id: config.razorpay_key_id.clone(),
            razorpay_key_secret: config.razorpay_key_secret.clone(),
            ses_from_email: config.ses_from_email.clone(),
            admin_email: config.admin_email.clone(),
            public_base_url: config.public_base_url.clone(),
            contact_phone: config.contact_phone.clone(),
            twilio,
            openweather_api_key: config.openweather_api_key.clone(),
            booking_locks: BookingLocks::new(),
        })
    }
}

/// Per-booking serialization locks
///
/// Payment-order creation and verification for one booking must not
/// interleave. The conditional updates in the data layer are the
/// authoritative backstop; the lock keeps the gateway from being asked for
/// two live orders in the first place.
#[derive(Clone)]
pub struct BookingLocks {
    inner: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl BookingLocks {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Get (or create) the lock for a booking id
    pub fn get(&self, booking_id: &str) -> Arc<Mutex<()>> {
        self.inner
            .entry(booking_id.to_owned())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drop locks nobody currently holds
    pub fn cleanup(&self) {
        self.inner.retain(|_, lock| Arc::strong_count(lock) > 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_booking_gets_same_lock() {
        let locks = BookingLocks::new();
        let a = locks.get("BK20260101ABCD2345");
        let b = locks.get("BK20260101ABCD2345");
        assert!(Arc::ptr_eq(&a, &b));

        let c = locks.get("BK20260101WXYZ6789");
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[test]
    fn test_cleanup_keeps_held_locks() {
        let locks = BookingLocks::new();
        let held = locks.get("BK20260101ABCD2345");
        locks.get("BK20260101WXYZ6789"); // unheld, drops immediately

        locks.cleanup();

        assert_eq!(locks.inner.len(), 1);
        assert!(Arc::ptr_eq(&held, &locks.get("BK20260101ABCD2345")));
    }
}
