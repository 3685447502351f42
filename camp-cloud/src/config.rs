//! Service configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Service configuration, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Razorpay API key id
    pub razorpay_key_id: String,
    /// Razorpay API key secret (also the HMAC key for signature verification)
    pub razorpay_key_secret: String,
    /// Timeout for outbound gateway/notification HTTP calls, in seconds
    pub gateway_timeout_secs: u64,
    /// SES sender email address
    pub ses_from_email: String,
    /// Address receiving new-booking and contact-form notifications
    pub admin_email: String,
    /// Public site base URL (booking-tracking links in notifications)
    pub public_base_url: String,
    /// Support phone shown in notifications
    pub contact_phone: String,
    /// Twilio credentials; WhatsApp sends are skipped when unset
    pub twilio_account_sid: Option<String>,
    pub twilio_auth_token: Option<String>,
    pub twilio_whatsapp_number: Option<String>,
    /// OpenWeather API key; the weather endpoint degrades to null when unset
    pub openweather_api_key: Option<String>,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development
    /// environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            razorpay_key_id: Self::require_secret("RAZORPAY_KEY_ID", &environment)?,
            razorpay_key_secret: Self::require_secret("RAZORPAY_KEY_SECRET", &environment)?,
            gateway_timeout_secs: std::env::var("GATEWAY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            ses_from_email: std::env::var("SES_FROM_EMAIL")
                .unwrap_or_else(|_| "noreply@weekendcamps.in".into()),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "bookings@weekendcamps.in".into()),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "https://weekendcamps.in".into()),
            contact_phone: std::env::var("CONTACT_PHONE")
                .unwrap_or_else(|_| "+91 98765 43210".into()),
            twilio_account_sid: std::env::var("TWILIO_ACCOUNT_SID")
                .ok()
                .filter(|s| !s.is_empty()),
            twilio_auth_token: std::env::var("TWILIO_AUTH_TOKEN")
                .ok()
                .filter(|s| !s.is_empty()),
            twilio_whatsapp_number: std::env::var("TWILIO_WHATSAPP_NUMBER")
                .ok()
                .filter(|s| !s.is_empty()),
            openweather_api_key: std::env::var("OPENWEATHER_API_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
            environment,
        })
    }
}
