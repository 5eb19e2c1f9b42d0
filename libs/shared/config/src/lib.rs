use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub booking_api_url: String,
    pub booking_api_key: String,
    pub bind_port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            booking_api_url: env::var("BOOKING_API_URL")
                .unwrap_or_else(|_| {
                    warn!("BOOKING_API_URL not set, using empty value");
                    String::new()
                }),
            booking_api_key: env::var("BOOKING_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("BOOKING_API_KEY not set, using empty value");
                    String::new()
                }),
            bind_port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.booking_api_url.is_empty()
    }
}
