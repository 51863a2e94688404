//! Runtime Configuration
//! Mission: Load server settings from the environment

use std::env;
use tracing::warn;

/// Demo signing key used when `FLEETGATE_JWT_SECRET` is unset. Fine for
/// local development, never for a real deployment.
const DEMO_JWT_SECRET: &str = "ThisKeyMustBeLongerAndSecret!123";

const DEFAULT_ISSUER: &str = "fleetgate";
const DEFAULT_AUDIENCE: &str = "fleetgate-clients";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 2;
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Server configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    pub token_ttl_hours: i64,
}

impl Config {
    /// Resolve configuration from environment variables, falling back to
    /// demo defaults.
    pub fn from_env() -> Self {
        let jwt_secret = env::var("FLEETGATE_JWT_SECRET").unwrap_or_else(|_| {
            warn!("⚠️  FLEETGATE_JWT_SECRET not set, using demo signing key");
            DEMO_JWT_SECRET.to_string()
        });

        let jwt_issuer =
            env::var("FLEETGATE_JWT_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string());
        let jwt_audience =
            env::var("FLEETGATE_JWT_AUDIENCE").unwrap_or_else(|_| DEFAULT_AUDIENCE.to_string());

        let token_ttl_hours = env::var("FLEETGATE_TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(DEFAULT_TOKEN_TTL_HOURS);

        let listen_addr =
            env::var("FLEETGATE_LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        Self {
            listen_addr,
            jwt_secret,
            jwt_issuer,
            jwt_audience,
            token_ttl_hours,
        }
    }

    /// Fixed demo configuration for tests
    #[doc(hidden)]
    pub fn for_tests() -> Self {
        Self {
            listen_addr: "127.0.0.1:0".to_string(),
            jwt_secret: "test-secret-key-12345".to_string(),
            jwt_issuer: DEFAULT_ISSUER.to_string(),
            jwt_audience: DEFAULT_AUDIENCE.to_string(),
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
        }
    }
}
