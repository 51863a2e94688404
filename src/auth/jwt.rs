//! JWT Token Handler
//! Mission: Mint and validate signed session tokens

use crate::auth::models::{Claims, Role};
use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

/// JWT handler for token operations.
///
/// Tokens are signed HS256 with a symmetric key shared between mint and
/// verify. Rotating the key invalidates every outstanding token.
pub struct JwtHandler {
    secret: String,
    issuer: String,
    audience: String,
    ttl_hours: i64,
}

impl JwtHandler {
    pub fn new(secret: String, issuer: String, audience: String, ttl_hours: i64) -> Self {
        Self {
            secret,
            issuer,
            audience,
            ttl_hours,
        }
    }

    /// Issue a token for an already-verified administrator.
    ///
    /// Credentials are never re-checked here; the caller is responsible
    /// for verifying them against the admin store first.
    pub fn issue(&self, username: &str) -> Result<String> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(chrono::Duration::hours(self.ttl_hours))
            .context("Invalid timestamp")?
            .timestamp() as usize;

        let claims = Claims {
            sub: username.to_string(),
            role: Role::Administrator,
            iat: now.timestamp() as usize,
            exp: expiration,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        debug!(
            "Issuing JWT for {}, expires in {}h",
            username, self.ttl_hours
        );

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to sign token")
    }

    /// Validate a presented token and extract its claims.
    ///
    /// Signature, issuer, audience, and expiry must all pass; expiry is
    /// checked with zero clock-skew leeway. Every failure collapses into
    /// the same error so callers cannot tell which check rejected it.
    pub fn validate(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .context("Invalid or expired token")?;

        debug!("Validated JWT for {}", decoded.claims.sub);

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_handler() -> JwtHandler {
        JwtHandler::new(
            "test-secret-key-12345".to_string(),
            "fleetgate".to_string(),
            "fleetgate-clients".to_string(),
            2,
        )
    }

    /// Sign arbitrary claims with the handler's parameters.
    fn sign_claims(secret: &str, claims: &Claims) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_then_validate_round_trip() {
        let handler = test_handler();

        let token = handler.issue("alice").unwrap();
        assert!(!token.is_empty());

        let claims = handler.validate(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, Role::Administrator);
        assert_eq!(claims.iss, "fleetgate");
        assert_eq!(claims.aud, "fleetgate-clients");
        assert_eq!(claims.exp, claims.iat + 2 * 3600);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let handler = test_handler();
        let token = handler.issue("alice").unwrap();

        let first = handler.validate(&token).unwrap();
        let second = handler.validate(&token).unwrap();
        assert_eq!(first.sub, second.sub);
        assert_eq!(first.exp, second.exp);
    }

    #[test]
    fn test_malformed_token_rejected() {
        let handler = test_handler();
        assert!(handler.validate("not.a.token").is_err());
        assert!(handler.validate("").is_err());
    }

    #[test]
    fn test_different_secrets_reject() {
        let handler1 = test_handler();
        let handler2 = JwtHandler::new(
            "another-secret".to_string(),
            "fleetgate".to_string(),
            "fleetgate-clients".to_string(),
            2,
        );

        let token = handler1.issue("alice").unwrap();
        assert!(handler2.validate(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let handler = test_handler();
        let now = Utc::now().timestamp() as usize;

        let claims = Claims {
            sub: "alice".to_string(),
            role: Role::Administrator,
            iat: now - 7200,
            exp: now - 60,
            iss: "fleetgate".to_string(),
            aud: "fleetgate-clients".to_string(),
        };
        let token = sign_claims("test-secret-key-12345", &claims);

        assert!(handler.validate(&token).is_err());
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let handler = test_handler();
        let now = Utc::now().timestamp() as usize;

        let claims = Claims {
            sub: "alice".to_string(),
            role: Role::Administrator,
            iat: now,
            exp: now + 7200,
            iss: "someone-else".to_string(),
            aud: "fleetgate-clients".to_string(),
        };
        let token = sign_claims("test-secret-key-12345", &claims);

        assert!(handler.validate(&token).is_err());
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let handler = test_handler();
        let now = Utc::now().timestamp() as usize;

        let claims = Claims {
            sub: "alice".to_string(),
            role: Role::Administrator,
            iat: now,
            exp: now + 7200,
            iss: "fleetgate".to_string(),
            aud: "other-service".to_string(),
        };
        let token = sign_claims("test-secret-key-12345", &claims);

        assert!(handler.validate(&token).is_err());
    }
}
