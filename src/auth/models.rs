//! Authentication Models
//! Mission: Define administrator identity and token claim structures

use serde::{Deserialize, Serialize};

/// Registered administrator identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub username: String,
    #[serde(skip_serializing)]
    pub secret_hash: String, // bcrypt hash - never serialize
    pub created_at: String,
}

/// Roles carried in issued tokens.
///
/// Every administrator currently holds the single `Administrator` role;
/// the enum exists so handlers can enforce role restrictions if more
/// roles are ever added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "Administrator")]
    Administrator,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Administrator => "Administrator",
        }
    }
}

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // subject (username)
    pub role: Role,
    pub iat: usize, // issued-at timestamp
    pub exp: usize, // expiration timestamp
    pub iss: String,
    pub aud: String,
}

/// Body for POST /admin/register and POST /admin/login
#[derive(Debug, Deserialize)]
pub struct CredentialRequest {
    pub username: String,
    pub secret: String,
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Confirmation message for registration
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Administrator).unwrap();
        assert_eq!(json, r#""Administrator""#);

        let role: Role = serde_json::from_str(r#""Administrator""#).unwrap();
        assert_eq!(role, Role::Administrator);
    }

    #[test]
    fn test_admin_secret_hash_never_serialized() {
        let admin = Admin {
            username: "admin".to_string(),
            secret_hash: "$2b$12$secret".to_string(),
            created_at: "2025-01-01T00:00:00Z".to_string(),
        };

        let json = serde_json::to_string(&admin).unwrap();
        assert!(!json.contains("secret_hash"));
        assert!(!json.contains("$2b$12$"));
    }

    #[test]
    fn test_credential_request_ignores_extra_fields() {
        let req: CredentialRequest =
            serde_json::from_str(r#"{"username":"alice","secret":"s3cret","id":42}"#).unwrap();
        assert_eq!(req.username, "alice");
        assert_eq!(req.secret, "s3cret");
    }
}
