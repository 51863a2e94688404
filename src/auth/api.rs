//! Authentication API Endpoints
//! Mission: Provide administrator registration and login endpoints

use crate::auth::{
    admin_store::{AdminStore, RegisterError},
    jwt::JwtHandler,
    models::{CredentialRequest, LoginResponse, MessageResponse},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared auth state
#[derive(Clone)]
pub struct AuthState {
    pub admin_store: Arc<AdminStore>,
    pub jwt_handler: Arc<JwtHandler>,
}

/// Register endpoint - POST /admin/register
pub async fn register(
    State(state): State<AuthState>,
    Json(payload): Json<CredentialRequest>,
) -> Result<Json<MessageResponse>, AuthApiError> {
    if payload.username.is_empty() || payload.secret.is_empty() {
        return Err(AuthApiError::InvalidInput);
    }

    state
        .admin_store
        .register(&payload.username, &payload.secret)
        .map_err(|e| match e.downcast_ref::<RegisterError>() {
            Some(RegisterError::AlreadyExists) => AuthApiError::AlreadyExists,
            None => AuthApiError::InternalError,
        })?;

    info!("✅ Administrator registered: {}", payload.username);

    Ok(Json(MessageResponse {
        message: "Administrator registered.".to_string(),
    }))
}

/// Login endpoint - POST /admin/login
pub async fn login(
    State(state): State<AuthState>,
    Json(payload): Json<CredentialRequest>,
) -> Result<Json<LoginResponse>, AuthApiError> {
    info!("🔐 Login attempt: {}", payload.username);

    // A missing identity and a wrong secret produce the same failure.
    let admin = state
        .admin_store
        .verify(&payload.username, &payload.secret)
        .ok_or_else(|| {
            warn!("❌ Failed login attempt: {}", payload.username);
            AuthApiError::InvalidCredentials
        })?;

    let token = state
        .jwt_handler
        .issue(&admin.username)
        .map_err(|_| AuthApiError::InternalError)?;

    info!("✅ Login successful: {}", admin.username);

    Ok(Json(LoginResponse { token }))
}

/// Auth API errors
#[derive(Debug)]
pub enum AuthApiError {
    InvalidInput,
    AlreadyExists,
    InvalidCredentials,
    InternalError,
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthApiError::InvalidInput => (
                StatusCode::BAD_REQUEST,
                "Username and secret must be non-empty",
            ),
            AuthApiError::AlreadyExists => {
                (StatusCode::BAD_REQUEST, "Administrator already exists")
            }
            AuthApiError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid username or secret")
            }
            AuthApiError::InternalError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, message).into_response()
    }
}
