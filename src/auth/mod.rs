//! Authentication Module
//! Mission: Secure vehicle mutations with JWT session tokens

pub mod admin_store;
pub mod api;
pub mod jwt;
pub mod middleware;
pub mod models;

pub use admin_store::AdminStore;
pub use api::AuthState;
pub use jwt::JwtHandler;
pub use middleware::auth_middleware;
