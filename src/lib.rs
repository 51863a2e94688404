//! FleetGate Backend Library
//!
//! Exposes the application modules for the server binary and for
//! integration tests that drive the router in-process.

pub mod app;
pub mod auth;
pub mod config;
pub mod middleware;
pub mod vehicles;

pub use app::build_router;
pub use config::Config;
