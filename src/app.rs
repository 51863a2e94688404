//! Application Assembly
//! Mission: Wire stores, token handler, and routers into one service

use crate::{
    auth::{api as auth_api, auth_middleware, AdminStore, AuthState, JwtHandler},
    config::Config,
    middleware::request_logging,
    vehicles::{api as vehicles_api, VehicleStore},
};
use anyhow::Result;
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Build the full application router.
///
/// Route groups mirror the auth requirements: the admin router handles
/// registration and login, the public router serves unauthenticated reads,
/// and the protected router carries every mutation behind the JWT gate.
pub fn build_router(config: &Config) -> Result<Router> {
    let admin_store = Arc::new(AdminStore::with_seed_admin()?);
    let jwt_handler = Arc::new(JwtHandler::new(
        config.jwt_secret.clone(),
        config.jwt_issuer.clone(),
        config.jwt_audience.clone(),
        config.token_ttl_hours,
    ));
    let vehicle_store = Arc::new(VehicleStore::new());

    let auth_state = AuthState {
        admin_store,
        jwt_handler: jwt_handler.clone(),
    };

    let admin_routes = Router::new()
        .route("/admin/register", post(auth_api::register))
        .route("/admin/login", post(auth_api::login))
        .with_state(auth_state);

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/vehicles", get(vehicles_api::list_vehicles))
        .with_state(vehicle_store.clone());

    let protected_routes = Router::new()
        .route("/vehicles", post(vehicles_api::create_vehicle))
        .route("/vehicles/:id", put(vehicles_api::update_vehicle))
        .route("/vehicles/:id", delete(vehicles_api::delete_vehicle))
        .route_layer(middleware::from_fn_with_state(
            jwt_handler,
            auth_middleware,
        ))
        .with_state(vehicle_store);

    let app = Router::new()
        .merge(admin_routes)
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive());

    Ok(app)
}

/// Health check - GET /health
async fn health_check() -> &'static str {
    "🚗 FleetGate operational"
}
