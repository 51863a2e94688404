//! Vehicle API Endpoints
//! Mission: Expose public reads and token-gated mutations of the registry

use crate::vehicles::{
    models::{Vehicle, VehicleDraft},
    store::VehicleStore,
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// List vehicles - GET /vehicles (public)
pub async fn list_vehicles(State(store): State<Arc<VehicleStore>>) -> Json<Vec<Vehicle>> {
    Json(store.list())
}

/// Create vehicle - POST /vehicles (protected)
pub async fn create_vehicle(
    State(store): State<Arc<VehicleStore>>,
    Json(draft): Json<VehicleDraft>,
) -> impl IntoResponse {
    let vehicle = store.create(draft);
    let location = format!("/vehicles/{}", vehicle.id);

    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(vehicle),
    )
}

/// Update vehicle - PUT /vehicles/:id (protected)
///
/// Wholesale replacement; the path id wins over anything in the body.
pub async fn update_vehicle(
    State(store): State<Arc<VehicleStore>>,
    Path(id): Path<u32>,
    Json(draft): Json<VehicleDraft>,
) -> Result<Json<Vehicle>, VehicleApiError> {
    store
        .update(id, draft)
        .map(Json)
        .ok_or(VehicleApiError::NotFound)
}

/// Delete vehicle - DELETE /vehicles/:id (protected)
pub async fn delete_vehicle(
    State(store): State<Arc<VehicleStore>>,
    Path(id): Path<u32>,
) -> Result<StatusCode, VehicleApiError> {
    if store.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(VehicleApiError::NotFound)
    }
}

/// Vehicle API errors
#[derive(Debug)]
pub enum VehicleApiError {
    NotFound,
}

impl IntoResponse for VehicleApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            VehicleApiError::NotFound => (StatusCode::NOT_FOUND, "Vehicle not found"),
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_response() {
        let resp = VehicleApiError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
