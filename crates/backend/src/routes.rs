use axum::{
    routing::{get, post},
    Router,
};
use contracts::domain::a025_vehicle::aggregate::{VEHICLE_FACETS_RESOURCE, VEHICLE_RESOURCE};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A025 Vehicle handlers
        .route(VEHICLE_RESOURCE, get(handlers::a025_vehicle::list_paginated))
        .route(VEHICLE_FACETS_RESOURCE, get(handlers::a025_vehicle::facets))
        .route(
            "/api/a025/vehicle/testdata",
            post(handlers::a025_vehicle::insert_test_data),
        )
}
