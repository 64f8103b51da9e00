use axum::{extract::Query, http::StatusCode, Json};
use contracts::domain::a025_vehicle::aggregate::{Vehicle, VehicleListQuery};
use contracts::shared::faceted_list::{FacetOptions, PageResponse};
use serde_json::json;

use crate::domain::a025_vehicle;

/// GET /api/a025/vehicle
pub async fn list_paginated(
    Query(query): Query<VehicleListQuery>,
) -> Result<Json<PageResponse<Vehicle>>, StatusCode> {
    match a025_vehicle::service::list_paginated(query).await {
        Ok(page) => Ok(Json(page)),
        Err(e) => {
            tracing::error!("Failed to list vehicles: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/a025/vehicle/facets
pub async fn facets() -> Result<Json<FacetOptions>, StatusCode> {
    match a025_vehicle::service::facets().await {
        Ok(options) => Ok(Json(options)),
        Err(e) => {
            tracing::error!("Failed to load vehicle facets: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/a025/vehicle/testdata
pub async fn insert_test_data() -> Result<Json<serde_json::Value>, StatusCode> {
    match a025_vehicle::service::insert_test_data().await {
        Ok(inserted) => Ok(Json(json!({ "inserted": inserted }))),
        Err(e) => {
            tracing::error!("Failed to insert test data: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
