//! HTTP surface: `GET /zones` and `GET /zones/flat`.

use crate::Zones;
use crate::directory::FlatZone;
use crate::error::ZonesError;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use rhub_domain::constants::ZONES_TAG;
use rhub_kernel::server::ApiState;
use rhub_kernel::server::response::ErrorBody;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Envelope for the flattened zone listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FlatZonesResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<FlatZone>,
}

/// Verbatim proxy of the upstream directory document.
#[utoipa::path(
    get,
    path = "/zones",
    responses(
        (status = OK, description = "Upstream zone directory, unmodified", body = serde_json::Value),
        (status = INTERNAL_SERVER_ERROR, description = "Upstream fetch or decode failure", body = ErrorBody),
    ),
    tag = ZONES_TAG,
)]
async fn zones_handler(State(state): State<ApiState>) -> Result<impl IntoResponse, ZonesError> {
    let zones = state.try_get_slice::<Zones>()?;

    let document = zones.client.fetch_raw().await?;

    Ok(Json(document))
}

#[utoipa::path(
    get,
    path = "/zones/flat",
    responses(
        (status = OK, description = "Zones flattened and sorted by display name", body = FlatZonesResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Upstream fetch or decode failure", body = ErrorBody),
    ),
    tag = ZONES_TAG,
)]
async fn flat_handler(State(state): State<ApiState>) -> Result<impl IntoResponse, ZonesError> {
    let zones = state.try_get_slice::<Zones>()?;

    let data = zones.client.fetch_directory().await?.flatten();

    Ok(Json(FlatZonesResponse { success: true, count: data.len(), data }))
}

/// Routes for the zone-directory surface.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(zones_handler)).routes(routes!(flat_handler))
}
