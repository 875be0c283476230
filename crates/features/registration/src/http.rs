//! HTTP surface: `POST /register` and `GET /register`.

use crate::Registrations;
use crate::error::RegistrationError;
use crate::model::{Registration, RegistrationDraft};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use rhub_domain::constants::REGISTRATION_TAG;
use rhub_kernel::server::ApiState;
use rhub_kernel::server::response::ErrorBody;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Envelope for a freshly created registration.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub success: bool,
    pub data: Registration,
}

/// Envelope for a registration listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Registration>,
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegistrationDraft,
    responses(
        (status = CREATED, description = "Registration created", body = CreatedResponse),
        (status = BAD_REQUEST, description = "Missing required field", body = ErrorBody),
        (status = CONFLICT, description = "Email or phone already registered", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Store failure", body = ErrorBody),
    ),
    tag = REGISTRATION_TAG,
)]
async fn submit_handler(
    State(state): State<ApiState>,
    Json(draft): Json<RegistrationDraft>,
) -> Result<impl IntoResponse, RegistrationError> {
    let registrations = state.try_get_slice::<Registrations>()?;

    let record = draft.into_record()?;
    let created = registrations.repo.create(record).await?;

    info!(id = %created.id, attendance = %created.attendance_type, "Registration created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { success: true, data: created })))
}

/// Listing consumed by the form's confirmation page; intentionally left
/// unauthenticated.
#[utoipa::path(
    get,
    path = "/register",
    responses(
        (status = OK, description = "All registrations, newest first", body = ListResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Store failure", body = ErrorBody),
    ),
    tag = REGISTRATION_TAG,
)]
async fn list_handler(
    State(state): State<ApiState>,
) -> Result<impl IntoResponse, RegistrationError> {
    let registrations = state.try_get_slice::<Registrations>()?;

    let data = registrations.repo.list().await?;

    Ok(Json(ListResponse { success: true, count: data.len(), data }))
}

/// Routes for the public registration surface.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(submit_handler, list_handler))
}
