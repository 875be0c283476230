//! HTTP surface: `POST /admin/login` and the `/admin/registrations` set.

use crate::Admin;
use crate::auth::{authorize, verify};
use crate::error::AdminError;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use rhub_domain::constants::ADMIN_TAG;
use rhub_kernel::server::ApiState;
use rhub_kernel::server::response::{ErrorBody, MessageBody};
use rhub_registration::Registrations;
use rhub_registration::http::ListResponse;
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Credentials submitted by the admin login form.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequest,
    responses(
        (status = OK, description = "Password accepted", body = MessageBody),
        (status = UNAUTHORIZED, description = "Invalid password", body = ErrorBody),
    ),
    tag = ADMIN_TAG,
)]
async fn login_handler(
    State(state): State<ApiState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AdminError> {
    let admin = state.try_get_slice::<Admin>()?;

    if verify(admin.secret(), &request.password) {
        Ok(Json(MessageBody::new("Login successful")))
    } else {
        Err(AdminError::Auth { message: "Invalid password".into(), context: None })
    }
}

#[utoipa::path(
    get,
    path = "/admin/registrations",
    responses(
        (status = OK, description = "All registrations, newest first", body = ListResponse),
        (status = UNAUTHORIZED, description = "Missing or wrong admin secret", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Store failure", body = ErrorBody),
    ),
    tag = ADMIN_TAG,
)]
async fn list_handler(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AdminError> {
    let admin = state.try_get_slice::<Admin>()?;
    authorize(admin.secret(), &headers)?;

    let registrations = state.try_get_slice::<Registrations>()?;
    let data = registrations.repo.list().await?;

    Ok(Json(ListResponse { success: true, count: data.len(), data }))
}

#[utoipa::path(
    delete,
    path = "/admin/registrations/{id}",
    params(("id" = String, Path, description = "Registration id")),
    responses(
        (status = OK, description = "Registration deleted", body = MessageBody),
        (status = UNAUTHORIZED, description = "Missing or wrong admin secret", body = ErrorBody),
        (status = NOT_FOUND, description = "No registration with this id", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Store failure", body = ErrorBody),
    ),
    tag = ADMIN_TAG,
)]
async fn delete_handler(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AdminError> {
    let admin = state.try_get_slice::<Admin>()?;
    authorize(admin.secret(), &headers)?;

    let registrations = state.try_get_slice::<Registrations>()?;
    let deleted = registrations.repo.delete(&id).await?;

    if !deleted {
        return Err(AdminError::NotFound {
            message: "Registration not found".into(),
            context: None,
        });
    }

    info!(%id, "Registration deleted by admin");

    Ok(Json(MessageBody::new("Registration deleted successfully")))
}

#[utoipa::path(
    delete,
    path = "/admin/registrations",
    responses(
        (status = OK, description = "Store cleared", body = MessageBody),
        (status = UNAUTHORIZED, description = "Missing or wrong admin secret", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Store failure", body = ErrorBody),
    ),
    tag = ADMIN_TAG,
)]
async fn delete_all_handler(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AdminError> {
    let admin = state.try_get_slice::<Admin>()?;
    authorize(admin.secret(), &headers)?;

    let registrations = state.try_get_slice::<Registrations>()?;
    registrations.repo.delete_all().await?;

    info!("All registrations deleted by admin");

    Ok(Json(MessageBody::new("All registrations deleted successfully")))
}

/// Routes for the secret-gated admin surface.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(login_handler))
        .routes(routes!(list_handler, delete_all_handler))
        .routes(routes!(delete_handler))
}
