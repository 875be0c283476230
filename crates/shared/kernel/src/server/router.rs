//! System-level routes shared by every deployment.

use super::health;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Router carrying the `/health` probe, generic over the application state so
/// feature routers can merge it before the state is applied.
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    OpenApiRouter::<S>::new().routes(routes!(health::health_handler))
}
