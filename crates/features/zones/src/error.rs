use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rhub_kernel::server::ApiStateError;
use rhub_kernel::server::response::ErrorBody;
use std::borrow::Cow;

/// A specialized [`ZonesError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum ZonesError {
    /// The upstream directory could not be reached or returned an error.
    #[error("Upstream error{}: {source}", format_context(.context))]
    Upstream {
        #[source]
        source: reqwest::Error,
        context: Option<Cow<'static, str>>,
    },

    /// The upstream payload was not the expected JSON document.
    #[error("Decode error{}: {source}", format_context(.context))]
    Decode {
        #[source]
        source: serde_json::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal zones error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl IntoResponse for ZonesError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Zones request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new("Zone directory is unavailable")),
        )
            .into_response()
    }
}

/// Attach context to zones results.
pub trait ZonesErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ZonesError>;
}

impl<T> ZonesErrorExt<T> for Result<T, ZonesError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ZonesError> {
        self.map_err(|e| match e {
            ZonesError::Upstream { source, .. } => {
                ZonesError::Upstream { source, context: Some(context.into()) }
            }
            ZonesError::Decode { source, .. } => {
                ZonesError::Decode { source, context: Some(context.into()) }
            }
            ZonesError::Internal { message, .. } => {
                ZonesError::Internal { message, context: Some(context.into()) }
            }
        })
    }
}

impl From<reqwest::Error> for ZonesError {
    #[inline]
    fn from(source: reqwest::Error) -> Self {
        Self::Upstream { source, context: None }
    }
}

impl From<serde_json::Error> for ZonesError {
    #[inline]
    fn from(source: serde_json::Error) -> Self {
        Self::Decode { source, context: None }
    }
}

impl From<ApiStateError> for ZonesError {
    #[inline]
    fn from(e: ApiStateError) -> Self {
        Self::Internal { message: e.to_string().into(), context: None }
    }
}

pub(crate) fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
