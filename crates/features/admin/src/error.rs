use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rhub_kernel::server::ApiStateError;
use rhub_kernel::server::response::ErrorBody;
use rhub_registration::RegistrationError;
use std::borrow::Cow;

/// A specialized [`AdminError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// The supplied secret does not match the configured one (or none is configured).
    #[error("Admin auth error{}: {message}", format_context(.context))]
    Auth { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The targeted registration does not exist.
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A wrapper for registration-store failures behind admin operations.
    #[error("Registration store error{}: {source}", format_context(.context))]
    Registration {
        #[source]
        source: RegistrationError,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal admin error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl AdminError {
    pub(crate) const fn unauthorized() -> Self {
        Self::Auth { message: Cow::Borrowed("Unauthorized"), context: None }
    }

    /// Message safe to surface to the caller in the error envelope.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth { message, .. } | Self::NotFound { message, .. } => {
                message.clone().into_owned()
            }
            Self::Registration { .. } | Self::Internal { .. } => {
                "Admin operation failed".to_owned()
            }
        }
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::Auth { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Registration { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Admin request failed");
        }
        (status, Json(ErrorBody::new(self.user_message()))).into_response()
    }
}

impl From<RegistrationError> for AdminError {
    #[inline]
    fn from(source: RegistrationError) -> Self {
        Self::Registration { source, context: None }
    }
}

impl From<ApiStateError> for AdminError {
    #[inline]
    fn from(e: ApiStateError) -> Self {
        Self::Internal { message: e.to_string().into(), context: None }
    }
}

pub(crate) fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
