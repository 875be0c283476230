use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rhub_kernel::server::ApiStateError;
use rhub_kernel::server::response::ErrorBody;
use std::borrow::Cow;

/// A specialized [`RegistrationError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// A required field is missing or blank.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A registration with the same email or phone already exists.
    #[error("Duplicate registration{}: {message}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A wrapper for underlying `SurrealDB` engine errors.
    #[error("SurrealDB error{}: {source}", format_context(.context))]
    Surreal {
        #[source]
        source: surrealdb::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RegistrationError {
    pub(crate) fn missing_field(field: &'static str) -> Self {
        Self::Validation { message: format!("Missing required field: {field}").into(), context: None }
    }

    /// Message safe to surface to the caller in the error envelope.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } | Self::Conflict { message, .. } => {
                message.clone().into_owned()
            }
            Self::Surreal { .. } | Self::Internal { .. } => "Registration failed".to_owned(),
        }
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Surreal { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Registration request failed");
        }
        (status, Json(ErrorBody::new(self.user_message()))).into_response()
    }
}

/// Adds `.context(...)` to this crate's results and to raw `SurrealDB` results.
pub trait RegistrationErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, RegistrationError>;
}

impl<T> RegistrationErrorExt<T> for Result<T, RegistrationError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                RegistrationError::Validation { context: c, .. }
                | RegistrationError::Conflict { context: c, .. }
                | RegistrationError::Surreal { context: c, .. }
                | RegistrationError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> RegistrationErrorExt<T> for Result<T, surrealdb::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, RegistrationError> {
        self.map_err(|source| RegistrationError::Surreal { source, context: Some(context.into()) })
    }
}

impl From<surrealdb::Error> for RegistrationError {
    #[inline]
    fn from(source: surrealdb::Error) -> Self {
        Self::Surreal { source, context: None }
    }
}

impl From<ApiStateError> for RegistrationError {
    #[inline]
    fn from(e: ApiStateError) -> Self {
        Self::Internal { message: e.to_string().into(), context: None }
    }
}

pub(crate) fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
