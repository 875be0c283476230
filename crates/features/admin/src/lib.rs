//! Admin feature slice: the shared-secret management surface.
//!
//! Every route except `POST /admin/login` expects the secret in the
//! `x-admin-password` header; login takes it in the body so the dashboard
//! can validate it once before storing it client-side. An empty configured
//! password keeps the whole surface closed.

mod auth;
mod error;
pub mod http;

pub use crate::auth::{authorize, verify};
pub use crate::error::AdminError;

use rhub_domain::config::ApiConfig;
use rhub_domain::registry::{FeatureSlice, InitializedSlice};
use std::ops::Deref;
use std::sync::Arc;

/// Admin feature state.
#[derive(Debug)]
pub struct AdminInner {
    secret: Option<String>,
}

/// Thread-safe handle to the admin slice.
#[derive(Debug, Clone)]
pub struct Admin {
    inner: Arc<AdminInner>,
}

impl Admin {
    pub fn new(inner: AdminInner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    /// The configured shared secret, or `None` when the surface is disabled.
    #[must_use]
    pub fn secret(&self) -> Option<&str> {
        self.inner.secret.as_deref()
    }
}

impl Deref for Admin {
    type Target = AdminInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Admin {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the admin feature from configuration.
///
/// # Errors
/// Currently infallible; kept fallible to match the slice-init contract.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, AdminError> {
    let secret = Some(config.security.admin_password.clone()).filter(|s| !s.is_empty());

    if secret.is_none() {
        tracing::warn!("Admin password not configured, admin surface is disabled");
    } else {
        tracing::info!("Admin slice initialized");
    }

    let slice = Admin::new(AdminInner { secret });

    Ok(InitializedSlice::new(slice))
}
