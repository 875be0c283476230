//! Registration feature slice: the public submission workflow.
//!
//! Owns the attendee model, the SurrealDB repository, and the `/register`
//! HTTP surface. Duplicate detection is delegated to the storage layer's
//! unique indexes (see [`repository::RegistrationRepository`]).

mod error;
pub mod http;
mod model;
mod repository;

pub use crate::error::{RegistrationError, RegistrationErrorExt};
pub use crate::model::{AttendanceType, NewRegistration, Registration, RegistrationDraft};
pub use crate::repository::{DUPLICATE_MESSAGE, RegistrationRepository};

use rhub_database::Database;
use rhub_domain::registry::{FeatureSlice, InitializedSlice};
use std::ops::Deref;
use std::sync::Arc;

/// Registration feature state.
#[derive(Debug, Clone)]
pub struct RegistrationsInner {
    pub repo: RegistrationRepository,
}

/// Thread-safe handle to the registration slice.
#[derive(Debug, Clone)]
pub struct Registrations {
    inner: Arc<RegistrationsInner>,
}

impl Registrations {
    pub fn new(inner: RegistrationsInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Registrations {
    type Target = RegistrationsInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Registrations {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the registration feature.
///
/// # Errors
/// Currently infallible; kept fallible to match the slice-init contract.
pub fn init(db: &Database) -> Result<InitializedSlice, RegistrationError> {
    tracing::info!("Registration slice initialized");

    let inner = RegistrationsInner { repo: RegistrationRepository::new(db.clone()) };

    let slice = Registrations::new(inner);

    Ok(InitializedSlice::new(slice))
}
