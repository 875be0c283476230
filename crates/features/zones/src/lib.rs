//! Zones feature slice: proxy and flattening of the external zone directory.
//!
//! The upstream document is fetched on demand, never cached, so clients see
//! the directory exactly as the external service publishes it.

mod client;
mod directory;
mod error;
pub mod http;

pub use crate::client::ZonesClient;
pub use crate::directory::{FlatZone, Group, ZoneDirectory, ZoneEntry};
pub use crate::error::{ZonesError, ZonesErrorExt};

use rhub_domain::config::ApiConfig;
use rhub_domain::registry::{FeatureSlice, InitializedSlice};
use std::ops::Deref;
use std::sync::Arc;

/// Zones feature state.
#[derive(Debug)]
pub struct ZonesInner {
    pub client: ZonesClient,
}

/// Thread-safe handle to the zones slice.
#[derive(Debug, Clone)]
pub struct Zones {
    inner: Arc<ZonesInner>,
}

impl Zones {
    pub fn new(inner: ZonesInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Zones {
    type Target = ZonesInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Zones {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the zones feature from configuration.
///
/// # Errors
/// Returns an error when the upstream HTTP client cannot be constructed.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, ZonesError> {
    tracing::info!(url = %config.zones.url, "Zones slice initialized");

    let inner = ZonesInner { client: ZonesClient::new(&config.zones)? };

    let slice = Zones::new(inner);

    Ok(InitializedSlice::new(slice))
}
