//! Facade crate for `RegHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] during server startup to register feature slices; extend as
//!   new slices appear.

use rhub_database::Database;
pub use rhub_domain as domain;
use rhub_domain::config::ApiConfig;
pub use rhub_kernel as kernel;

pub mod server {
    pub mod router {
        pub use rhub_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use rhub_admin as admin;
    pub use rhub_registration as registration;
    pub use rhub_zones as zones;

    /// Features compiled into this build.
    pub const ENABLED: &[&str] = &["registration", "admin", "zones"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
    database: &Database,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Registration
    slices.push(features::registration::init(database)?);

    // Admin
    slices.push(features::admin::init(config)?);

    // Zones
    slices.push(features::zones::init(config)?);

    Ok(slices)
}
