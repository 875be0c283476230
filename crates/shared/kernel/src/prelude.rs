//! Convenience re-exports for slice and app crates.

pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use crate::safe_nanoid;
pub use crate::server::response::{ErrorBody, MessageBody};
pub use crate::server::{ApiState, ApiStateBuilder, ApiStateError};
pub use rhub_domain::registry::{FeatureSlice, InitializedSlice};
