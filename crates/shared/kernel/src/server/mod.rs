//! Shared server plumbing: API state, response envelopes, and the system router.

pub mod health;
pub mod response;
pub mod router;
mod state;

pub use state::{ApiState, ApiStateBuilder, ApiStateError};
