//! Uniform response envelopes.
//!
//! Every failure crossing the request boundary becomes
//! `{"success": false, "error": "..."}`; mutation acknowledgements use
//! `{"success": true, "message": "..."}`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Failure envelope returned with any non-2xx status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self { success: false, error: error.into() }
    }
}

/// Acknowledgement envelope for mutations that return no data.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub success: bool,
    pub message: String,
}

impl MessageBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }
}
