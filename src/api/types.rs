//! API request and response types.

use serde::{Deserialize, Serialize};

/// Visitor question about one location.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// Sub-location the question is about
    pub location: String,

    /// Free-text question
    pub user_query: String,
}

/// Answer, or rejection, for a chat request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The requested location, echoed unchanged
    pub location: String,

    /// Model answer or rejection message
    pub response: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}
