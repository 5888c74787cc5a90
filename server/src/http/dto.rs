use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /submit`.
///
/// The field is optional so that an absent `text` key reaches the handler
/// and gets the same rejection as an explicit `null`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub text: Option<String>,
}

/// Acknowledgement returned for a stored submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
    pub message: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Service banner returned by the root endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
    pub version: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub features: Vec<String>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}
