//! HTTP API request/response types

use serde::{Deserialize, Serialize};

use crate::types::ClipboardItem;

/// Replace request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceRequest {
    /// The new clipboard content
    pub content: String,
}

/// Clear response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearResponse {
    /// Whether the clear was applied
    pub success: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Whether the service is healthy
    pub healthy: bool,
    /// Service version
    pub version: String,
}

/// Backend connectivity report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugResponse {
    /// Report time (RFC 3339)
    pub timestamp: String,
    /// Whether the read path has credentials
    pub configured: bool,
    /// Whether a read probe succeeded
    pub can_read: bool,
    /// Probe failure detail, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// The record that would have been stored, when a write failed after
    /// classification (kept for debuggability)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<ClipboardItem>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            record: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("INVALID_REQUEST", message)
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new("PAYLOAD_TOO_LARGE", message)
    }

    pub fn backend_unavailable(message: impl Into<String>) -> Self {
        Self::new("BACKEND_UNAVAILABLE", message)
    }

    pub fn with_record(mut self, record: ClipboardItem) -> Self {
        self.record = Some(record);
        self
    }
}
