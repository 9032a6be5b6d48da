//! Health check service implementation.
//!
//! Provides health checks for monitoring and keepalive.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::services::ReceiptService;

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HealthResponse {
    /// `healthy` or `unhealthy`
    pub status: String,
    pub message: String,
    pub version: String,
    /// Receipts currently held in the store.
    pub receipts: Option<u32>,
    /// RFC 3339 server time.
    pub server_time: String,
}

/// Health service implementation.
#[derive(Clone)]
pub struct HealthService {
    receipts: ReceiptService,
}

impl HealthService {
    /// Create a new health service.
    pub fn new(receipts: ReceiptService) -> Self {
        HealthService { receipts }
    }

    /// Check overall system health.
    pub fn check(&self) -> HealthResponse {
        let (status, message, receipts) = match self.receipts.count() {
            Ok(count) => (
                "healthy",
                "OK".to_string(),
                Some(u32::try_from(count).unwrap_or(u32::MAX)),
            ),
            Err(e) => {
                warn!(error = %e, "Receipt store unhealthy");
                ("unhealthy", format!("Receipt store unhealthy: {e}"), None)
            }
        };

        HealthResponse {
            status: status.to_string(),
            message,
            version: env!("CARGO_PKG_VERSION").to_string(),
            receipts,
            server_time: Utc::now().to_rfc3339(),
        }
    }
}
