//! Response types for the everything server

use page_cache::{ControllerStats, QuotaSnapshot};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub cache: ControllerStats,
    pub quota: QuotaSnapshot,
}
