use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Typed shape of GET /api/health, for callers that need the per-service
/// availability map rather than a bare liveness boolean.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub services: BTreeMap<String, bool>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolsResponse {
    #[serde(default)]
    pub us_symbols: Vec<String>,
    #[serde(default)]
    pub tw_symbols: Vec<String>,
    pub total: usize,
}

/// Simplified signal readout of GET /signals/{symbol}. The indicator map is
/// backend-defined and passed through untyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalsResponse {
    pub symbol: String,
    pub signal: String,
    pub confidence: f64,
    #[serde(default)]
    pub indicators: Value,
    pub timestamp: NaiveDateTime,
}
