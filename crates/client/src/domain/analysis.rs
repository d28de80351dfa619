use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PERIOD: &str = "3mo";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Caller-facing knobs for the analyze operation. Unset fields resolve to the
/// backend contract defaults when the wire request is built.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    pub period: Option<String>,
    pub include_ai: bool,
    pub include_patterns: Option<bool>,
    pub language: Option<String>,
}

impl AnalyzeOptions {
    pub fn into_request(self, symbol: &str) -> AnalyzeRequest {
        AnalyzeRequest {
            symbol: symbol.to_string(),
            period: self.period.unwrap_or_else(|| DEFAULT_PERIOD.to_string()),
            include_ai: self.include_ai,
            include_patterns: self.include_patterns.unwrap_or(true),
            language: self.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        }
    }
}

/// Wire body of POST /analyze/{symbol}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub symbol: String,
    pub period: String,
    pub include_ai: bool,
    pub include_patterns: bool,
    pub language: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnicalIndicators {
    #[serde(default)]
    pub rsi: Option<f64>,
    #[serde(default)]
    pub macd: Option<f64>,
    #[serde(default)]
    pub macd_signal: Option<f64>,
    #[serde(default)]
    pub bb_upper: Option<f64>,
    #[serde(default)]
    pub bb_lower: Option<f64>,
    #[serde(default)]
    pub sma_20: Option<f64>,
    #[serde(default)]
    pub sma_50: Option<f64>,
    #[serde(default)]
    pub volume_ratio: Option<f64>,
    #[serde(default)]
    pub atr: Option<f64>,
}

/// Either a successful AI recommendation or a structured auth/quota failure;
/// the backend uses one shape for both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiAnalysisResult {
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub key_factors: Vec<String>,
    #[serde(default)]
    pub price_target: Option<f64>,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    #[serde(default)]
    pub risk_score: Option<f64>,
    #[serde(default)]
    pub entry_price: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub login_required: Option<bool>,
    #[serde(default)]
    pub quota_exceeded: Option<bool>,
    #[serde(default)]
    pub remaining_quota: Option<i64>,
}

impl AiAnalysisResult {
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
            || self.login_required.unwrap_or(false)
            || self.quota_exceeded.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternResult {
    #[serde(rename = "type")]
    pub kind: String,
    pub confidence: f64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportResistanceLevel {
    pub level: f64,
    pub strength: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingSignal {
    pub symbol: String,
    pub signal_type: String,
    pub confidence: f64,
    pub reasoning: String,
    pub timestamp: NaiveDateTime,
}

/// Pattern findings grouped by detector family; any group may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternGroups {
    #[serde(default)]
    pub support_resistance: Vec<SupportResistanceLevel>,
    #[serde(default)]
    pub candlestick: Vec<PatternResult>,
    #[serde(default)]
    pub chart_patterns: Vec<PatternResult>,
}

/// Top-level response of POST /analyze/{symbol}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub symbol: String,
    pub current_price: f64,
    pub price_change: f64,
    pub price_change_percent: f64,
    #[serde(default)]
    pub technical_indicators: TechnicalIndicators,
    #[serde(default)]
    pub ai_analysis: Option<AiAnalysisResult>,
    #[serde(default)]
    pub patterns: PatternGroups,
    #[serde(default)]
    pub signals: Vec<TradingSignal>,
    pub timestamp: NaiveDateTime,
}
