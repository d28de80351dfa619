use crate::api::error::HttpFailure;
use crate::auth::{NoToken, StaticToken, TokenProvider};
use crate::config::Settings;
use crate::domain::analysis::{AnalysisResponse, AnalyzeOptions, DEFAULT_PERIOD};
use crate::domain::auth::{AuthResponse, Credentials};
use crate::domain::market::{HealthReport, SignalsResponse, SymbolsResponse};
use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

const HEALTH_PATH: &str = "/api/health";
const AI_QUESTION_CONTEXT: &str = "trading";
const STRATEGY_ANALYSIS_TYPE: &str = "comprehensive";

/// Typed client for the trading-dashboard backend. Cheap to clone; all
/// operations take `&self` and perform exactly one request with no retry,
/// deduplication, or caching.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl DashboardClient {
    /// Base URL and credentials from `Settings`: a static bearer token when
    /// the fixed credential key was set, unauthenticated otherwise.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let tokens: Arc<dyn TokenProvider> = match settings.auth_token.as_deref() {
            Some(token) if !token.trim().is_empty() => {
                Arc::new(StaticToken(token.trim().to_string()))
            }
            _ => Arc::new(NoToken),
        };

        Self::new(
            settings.resolved_base_url(),
            tokens,
            settings.request_timeout_secs.map(Duration::from_secs),
        )
    }

    /// No timeout is imposed unless one is passed; each call is a single
    /// best-effort attempt either way.
    pub fn new(
        base_url: String,
        tokens: Arc<dyn TokenProvider>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .context("failed to build dashboard http client")?;

        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    pub fn with_token_provider(mut self, tokens: Arc<dyn TokenProvider>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run a full analysis for a symbol. Unset options resolve to the
    /// contract defaults before the body is serialized.
    pub async fn analyze(&self, symbol: &str, options: AnalyzeOptions) -> Result<AnalysisResponse> {
        anyhow::ensure!(!symbol.trim().is_empty(), "symbol must be non-empty");
        let body = options.into_request(symbol);
        self.post_json("analyze", &format!("/analyze/{symbol}"), &body)
            .await
    }

    /// Raw stock data; the payload shape is backend-defined.
    pub async fn stock_data(&self, symbol: &str, period: Option<&str>) -> Result<Value> {
        self.get_json(
            "stock_data",
            &format!("/api/stocks/{symbol}"),
            &[("period", period.unwrap_or(DEFAULT_PERIOD))],
        )
        .await
    }

    /// Chart data; the payload shape is backend-defined.
    pub async fn chart_data(&self, symbol: &str, period: Option<&str>) -> Result<Value> {
        self.get_json(
            "chart_data",
            &format!("/api/charts/{symbol}"),
            &[("period", period.unwrap_or(DEFAULT_PERIOD))],
        )
        .await
    }

    /// Liveness probe: `true` iff the backend answered 2xx. Transport and
    /// HTTP failures are logged and swallowed into `false`; this is the only
    /// operation that never errors.
    pub async fn check_connection(&self) -> bool {
        let url = self.url(HEALTH_PATH);
        let headers = self.headers().unwrap_or_default();

        match self.http.get(url).headers(headers).send().await {
            Ok(res) if res.status().is_success() => true,
            Ok(res) => {
                tracing::warn!(http_status = %res.status(), "dashboard health check rejected");
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "dashboard health check unreachable");
                false
            }
        }
    }

    /// Typed health readout, for callers that need the per-service map.
    pub async fn health(&self) -> Result<HealthReport> {
        self.get_json("health", HEALTH_PATH, &[]).await
    }

    /// Free-form AI question in the fixed trading context.
    pub async fn ask_ai(&self, question: &str) -> Result<Value> {
        let body = serde_json::json!({
            "question": question,
            "context": AI_QUESTION_CONTEXT,
        });
        self.post_json("ask_ai", "/ai/ask", &body).await
    }

    /// Open a comprehensive strategy-chat session tied to a symbol.
    pub async fn start_strategy_chat(&self, symbol: &str) -> Result<Value> {
        let body = serde_json::json!({
            "symbol": symbol,
            "analysis_type": STRATEGY_ANALYSIS_TYPE,
        });
        self.post_json("start_strategy_chat", "/api/ai/strategy-chat/start", &body)
            .await
    }

    pub async fn supported_symbols(&self) -> Result<SymbolsResponse> {
        self.get_json("supported_symbols", "/symbols", &[]).await
    }

    pub async fn trading_signals(
        &self,
        symbol: &str,
        period: Option<&str>,
    ) -> Result<SignalsResponse> {
        self.get_json(
            "trading_signals",
            &format!("/signals/{symbol}"),
            &[("period", period.unwrap_or(DEFAULT_PERIOD))],
        )
        .await
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<AuthResponse> {
        self.post_json("register", "/api/auth/register", credentials)
            .await
    }

    /// The token in a successful response is what callers feed back in via a
    /// `TokenProvider`.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        self.post_json("login", "/api/auth/login", credentials).await
    }

    pub async fn current_user(&self) -> Result<Value> {
        self.get_json("current_user", "/api/auth/me", &[]).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.tokens.bearer_token() {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}"))?,
            );
        }
        Ok(headers)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(operation, %url, "dashboard API request");

        let res = self
            .http
            .get(url)
            .headers(self.headers()?)
            .query(query)
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(operation, error = %err, "dashboard API request failed");
                return Err(err).with_context(|| format!("{operation} request failed"));
            }
        };

        Self::decode(operation, res).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(operation, %url, "dashboard API request");

        let res = self
            .http
            .post(url)
            .headers(self.headers()?)
            .json(body)
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(operation, error = %err, "dashboard API request failed");
                return Err(err).with_context(|| format!("{operation} request failed"));
            }
        };

        Self::decode(operation, res).await
    }

    async fn decode<T: DeserializeOwned>(
        operation: &'static str,
        res: reqwest::Response,
    ) -> Result<T> {
        let status = res.status();
        let text = res
            .text()
            .await
            .with_context(|| format!("failed to read {operation} response body"))?;

        if !status.is_success() {
            let failure = HttpFailure {
                operation,
                status,
                body: text,
            };
            tracing::error!(operation, http_status = %status, "dashboard API request rejected");
            return Err(failure.into());
        }

        serde_json::from_str::<T>(&text)
            .with_context(|| format!("failed to parse {operation} response JSON: {text}"))
    }
}
