pub mod api;
pub mod auth;
pub mod domain;

pub mod config {
    /// Default backend address when no environment override is present.
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

    pub const PRIMARY_BASE_URL_ENV: &str = "STOCKDASH_API_URL";
    pub const FALLBACK_BASE_URL_ENV: &str = "API_URL";

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub api_base_url: Option<String>,
        pub api_base_url_fallback: Option<String>,
        pub auth_token: Option<String>,
        pub sentry_dsn: Option<String>,
        pub request_timeout_secs: Option<u64>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                api_base_url: std::env::var(PRIMARY_BASE_URL_ENV).ok(),
                api_base_url_fallback: std::env::var(FALLBACK_BASE_URL_ENV).ok(),
                auth_token: std::env::var(crate::auth::AUTH_TOKEN_ENV_KEY).ok(),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
                request_timeout_secs: std::env::var("STOCKDASH_API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok()),
            })
        }

        pub fn resolved_base_url(&self) -> String {
            resolve_base_url(
                self.api_base_url.as_deref(),
                self.api_base_url_fallback.as_deref(),
            )
        }
    }

    /// Base URL resolution order: primary env value, then fallback, then the
    /// hardcoded local default. Blank values do not win the resolution.
    pub fn resolve_base_url(primary: Option<&str>, fallback: Option<&str>) -> String {
        primary
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or_else(|| fallback.map(str::trim).filter(|s| !s.is_empty()))
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn primary_wins_over_fallback() {
            let url = resolve_base_url(Some("https://api.example.com"), Some("https://other"));
            assert_eq!(url, "https://api.example.com");
        }

        #[test]
        fn fallback_wins_over_default() {
            let url = resolve_base_url(None, Some("https://fallback.example.com"));
            assert_eq!(url, "https://fallback.example.com");
        }

        #[test]
        fn default_when_nothing_is_set() {
            assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
        }

        #[test]
        fn blank_primary_does_not_shadow_fallback() {
            let url = resolve_base_url(Some("   "), Some("https://fallback.example.com"));
            assert_eq!(url, "https://fallback.example.com");
        }
    }
}
