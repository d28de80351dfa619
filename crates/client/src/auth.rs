use std::fmt;

/// Fixed environment key the original client kept its bearer token under.
pub const AUTH_TOKEN_ENV_KEY: &str = "AUTH_TOKEN";

/// Credential source consulted once per outgoing request. The client only
/// ever reads through this seam; nothing in the library writes credentials.
pub trait TokenProvider: Send + Sync + fmt::Debug {
    fn bearer_token(&self) -> Option<String>;
}

/// Always sends the same token.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl TokenProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Re-reads an environment variable on every call, so a token issued after
/// client construction is picked up without rebuilding the client.
#[derive(Debug, Clone)]
pub struct EnvToken {
    key: String,
}

impl EnvToken {
    pub fn new(key: String) -> Self {
        Self { key }
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self {
            key: AUTH_TOKEN_ENV_KEY.to_string(),
        }
    }
}

impl TokenProvider for EnvToken {
    fn bearer_token(&self) -> Option<String> {
        std::env::var(&self.key).ok().filter(|t| !t.trim().is_empty())
    }
}

/// Unauthenticated calls; the server rejects where authorization is required.
#[derive(Debug, Clone, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}
