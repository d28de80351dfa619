use reqwest::StatusCode;
use std::fmt;

/// Non-2xx response surfaced with enough context to act on: the operation
/// that failed, the status line, and the raw response body.
#[derive(Debug, Clone)]
pub struct HttpFailure {
    pub operation: &'static str,
    pub status: StatusCode,
    pub body: String,
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} HTTP {}: {}", self.operation, self.status, self.body)
    }
}

impl std::error::Error for HttpFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_numeric_status_and_body() {
        let err = HttpFailure {
            operation: "analyze",
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "analysis engine exploded".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("500"), "missing status code in: {msg}");
        assert!(msg.contains("analysis engine exploded"));
        assert!(msg.starts_with("analyze "));
    }

    #[test]
    fn downcasts_from_anyhow() {
        let err: anyhow::Error = HttpFailure {
            operation: "login",
            status: StatusCode::UNAUTHORIZED,
            body: String::new(),
        }
        .into();

        let failure = err.downcast_ref::<HttpFailure>().unwrap();
        assert_eq!(failure.status, StatusCode::UNAUTHORIZED);
    }
}
