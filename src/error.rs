use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    NotFound,
    Status,
    Transport,
    Timeout,
    Decode,
}

/// Failure talking to the statistics API.
#[derive(Debug, Clone, Error)]
#[error("{kind:?}: {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            kind,
            status,
            message: message.into(),
        }
    }

    pub fn timeout(path: &str, after_ms: u32) -> Self {
        Self::new(
            ApiErrorKind::Timeout,
            None,
            format!("{path} did not answer within {after_ms} ms"),
        )
    }

    /// Message suitable for the page error banner.
    pub fn user_message(&self) -> String {
        match self.status {
            Some(status) => format!("HTTP {status}: {}", self.message),
            None => self.message.clone(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_decode() {
            ApiErrorKind::Decode
        } else {
            ApiErrorKind::Transport
        };
        ApiError::new(kind, e.status().map(|s| s.as_u16()), e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::new(ApiErrorKind::Decode, None, e.to_string())
    }
}

/// Why an enrichment run produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EnrichError {
    #[error("enrichment cancelled before completion")]
    Cancelled,
}
