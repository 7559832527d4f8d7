use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Rally service error variants.
///
/// Every variant is recoverable at the HTTP boundary: rejections map to a
/// 4xx/410 body and the caller simply retries the action (re-scan, re-click
/// generate). Nothing here aborts the process.
#[derive(Debug, thiserror::Error)]
pub enum RallyServiceError {
    #[error("invalid code format")]
    InvalidCodeFormat,
    #[error("code expired")]
    CodeExpired,
    #[error("code not found")]
    CodeNotFound,
    #[error("stamp already collected")]
    AlreadyCollected,
    #[error("spot not found")]
    SpotNotFound,
    #[error("missing data")]
    MissingData,
    #[error("forbidden")]
    Forbidden,
    #[error("qr encoding failed")]
    Encoding(#[from] qrcode::types::QrError),
    #[error("storage error")]
    Persistence(#[from] anyhow::Error),
}

impl RallyServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCodeFormat => "INVALID_CODE_FORMAT",
            Self::CodeExpired => "CODE_EXPIRED",
            Self::CodeNotFound => "CODE_NOT_FOUND",
            Self::AlreadyCollected => "ALREADY_COLLECTED",
            Self::SpotNotFound => "SPOT_NOT_FOUND",
            Self::MissingData => "MISSING_DATA",
            Self::Forbidden => "FORBIDDEN",
            Self::Encoding(_) => "ENCODING_ERROR",
            Self::Persistence(_) => "PERSISTENCE",
        }
    }
}

impl IntoResponse for RallyServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidCodeFormat | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::CodeExpired => StatusCode::GONE,
            Self::CodeNotFound | Self::SpotNotFound => StatusCode::NOT_FOUND,
            Self::AlreadyCollected => StatusCode::CONFLICT,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Encoding(_) | Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only; tower-http TraceLayer already records method/uri/status
        // for all requests, and 4xx are expected client outcomes here.
        match &self {
            Self::Persistence(e) => {
                tracing::error!(error = %e, kind = "PERSISTENCE", "storage error");
            }
            Self::Encoding(e) => {
                tracing::error!(error = %e, kind = "ENCODING_ERROR", "qr encoding failed");
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
