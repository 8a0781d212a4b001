use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Request failed: {0}")]
    HttpStatus(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Build an error from a non-success status line. The response body is
    /// not read; the status description is the whole message.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        let reason = status.canonical_reason().unwrap_or("unknown status");
        match status.as_u16() {
            404 => ApiError::NotFound(reason.to_string()),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(format!("{} {}", status.as_u16(), reason)),
            _ => ApiError::HttpStatus(format!("{} {}", status.as_u16(), reason)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_not_found() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND);
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.to_string(), "Resource not found: Not Found");
    }

    #[test]
    fn test_from_status_rate_limited() {
        let err = ApiError::from_status(StatusCode::TOO_MANY_REQUESTS);
        assert!(matches!(err, ApiError::RateLimited));
    }

    #[test]
    fn test_from_status_server_error() {
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, ApiError::ServerError(_)));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_from_status_other() {
        let err = ApiError::from_status(StatusCode::IM_A_TEAPOT);
        assert!(matches!(err, ApiError::HttpStatus(_)));
        assert!(err.to_string().contains("418"));
    }
}
