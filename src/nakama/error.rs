use thiserror::Error;

/// Errors surfaced by the Nakama API client.
#[derive(Debug, Error)]
pub enum NakamaError {
    /// Fatal API response, carrying the HTTP status and raw body text.
    #[error("API error (HTTP {code}): {message}")]
    Api { code: u16, message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl NakamaError {
    /// Capture a failed response as a fatal error, consuming the body text.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let code = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        Self::Api { code, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_carries_status_and_body() {
        let err = NakamaError::Api {
            code: 404,
            message: "device not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 404): device not found");
    }
}
