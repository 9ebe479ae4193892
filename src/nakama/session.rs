use reqwest::{Client, Response};
use serde_json::Value;

use super::error::NakamaError;

/// An authenticated handle to the destination server: the shared HTTP client
/// plus the bearer token returned by one of the authenticate calls.
///
/// The token never changes once issued. Each migrated record gets its own
/// `Session`, which is dropped once the record's uploads finish.
#[derive(Clone)]
pub struct Session {
    client: Client,
    bearer: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("bearer", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(client: Client, bearer: String) -> Self {
        Self { client, bearer }
    }

    /// Send a POST with the bearer credential attached.
    pub async fn post(&self, url: &str, body: &Value) -> Result<Response, NakamaError> {
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.bearer)
            .json(body)
            .send()
            .await?;
        Ok(response)
    }

    /// Send a PUT with the bearer credential attached.
    pub async fn put(&self, url: &str, body: &Value) -> Result<Response, NakamaError> {
        tracing::debug!("PUT {}", url);
        let response = self
            .client
            .put(url)
            .bearer_auth(&self.bearer)
            .json(body)
            .send()
            .await?;
        Ok(response)
    }
}

/// Send a POST authenticated with the server key as HTTP basic credentials
/// (empty password). Used only for the two bootstrap authenticate calls; the
/// key is never carried on the resulting [`Session`].
pub async fn post_with_server_key(
    client: &Client,
    url: &str,
    server_key: &str,
    body: &Value,
) -> Result<Response, NakamaError> {
    tracing::debug!("POST {}", url);
    let response = client
        .post(url)
        .basic_auth(server_key, Some(""))
        .json(body)
        .send()
        .await?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_bearer() {
        let session = Session::new(Client::new(), "secret-token".to_string());
        let rendered = format!("{:?}", session);
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("secret-token"));
    }
}
