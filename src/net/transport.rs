//! HTTP transport used by the form controllers.
//!
//! DESIGN
//! ======
//! `Transport` is the seam between a controller and the network so tests can
//! swap in a scripted mock. The trait is `?Send`: controllers live on one UI
//! task and hold non-`Send` render callbacks.
//!
//! `HttpTransport` applies no headers, no timeout and no retries. Whatever
//! `reqwest::Client::new()` does is the behaviour.

use serde_json::Value;

use super::types::SubmissionError;

#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// POST `body` as JSON to `url` and return the parsed response body.
    ///
    /// # Errors
    ///
    /// Any failure to obtain a 2xx JSON response maps to a [`SubmissionError`].
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, SubmissionError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing client (connection pool, proxy settings).
    #[must_use]
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, SubmissionError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmissionError::Status { status: status.as_u16(), body });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SubmissionError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
#[path = "transport_test.rs"]
mod tests;
