use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::TransportError;

/// The seam between the typed services and the wire.
///
/// The production implementation is [`HttpTransport`]; tests swap in an
/// in-memory fake to script responses without a server.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, TransportError>;
    async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError>;
    async fn delete(&self, path: &str, body: Value) -> Result<Value, TransportError>;
}

/// `reqwest`-backed transport with an in-process cookie store.
///
/// The session credential is a cookie set by the login endpoint; it lives
/// in the client's cookie jar for the lifetime of the process and is never
/// persisted by the app.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns `TransportError` if the underlying client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn finish(response: reqwest::Response) -> Result<Value, TransportError> {
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }
        // Some endpoints answer 200 with an empty or non-JSON body; the
        // caller only cares about the status in that case.
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, TransportError> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Self::finish(response).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        let response = self.client.post(self.url(path)).json(&body).send().await?;
        Self::finish(response).await
    }

    async fn delete(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        let response = self
            .client
            .delete(self.url(path))
            .json(&body)
            .send()
            .await?;
        Self::finish(response).await
    }
}
