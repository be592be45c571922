//! `http_get` executor: GET a fixed URL with the call arguments as query parameters

use agentkit_domain::{ToolArguments, ToolError, ToolExecutor};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Maximum response body size (5 MB)
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

const TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpGetExecutor {
    client: reqwest::Client,
    url: String,
}

impl HttpGetExecutor {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Render an argument as a query string value
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl ToolExecutor for HttpGetExecutor {
    async fn execute(&self, args: ToolArguments) -> Result<Value, ToolError> {
        let query: Vec<(String, String)> = args
            .iter()
            .map(|(k, v)| (k.clone(), query_value(v)))
            .collect();
        debug!("GET {} with {} query parameter(s)", self.url, query.len());

        let response = self
            .client
            .get(&self.url)
            .query(&query)
            .header("User-Agent", concat!("agentkit/", env!("CARGO_PKG_VERSION")))
            .timeout(TIMEOUT)
            .send()
            .await
            .map_err(|e| ToolError::execution_failed(format!("Failed to fetch URL: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::execution_failed(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.bytes().await.map_err(|e| {
            ToolError::execution_failed(format!("Failed to read response body: {}", e))
        })?;
        if body.len() > MAX_BODY_SIZE {
            return Err(ToolError::execution_failed(format!(
                "Response too large: {} bytes (max: {} bytes)",
                body.len(),
                MAX_BODY_SIZE
            )));
        }

        // JSON bodies are returned structured, anything else as text
        Ok(serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_value() {
        assert_eq!(query_value(&json!("eth")), "eth");
        assert_eq!(query_value(&json!(3)), "3");
        assert_eq!(query_value(&json!(true)), "true");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_execution_failure() {
        let exec = HttpGetExecutor::new("http://127.0.0.1:9/price");
        let err = exec.execute(ToolArguments::new()).await.unwrap_err();
        assert_eq!(err.code(), "EXECUTION_FAILED");
    }
}
