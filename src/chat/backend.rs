// src/chat/backend.rs
//! Remote answer source

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one query and return the raw answer text
    async fn ask(&self, query: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    query: &'a str,
}

/// Only `answer` is read; anything else in the body (e.g. `sources`) is ignored.
#[derive(Debug, Deserialize)]
struct AskResponse {
    answer: String,
}

/// POSTs `{"query": ..}` as JSON and reads `{"answer": ..}` back.
///
/// The status code is not inspected. A body without `answer` is a
/// decode error, which is how the server's `{"error": ..}` replies surface.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn ask(&self, query: &str) -> Result<String> {
        tracing::debug!(endpoint = %self.endpoint, "posting chat query");

        let response = self.client
            .post(&self.endpoint)
            .json(&AskRequest { query })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(%status, bytes = body.len(), "chat response received");

        let parsed: AskResponse = serde_json::from_slice(&body)?;
        Ok(parsed.answer)
    }
}
