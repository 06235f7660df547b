//! Vercel Edge Config backed store
//!
//! The read path uses the connection string's cached accessor
//! (`GET https://edge-config.vercel.com/{id}/item/{key}?token=...`), which is
//! read-only and eventually consistent. The write path goes through the
//! management REST API (`PATCH {api_base}/v1/edge-config/{id}/items`) with a
//! separate bearer credential, upserting the single well-known key.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::{check_ceiling, ClipboardStore, StoreError};
use crate::config::StorageConfig;
use crate::types::ClipboardItem;

/// Parsed pieces of an Edge Config connection string
/// (`https://edge-config.vercel.com/{id}?token={token}`)
#[derive(Debug, Clone, PartialEq, Eq)]
struct Connection {
    id: String,
    read_token: String,
    base: String,
}

impl Connection {
    fn parse(connection_url: &str) -> Option<Self> {
        let url = Url::parse(connection_url).ok()?;
        let id = url
            .path_segments()
            .and_then(|mut segments| segments.next())
            .filter(|s| !s.is_empty())?
            .to_string();
        let read_token = url
            .query_pairs()
            .find(|(k, _)| k == "token")
            .map(|(_, v)| v.into_owned())?;
        let base = format!(
            "{}://{}",
            url.scheme(),
            url.host_str().unwrap_or("edge-config.vercel.com")
        );
        Some(Self {
            id,
            read_token,
            base,
        })
    }
}

/// Upsert request body for the management API
#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
    items: Vec<UpdateItem<'a>>,
}

#[derive(Debug, Serialize)]
struct UpdateItem<'a> {
    operation: &'static str,
    key: &'a str,
    value: &'a ClipboardItem,
}

/// Store implementation over a hosted Edge Config
pub struct EdgeConfigStore {
    client: Client,
    connection: Option<Connection>,
    api_base: String,
    api_token: Option<String>,
    key: String,
    max_content_bytes: usize,
}

impl EdgeConfigStore {
    pub fn new(config: &StorageConfig) -> anyhow::Result<Self> {
        let connection = config
            .connection_url
            .as_deref()
            .and_then(Connection::parse);

        if config.connection_url.is_some() && connection.is_none() {
            warn!("connection URL is set but could not be parsed; read path disabled");
        }
        if config.api_token.is_none() {
            warn!("no API token configured; writes will fail until one is provided");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            connection,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            key: config.key.clone(),
            max_content_bytes: config.max_content_bytes,
        })
    }

    fn read_url(&self, connection: &Connection) -> String {
        format!(
            "{}/{}/item/{}?token={}",
            connection.base, connection.id, self.key, connection.read_token
        )
    }
}

#[async_trait::async_trait]
impl ClipboardStore for EdgeConfigStore {
    async fn read(&self) -> Result<Option<ClipboardItem>, StoreError> {
        // The caller-facing contract for reads is "no content yet", never
        // "system broken", so an unconfigured read path is simply empty.
        let Some(connection) = &self.connection else {
            debug!("read path not configured, reporting empty clipboard");
            return Ok(None);
        };

        let response = self
            .client
            .get(self.read_url(connection))
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("read request failed: {e}")))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let value: Value = response.json().await.map_err(|e| {
                    StoreError::MalformedResponse(format!("invalid JSON body: {e}"))
                })?;
                if value.is_null() {
                    return Ok(None);
                }
                let item: ClipboardItem = serde_json::from_value(value).map_err(|e| {
                    StoreError::MalformedResponse(format!("unexpected record shape: {e}"))
                })?;
                Ok(Some(item))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(StoreError::Unavailable(format!(
                    "read returned {}: {}",
                    status,
                    truncate(&body, 200)
                )))
            }
        }
    }

    async fn write(&self, item: &ClipboardItem) -> Result<(), StoreError> {
        check_ceiling(&item.content, self.max_content_bytes)?;

        let Some(connection) = &self.connection else {
            return Err(StoreError::Unavailable(
                "connection URL is not configured".to_string(),
            ));
        };
        let Some(token) = &self.api_token else {
            return Err(StoreError::Unavailable(
                "API token is not configured; required for writes".to_string(),
            ));
        };

        let body = UpdateRequest {
            items: vec![UpdateItem {
                operation: "upsert",
                key: &self.key,
                value: item,
            }],
        };

        let response = self
            .client
            .patch(format!(
                "{}/v1/edge-config/{}/items",
                self.api_base, connection.id
            ))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("write request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            debug!("stored clipboard record ({} bytes)", item.content.len());
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        // The service tier enforces its own ceiling; surface a mismatch
        // between our configured limit and the backend's as "too large"
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            return Err(StoreError::PayloadTooLarge {
                size: item.content.len(),
                limit: self.max_content_bytes,
            });
        }
        Err(StoreError::Unavailable(format!(
            "write returned {}: {}",
            status,
            truncate(&body, 200)
        )))
    }

    fn is_configured(&self) -> bool {
        self.connection.is_some()
    }
}

/// Truncate a string to a byte budget at a char boundary, for log/error text
fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
