//! HTTP request sending
//!
//! This module provides the reusable HTTP client using reqwest. One client
//! (and so one connection pool) is shared by every request of a session.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::ClientSettings;
use crate::errors::{Result, TurlError};
use crate::json::format_body;
use crate::resolve::ResolvedRequest;

/// Result of an HTTP request
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub method: String,
    pub url: String,
    pub status: u16,
    pub reason: String,
    pub content_type: Option<String>,
    /// Raw body text
    pub body: String,
    pub elapsed: Duration,
}

impl FetchResponse {
    /// e.g. `200 OK (12 ms)`
    pub fn status_line(&self) -> String {
        format!("{} {} ({} ms)", self.status, self.reason, self.elapsed.as_millis())
    }

    /// Body formatted for display (JSON is pretty-printed)
    pub fn display_body(&self) -> String {
        format_body(self.content_type.as_deref(), &self.body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client with an internally owned connection pool and a fixed
/// total-request timeout
#[derive(Debug, Clone)]
pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    /// Build a client from settings
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let client = build_client(settings)?;
        debug!(
            timeout_ms = settings.timeout.as_millis() as u64,
            max_idle_per_host = settings.max_idle_per_host,
            "Built HTTP client"
        );
        Ok(Self { client })
    }

    /// GET `url` and return the body text
    pub async fn fetch(&self, url: &str, cancel: &CancellationToken) -> Result<String> {
        let response = self.execute(Method::GET, url, None, cancel).await?;
        Ok(response.body)
    }

    /// Send a resolved request using its method and body
    pub async fn send(&self, request: &ResolvedRequest, cancel: &CancellationToken) -> Result<FetchResponse> {
        let method = parse_method(&request.method)?;
        let body = if request.body.is_empty() {
            None
        } else {
            Some(request.body.clone())
        };
        self.execute(method, &request.url, body, cancel).await
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<FetchResponse> {
        let mut builder = self.client.request(method.clone(), url);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        debug!(%method, %url, "Sending request");
        let started = Instant::now();

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(String::from);
            let body = response.text().await?;
            Ok::<_, TurlError>((status, content_type, body))
        };

        let (status, content_type, body) = tokio::select! {
            _ = cancel.cancelled() => {
                info!(%url, "Request cancelled");
                return Err(TurlError::Cancelled);
            }
            result = exchange => result?,
        };

        let elapsed = started.elapsed();
        info!(
            %method,
            %url,
            status = status.as_u16(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Received response"
        );

        Ok(FetchResponse {
            method: method.to_string(),
            url: url.to_string(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
            content_type,
            body,
            elapsed,
        })
    }
}

fn build_client(settings: &ClientSettings) -> Result<Client> {
    let client = Client::builder()
        .user_agent(settings.user_agent.as_str())
        .timeout(settings.timeout)
        .pool_max_idle_per_host(settings.max_idle_per_host)
        .pool_idle_timeout(settings.idle_timeout)
        .build()?;
    Ok(client)
}

/// Parse a request `type` into an HTTP method
pub fn parse_method(method: &str) -> Result<Method> {
    let upper = method.trim().to_uppercase();
    if upper.is_empty() {
        return Ok(Method::GET);
    }
    Method::from_bytes(upper.as_bytes()).map_err(|_| TurlError::Method(method.to_string()))
}
