use crate::error::TransportError;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{header, Client};

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Anything that can GET a URL and hand back the body as text.
///
/// The engine talks to the listings site (or a CORS relay in front of it)
/// only through this trait.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, TransportError>;
}

/// Browser-like headers sent with every page request
fn browser_headers() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();

    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8")
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        header::HeaderValue::from_static("ja,en-US;q=0.9,en;q=0.8")
    );
    headers.insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-cache")
    );
    headers.insert(
        header::PRAGMA,
        header::HeaderValue::from_static("no-cache")
    );

    headers
}

/// Creates an HTTP client that presents itself like a desktop browser
pub fn create_http_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
    let client = Client::builder()
        .user_agent(user_agent)
        .default_headers(browser_headers())
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()?;

    Ok(client)
}

/// `Transport` backed by reqwest. One GET per call, no retries.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: create_http_client(user_agent, timeout_secs)?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<String, TransportError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout { url: url.to_string() }
            } else {
                TransportError::Network { url: url.to_string(), source: e }
            }
        })?;

        let status = response.status();
        tracing::debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            return Err(TransportError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| TransportError::Body {
            url: url.to_string(),
            source: e,
        })
    }
}
