//! Network side of the cache layer: a `Fetcher` trait so the policy can
//! run against a scripted fake in tests, and the blocking reqwest
//! implementation used by the CLI.

use crate::errors::{AppError, AppResult};

/// A fetched (or cached) response. Any status counts as a response;
/// only transport failures are errors, like the browser `fetch`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub url: String,
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub trait Fetcher {
    fn fetch(&self, url: &str) -> AppResult<HttpResponse>;
}

/// Production fetcher on the blocking reqwest client.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> AppResult<HttpResponse> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let body = resp
            .bytes()
            .map_err(|e| AppError::Fetch(e.to_string()))?
            .to_vec();

        Ok(HttpResponse {
            url: url.to_string(),
            status,
            content_type,
            body,
        })
    }
}
