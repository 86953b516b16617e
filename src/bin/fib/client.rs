//! HTTP client for a fib-serve endpoint

use fibseq::Bounds;
use reqwest::Client;

/// Client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// API client for a sequence endpoint
pub struct FibClient {
    client: Client,
    endpoint: String,
}

impl FibClient {
    /// Create a new client for the given endpoint URL, e.g.
    /// `http://127.0.0.1:8080/api/fib`
    pub fn new(endpoint: &str) -> Result<Self, ClientError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('?').to_string(),
        })
    }

    /// Full request URL for the given bounds.
    pub fn url_for(&self, bounds: &Bounds) -> String {
        format!("{}?{}", self.endpoint, bounds.to_query())
    }

    /// GET {endpoint}?n=..&startx=..&starty=.. - Fetch a sequence
    pub async fn fetch(&self, bounds: &Bounds) -> Result<Vec<u64>, ClientError> {
        let url = self.url_for(bounds);
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default().trim_end().to_string();
            return Err(ClientError::Api { status, message });
        }

        // Response is a bare array
        let values: Vec<u64> = resp.json().await?;
        Ok(values)
    }
}
