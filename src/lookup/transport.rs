use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::errors::{LookupError, Result};

pub const DEFAULT_API_URL: &str = "https://api.macaddress.io/v1/";
pub const AUTH_HEADER: &str = "x-Authentication-Token";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

pub trait Transport {
    fn get(&self, mac: &str, api_key: &str) -> Result<ApiResponse>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpTransport {
            client,
            url: url.to_string(),
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, mac: &str, api_key: &str) -> Result<ApiResponse> {
        let mut headers = HeaderMap::new();
        let token = HeaderValue::from_str(api_key)
            .map_err(|_| LookupError::validation("API key contains invalid header characters."))?;
        headers.insert(AUTH_HEADER, token);

        debug!(url = %self.url, mac, "sending lookup request");
        let response = self
            .client
            .get(&self.url)
            .headers(headers)
            .query(&[("output", "json"), ("search", mac)])
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(mac, status, bytes = body.len(), "lookup response received");
        Ok(ApiResponse { status, body })
    }
}
