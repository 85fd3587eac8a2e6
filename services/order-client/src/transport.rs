//! HTTP transport for the supplier portal.
//!
//! [`PortalTransport`] is the seam between the order client and the network.
//! [`HttpTransport`] is the blocking `reqwest` implementation; its cookie jar
//! is the authenticated session shared by every request after login.

use bobochic_utils::{PortalError, PortalResult};
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;

/// Status and body of a portal response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl PortalResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        is_success(self.status)
    }
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Blocking request primitives used by the order client.
pub trait PortalTransport {
    fn post_form(&self, url: &Url, form: &[(&str, &str)]) -> PortalResult<PortalResponse>;

    fn get(&self, url: &Url) -> PortalResult<PortalResponse>;

    /// Status of a GET, body discarded.
    fn probe(&self, url: &Url) -> PortalResult<u16> {
        self.get(url).map(|response| response.status)
    }
}

/// Cookie-backed blocking HTTP client
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> PortalResult<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .user_agent(concat!("bobochic-order-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PortalError::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl PortalTransport for HttpTransport {
    fn post_form(&self, url: &Url, form: &[(&str, &str)]) -> PortalResult<PortalResponse> {
        let response = self.client.post(url.clone()).form(form).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;

        Ok(PortalResponse::new(status, body.to_vec()))
    }

    fn get(&self, url: &Url) -> PortalResult<PortalResponse> {
        let response = self.client.get(url.clone()).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;

        Ok(PortalResponse::new(status, body.to_vec()))
    }

    fn probe(&self, url: &Url) -> PortalResult<u16> {
        let response = self.client.get(url.clone()).send()?;
        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(!is_success(302));
        assert!(!is_success(404));
        assert!(!is_success(500));
    }

    #[test]
    fn test_http_transport_builds() {
        assert!(HttpTransport::new(Duration::from_secs(5)).is_ok());
    }
}
