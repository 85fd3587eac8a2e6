//! Shipping label link resolution.

use reqwest::Url;

use crate::endpoints::label_file_url;
use crate::transport::{is_success, PortalTransport};

/// Picks the label endpoint that actually serves an order's PDF.
#[derive(Debug, Clone)]
pub struct LabelResolver {
    endpoints: Vec<Url>,
    verify: bool,
}

impl LabelResolver {
    pub fn new(endpoints: Vec<Url>, verify: bool) -> Self {
        Self { endpoints, verify }
    }

    pub fn candidates(&self, order_ref: &str) -> Vec<Url> {
        self.endpoints
            .iter()
            .map(|endpoint| label_file_url(endpoint, order_ref))
            .collect()
    }

    /// Probes candidates in order and returns the first that answers with a
    /// success status. Without verification the first candidate is returned
    /// unchecked.
    pub fn resolve<T>(&self, transport: &T, order_ref: &str) -> Option<Url>
    where
        T: PortalTransport + ?Sized,
    {
        let candidates = self.candidates(order_ref);

        if !self.verify {
            return candidates.into_iter().next();
        }

        for url in candidates {
            match transport.probe(&url) {
                Ok(status) if is_success(status) => {
                    tracing::debug!(order_ref, url = %url, "Shipping label found");
                    return Some(url);
                }
                Ok(status) => {
                    tracing::debug!(order_ref, url = %url, status, "No shipping label at candidate");
                }
                Err(e) => {
                    tracing::warn!(order_ref, url = %url, error = %e, "Shipping label probe failed");
                }
            }
        }

        None
    }
}
