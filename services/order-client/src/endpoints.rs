//! Supplier portal endpoints
//!
//! Resolved once from [`PortalConfig`] when the client is built, so a bad
//! base URL or path fails before any request is sent.

use bobochic_utils::{PortalConfig, PortalError, PortalResult};
use reqwest::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub login: Url,
    /// Orders page of the supplier area. Not requested by the client.
    pub commands_html: Url,
    pub commands_export: Url,
    /// Shipping label file endpoints, in probing order.
    pub label_files: Vec<Url>,
}

impl Endpoints {
    pub fn from_config(config: &PortalConfig) -> PortalResult<Self> {
        let base = parse_base(&config.base_url)?;

        Ok(Self {
            login: join(&base, &config.login_path)?,
            commands_html: join(&base, &config.commands_path)?,
            commands_export: join(&base, &config.export_path)?,
            label_files: config
                .label_paths
                .iter()
                .map(|path| join(&base, path))
                .collect::<PortalResult<Vec<_>>>()?,
        })
    }
}

/// Label file URL for one order: `<endpoint>?file=<order_ref>.pdf`
pub fn label_file_url(endpoint: &Url, order_ref: &str) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("file", &format!("{}.pdf", order_ref));
    url
}

fn parse_base(base_url: &str) -> PortalResult<Url> {
    // Without a trailing slash `join` would replace the last path segment.
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };

    Url::parse(&normalized).map_err(|e| {
        PortalError::configuration(format!("Invalid portal base URL {}: {}", base_url, e))
    })
}

fn join(base: &Url, path: &str) -> PortalResult<Url> {
    base.join(path.trim_start_matches('/')).map_err(|e| {
        PortalError::configuration(format!("Invalid portal path {}: {}", path, e))
    })
}
