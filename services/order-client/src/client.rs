//! Order Client
//!
//! Authenticated session on the supplier portal. The order export is
//! downloaded at most once per client and kept in memory; order records are
//! rebuilt from it on every call to [`OrderClient::fetch_orders`].

use bobochic_models::{ExportRow, ExportTable, OrderRecord};
use bobochic_utils::{
    parse_address, parse_export, parse_items, title_case, PortalConfig, PortalError, PortalResult,
};
use once_cell::sync::OnceCell;
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, info};

use crate::endpoints::Endpoints;
use crate::labels::LabelResolver;
use crate::transport::{HttpTransport, PortalTransport};

pub struct OrderClient<T = HttpTransport> {
    transport: T,
    endpoints: Endpoints,
    labels: LabelResolver,
    table: OnceCell<ExportTable>,
}

impl OrderClient<HttpTransport> {
    /// Opens a session over HTTP and logs in.
    pub fn connect(config: &PortalConfig, email: &str, password: &str) -> PortalResult<Self> {
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_seconds))?;
        Self::with_transport(transport, config, email, password)
    }
}

impl<T: PortalTransport> OrderClient<T> {
    /// Logs in through `transport`. A rejected login returns
    /// `PortalError::Authentication` and no client.
    pub fn with_transport(
        transport: T,
        config: &PortalConfig,
        email: &str,
        password: &str,
    ) -> PortalResult<Self> {
        let endpoints = Endpoints::from_config(config)?;
        let labels = LabelResolver::new(endpoints.label_files.clone(), config.verify_labels);

        let client = Self {
            transport,
            endpoints,
            labels,
            table: OnceCell::new(),
        };
        client.login(email, password)?;

        Ok(client)
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Posts the credentials to the login form. The session cookies set by
    /// the portal are kept by the transport.
    pub fn login(&self, email: &str, password: &str) -> PortalResult<()> {
        let form = [("EMAIL", email), ("PASSWORD", password)];
        let response = self.transport.post_form(&self.endpoints.login, &form)?;

        if !response.is_success() {
            return Err(PortalError::authentication(response.status));
        }

        info!(email, "Logged into supplier portal");
        Ok(())
    }

    /// Downloads the raw order export.
    pub fn fetch_export_bytes(&self) -> PortalResult<Vec<u8>> {
        let response = self.transport.get(&self.endpoints.commands_export)?;

        if !response.is_success() {
            return Err(PortalError::export(response.status));
        }

        info!(bytes = response.body.len(), "Downloaded order export");
        Ok(response.body)
    }

    /// Cached export table, downloaded and parsed on first access. A failed
    /// download or parse leaves the cache empty.
    pub fn table(&self) -> PortalResult<&ExportTable> {
        if let Some(table) = self.table.get() {
            debug!(rows = table.len(), "Using cached order export");
            return Ok(table);
        }

        self.table.get_or_try_init(|| {
            let bytes = self.fetch_export_bytes()?;
            parse_export(&bytes)
        })
    }

    /// Drops the cached table; the next access downloads the export again.
    pub fn invalidate_table(&mut self) {
        if self.table.take().is_some() {
            debug!("Order export cache cleared");
        }
    }

    pub fn shipping_label_url(&self, order_ref: &str) -> Option<Url> {
        self.labels.resolve(&self.transport, order_ref)
    }

    /// Builds one record per export row.
    pub fn fetch_orders(&self) -> PortalResult<Vec<OrderRecord>> {
        let table = self.table()?;
        let orders: Vec<OrderRecord> = table.iter().map(|row| self.build_order(row)).collect();

        info!(orders = orders.len(), "Assembled orders");
        Ok(orders)
    }

    fn build_order(&self, row: &ExportRow) -> OrderRecord {
        let shipping_label_url = row
            .reference
            .as_deref()
            .and_then(|reference| self.shipping_label_url(reference))
            .map(|url| url.to_string());

        OrderRecord {
            reference: row.reference.clone(),
            date: row.date.clone(),
            customer: row.customer.as_deref().map(title_case),
            phone: row.phone.clone(),
            address: row.address.as_deref().map(parse_address).unwrap_or_default(),
            items: row.items.as_deref().map(parse_items).unwrap_or_default(),
            shipping_label_url,
        }
    }
}
