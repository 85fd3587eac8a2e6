//! Bobochic Supplier Order Client
//!
//! Logs into the Bobochic supplier portal, downloads the order export once,
//! and turns every export row into an [`OrderRecord`] with a parsed address,
//! parsed line items and a shipping label link.
//!
//! ```no_run
//! use bobochic_order_client::OrderClient;
//! use bobochic_utils::PortalConfig;
//!
//! # fn main() -> bobochic_utils::PortalResult<()> {
//! let client = OrderClient::connect(&PortalConfig::default(), "shop@example.com", "secret")?;
//! for order in client.fetch_orders()? {
//!     println!("{:?} {:?}", order.reference, order.shipping_label_url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoints;
pub mod labels;
pub mod transport;

pub use bobochic_models::OrderRecord;
pub use client::OrderClient;
pub use endpoints::Endpoints;
pub use labels::LabelResolver;
pub use transport::{HttpTransport, PortalResponse, PortalTransport};
