//! Async Rust client for the Apache Deltacloud cross-cloud management API.
//!
//! Deltacloud fronts many IaaS backends (EC2, GoGrid, OpenNebula, Rackspace,
//! RHEV-M, a mock driver, ...) with one REST+XML protocol. This crate speaks
//! that protocol:
//!
//! - **[`DeltacloudClient`]** — the facade. Construct it with
//!   [`new()`](DeltacloudClient::new) or
//!   [`with_credentials()`](DeltacloudClient::with_credentials), then call
//!   resource operations (`list_instances`, `get_image`, `create_key`, ...)
//!   directly on it.
//!
//! - **[`request`]** — builds each operation's URL and form body from the
//!   client's base URL. [`CreateInstanceParams`] collects the optional
//!   provisioning knobs (realm, hardware profile, key, memory/storage
//!   overrides).
//!
//! - **[`unmarshal`]** — streaming XML decoding. Documents are scanned for
//!   the first (or every) occurrence of a resource element, so the client
//!   is indifferent to wrapper elements a driver may add.
//!
//! - **[`transport`]** — the HTTP seam. [`ReqwestTransport`] is the real
//!   implementation; the [`HttpTransport`] trait lets tests substitute a
//!   canned one. TLS verification is controlled by [`TlsMode`].
//!
//! - **Domain model** ([`model`]) — plain data types for the wire resources:
//!   [`Instance`], [`Image`], [`Realm`], [`HardwareProfile`], [`Key`],
//!   [`Api`], plus the [`Action`] links servers attach to instances.
//!
//! # Example
//!
//! ```rust,ignore
//! use deltacloud_api::DeltacloudClient;
//!
//! let client = DeltacloudClient::with_credentials(
//!     "http://localhost:3001/api",
//!     "mockuser",
//!     "mockpassword".into(),
//! )?;
//!
//! println!("driver: {}", client.server_type().await);
//!
//! for instance in client.list_instances().await? {
//!     println!("{} [{}]", instance.id, instance.state.as_deref().unwrap_or("?"));
//! }
//!
//! let instance = client.create_instance("img1").await?;
//! if let Some(stop) = instance.action(deltacloud_api::Action::STOP) {
//!     client.perform_action(stop).await?;
//! }
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod request;
pub mod transport;
pub mod unmarshal;

// ── Primary re-exports ──────────────────────────────────────────────
pub use client::DeltacloudClient;
pub use error::Error;
pub use request::{CreateInstanceParams, Request};
pub use transport::{Credentials, HttpTransport, ReqwestTransport, TlsMode, TransportConfig};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Action, Api, Driver, HardwareProfile, Image, Instance, Key, Property, PropertyRange, Realm,
};
