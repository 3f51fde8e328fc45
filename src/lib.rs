//! # NetworksDB client
//!
//! Rust client for the [NetworksDB](https://networksdb.io) network
//! intelligence API: IP ownership and geolocation, organisation and ASN
//! network listings, and forward/reverse DNS lookups.
//!
//! The API defines no response schema, so every endpoint method returns the
//! JSON body as a raw [`serde_json::Value`]. HTTP status codes are not
//! interpreted; API-level errors arrive in the body like any other response.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use networksdb::NetworksDb;
//!
//! let client = NetworksDb::new("my-api-key")?;
//! let geo = client.ip_geo(Some("8.8.8.8")).await?;
//! let hosts = client.mass_reverse_dns("8.8.8.0/24", None).await?;
//! ```

/// Client, builder, and per-endpoint methods.
pub mod client;

/// Client error types.
pub mod error;

/// Network URL constants.
pub mod network;

pub use client::{NetworksDb, NetworksDbBuilder};
pub use error::{Error, Result};
pub use network::DEFAULT_API_URL;
