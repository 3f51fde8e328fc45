//! Network constants for the NetworksDB client.

use std::time::Duration;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://networksdb.io";

/// User-agent sent with every request.
pub const USER_AGENT: &str = "NetworksDB/RustClient 1.0";

/// Connection establishment timeout. No read timeout is applied.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
