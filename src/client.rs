//! NetworksDB REST API client implementation.
//!
//! The [`NetworksDb`] client exposes one method per NetworksDB endpoint. The
//! service defines no response schema, so every method returns the response
//! body as a raw [`serde_json::Value`].
//!
//! # Example
//!
//! ```rust,ignore
//! use networksdb::NetworksDb;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NetworksDb::new("my-api-key")?;
//!
//!     let info = client.ip_info(Some("8.8.8.8")).await?;
//!     println!("{info:#}");
//!
//!     let networks = client.asn_networks(13335, false).await?;
//!     println!("{networks:#}");
//!
//!     Ok(())
//! }
//! ```

use reqwest::Client;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::network::{CONNECT_TIMEOUT, DEFAULT_API_URL, USER_AGENT};

/// Builder for configuring [`NetworksDb`].
#[derive(Debug, Clone)]
pub struct NetworksDbBuilder {
    api_key: Option<String>,
    base_url: String,
}

impl NetworksDbBuilder {
    /// Create a new builder targeting the public NetworksDB service.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Set the API key sent as `X-Api-Key` on every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the base URL (trailing `/` is trimmed).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidApiKey`] if the key is not a valid header
    /// value, or [`Error::Http`] if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<NetworksDb> {
        let mut headers = reqwest::header::HeaderMap::new();
        // The service treats a missing key as an anonymous request; only
        // install the header when a key was supplied.
        if let Some(ref key) = self.api_key {
            let mut value = reqwest::header::HeaderValue::from_str(key)
                .map_err(|e| Error::InvalidApiKey(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert("X-Api-Key", value);
        }

        // One pooled transport for the client's lifetime. HTTP/2 is
        // preferred via ALPN; no read timeout is applied.
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(NetworksDb {
            http_client,
            base_url: self.base_url,
            has_api_key: self.api_key.is_some(),
        })
    }
}

impl Default for NetworksDbBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// NetworksDB REST API client.
///
/// Holds one pooled HTTP transport, reused across calls and released when
/// the last clone drops. The client is `Clone + Send + Sync`; concurrent
/// calls from multiple tasks are safe.
///
/// HTTP status codes are not interpreted: the service reports API-level
/// failures in the JSON body, which is returned to the caller verbatim.
/// Only transport failures produce an [`Error`].
#[derive(Debug, Clone)]
pub struct NetworksDb {
    http_client: Client,
    base_url: String,
    has_api_key: bool,
}

impl NetworksDb {
    /// Create a client with the given API key and default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid header value or the HTTP
    /// client cannot be initialized.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        NetworksDbBuilder::new().api_key(api_key).build()
    }

    /// Create a client without an API key.
    ///
    /// Anonymous requests are limited by the service to the free tier.
    pub fn anonymous() -> Result<Self> {
        NetworksDbBuilder::new().build()
    }

    /// Create a builder for custom configuration.
    pub fn builder() -> NetworksDbBuilder {
        NetworksDbBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.has_api_key
    }

    // =========================================================================
    // Generic request operation
    // =========================================================================

    /// POST `params` form-encoded to `base_url + path` and decode the
    /// response body as JSON.
    ///
    /// A body that is not valid JSON yields [`Value::Null`] rather than an
    /// error; existing callers rely on that contract. Transport failures
    /// (DNS, refused connection, TLS, connect timeout) propagate unchanged.
    pub async fn request(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(path, params = params.len(), "POST");

        let response = self.http_client.post(&url).form(&params).send().await?;
        let body = response.text().await?;

        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            tracing::debug!(path, error = %e, "response body is not JSON");
            Value::Null
        }))
    }

    // =========================================================================
    // Key endpoints
    // =========================================================================

    /// Get information about the configured API key (plan, request quota).
    pub async fn key_info(&self) -> Result<Value> {
        self.request("/api/key", &[]).await
    }

    // =========================================================================
    // IP endpoints
    // =========================================================================

    /// Get ownership and network information for an IP address.
    ///
    /// With `None` the service reports on the caller's own IP.
    pub async fn ip_info(&self, ip: Option<&str>) -> Result<Value> {
        let params = match ip {
            Some(ip) => vec![("ip", ip.to_string())],
            None => Vec::new(),
        };
        self.request("/api/ip-info", &params).await
    }

    /// Get geolocation for an IP address.
    ///
    /// With `None` the service reports on the caller's own IP.
    pub async fn ip_geo(&self, ip: Option<&str>) -> Result<Value> {
        let params = match ip {
            Some(ip) => vec![("ip", ip.to_string())],
            None => Vec::new(),
        };
        self.request("/api/ip-geo", &params).await
    }

    // =========================================================================
    // Organisation endpoints
    // =========================================================================

    /// Search organisations by name.
    pub async fn org_search(&self, query: &str) -> Result<Value> {
        self.request("/api/org-search", &[("search", query.to_string())])
            .await
    }

    /// Get details for an organisation by its NetworksDB id.
    pub async fn org_info(&self, id: &str) -> Result<Value> {
        self.request("/api/org-info", &[("id", id.to_string())])
            .await
    }

    /// List networks operated by an organisation.
    ///
    /// Set `ipv6` to list IPv6 networks instead of IPv4.
    pub async fn org_networks(&self, id: &str, ipv6: bool) -> Result<Value> {
        let mut params = vec![("id", id.to_string())];
        if ipv6 {
            params.push(("ipv6", "true".to_string()));
        }
        self.request("/api/org-networks", &params).await
    }

    // =========================================================================
    // ASN endpoints
    // =========================================================================

    /// Get details for an autonomous system.
    pub async fn asn_info(&self, asn: u32) -> Result<Value> {
        self.request("/api/asn", &[("asn", asn.to_string())]).await
    }

    /// List networks announced by an autonomous system.
    ///
    /// Set `ipv6` to list IPv6 networks instead of IPv4.
    pub async fn asn_networks(&self, asn: u32, ipv6: bool) -> Result<Value> {
        let mut params = vec![("asn", asn.to_string())];
        if ipv6 {
            params.push(("ipv6", "true".to_string()));
        }
        self.request("/api/asn-networks", &params).await
    }

    // =========================================================================
    // DNS endpoints
    // =========================================================================

    /// Forward DNS: resolve a domain to its known addresses.
    pub async fn dns(&self, domain: &str) -> Result<Value> {
        self.request("/api/dns", &[("domain", domain.to_string())])
            .await
    }

    /// Reverse DNS for a single IP address.
    pub async fn reverse_dns(&self, ip: &str) -> Result<Value> {
        self.request("/api/reverse-dns", &[("ip", ip.to_string())])
            .await
    }

    /// Reverse DNS for an address range.
    ///
    /// `start` is either a CIDR block (with `end` = `None`) or the first
    /// address of an explicit `start..end` range.
    pub async fn mass_reverse_dns(&self, start: &str, end: Option<&str>) -> Result<Value> {
        let params = Self::mass_reverse_dns_params(start, end);
        self.request("/api/mass-reverse-dns", &params).await
    }

    fn mass_reverse_dns_params(start: &str, end: Option<&str>) -> Vec<(&'static str, String)> {
        match end {
            Some(end) => vec![
                ("ip_start", start.to_string()),
                ("ip_end", end.to_string()),
            ],
            None => vec![("cidr", start.to_string())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::DEFAULT_API_URL;

    #[test]
    fn test_client_creation() {
        let client = NetworksDb::new("test-key").unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
        assert!(client.has_api_key());
    }

    #[test]
    fn test_anonymous_client() {
        let client = NetworksDb::anonymous().unwrap();
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = NetworksDb::builder()
            .base_url("https://networksdb.io/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://networksdb.io");
    }

    #[test]
    fn test_invalid_api_key_rejected() {
        let err = NetworksDb::new("bad\nkey").unwrap_err();
        assert!(matches!(err, Error::InvalidApiKey(_)));
    }

    #[test]
    fn test_mass_reverse_dns_params_cidr() {
        let params = NetworksDb::mass_reverse_dns_params("1.2.3.0/24", None);
        assert_eq!(params, vec![("cidr", "1.2.3.0/24".to_string())]);
    }

    #[test]
    fn test_mass_reverse_dns_params_range() {
        let params = NetworksDb::mass_reverse_dns_params("1.2.3.0", Some("1.2.3.255"));
        assert_eq!(
            params,
            vec![
                ("ip_start", "1.2.3.0".to_string()),
                ("ip_end", "1.2.3.255".to_string()),
            ]
        );
    }
}
