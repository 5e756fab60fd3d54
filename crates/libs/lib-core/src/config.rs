//! # Portal Configuration
//!
//! Process-wide settings built once at startup and passed into the
//! [`SessionController`](crate::SessionController). There is no global
//! instance: the front end assembles a [`PortalConfig`] from its bundled files
//! and hands it over, tests build their own.
//!
//! ```rust
//! use lib_core::config::PortalConfig;
//! use shared::dto::portal::Cluster;
//!
//! let config = PortalConfig::new("6PdwcpYRG8WgfMTz5xmnfHm7KdVD88VLKA2xQvUedicK")
//!     .with_cluster(Cluster::Devnet);
//! assert!(config.validate().is_ok());
//! ```

use shared::dto::portal::Cluster;
use shared::utils::{explorer_address_url_with_base, EXPLORER_BASE};

use crate::error::{PortalError, Result};

/// Where users are sent when no supported wallet is installed.
pub const PHANTOM_INSTALL_URL: &str = "https://phantom.app/";

/// Session-level configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    /// Network the program is deployed on
    pub cluster: Cluster,

    /// Base58 address of the shared account holding the GIF list
    ///
    /// Derived from the bundled signing key; every session reads and appends
    /// to this one account.
    pub base_account: String,

    /// Page opened when the wallet extension is missing
    pub install_url: String,

    /// Explorer host used for submitter links
    pub explorer_base: String,
}

impl PortalConfig {
    /// Devnet configuration for the given base account.
    pub fn new(base_account: impl Into<String>) -> Self {
        Self {
            cluster: Cluster::Devnet,
            base_account: base_account.into(),
            install_url: PHANTOM_INSTALL_URL.to_string(),
            explorer_base: EXPLORER_BASE.to_string(),
        }
    }

    pub fn with_cluster(mut self, cluster: Cluster) -> Self {
        self.cluster = cluster;
        self
    }

    pub fn with_install_url(mut self, url: impl Into<String>) -> Self {
        self.install_url = url.into();
        self
    }

    /// Validate configuration values.
    ///
    /// The base account must be a base58 string decoding to 32 bytes, and the
    /// URLs must be absolute http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        let decoded = bs58::decode(&self.base_account).into_vec().map_err(|e| {
            PortalError::Config(format!(
                "base account '{}' is not valid base58: {}",
                self.base_account, e
            ))
        })?;
        if decoded.len() != 32 {
            return Err(PortalError::Config(format!(
                "base account must decode to 32 bytes, got {}",
                decoded.len()
            )));
        }

        for (name, url) in [
            ("install_url", &self.install_url),
            ("explorer_base", &self.explorer_base),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(PortalError::Config(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        Ok(())
    }

    /// Explorer link for an address on the configured cluster.
    pub fn explorer_link(&self, address: &str) -> String {
        explorer_address_url_with_base(&self.explorer_base, address, self.cluster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "6PdwcpYRG8WgfMTz5xmnfHm7KdVD88VLKA2xQvUedicK";

    #[test]
    fn test_defaults_target_devnet() {
        let config = PortalConfig::new(BASE);
        assert_eq!(config.cluster, Cluster::Devnet);
        assert_eq!(config.install_url, PHANTOM_INSTALL_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_base58_account() {
        let config = PortalConfig::new("not-base58-0OIl");
        assert!(matches!(config.validate(), Err(PortalError::Config(_))));
    }

    #[test]
    fn test_rejects_short_account() {
        let config = PortalConfig::new("abc");
        assert!(matches!(config.validate(), Err(PortalError::Config(_))));
    }

    #[test]
    fn test_rejects_relative_install_url() {
        let config = PortalConfig::new(BASE).with_install_url("phantom.app");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explorer_link() {
        let config = PortalConfig::new(BASE);
        assert_eq!(
            config.explorer_link("abc"),
            "https://explorer.solana.com/address/abc?cluster=devnet"
        );
    }
}
