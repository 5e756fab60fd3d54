//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with 4/4 defaults
//!
//! ## Explorer Links
//!
//! - [`explorer_address_url`] - Solana Explorer page for an address on a cluster
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
//! assert_eq!(format_address(address, 4, 4), "8W6Q...JKAL");
//! ```

use crate::dto::portal::Cluster;

/// Base URL of the address explorer.
pub const EXPLORER_BASE: &str = "https://explorer.solana.com";

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(format_address(addr, 6, 6), "8W6Qgi...KuJKAL");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    // base58 is ASCII-only, byte slicing is safe past the check above
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with a 4-character prefix and suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Explorer page for `address` on `cluster`.
///
/// ```rust
/// use shared::dto::portal::Cluster;
/// use shared::utils::explorer_address_url;
///
/// assert_eq!(
///     explorer_address_url("abc", Cluster::Devnet),
///     "https://explorer.solana.com/address/abc?cluster=devnet"
/// );
/// ```
pub fn explorer_address_url(address: &str, cluster: Cluster) -> String {
    explorer_address_url_with_base(EXPLORER_BASE, address, cluster)
}

/// Same as [`explorer_address_url`] against a custom explorer host.
pub fn explorer_address_url_with_base(base: &str, address: &str, cluster: Cluster) -> String {
    format!(
        "{}/address/{}?cluster={}",
        base.trim_end_matches('/'),
        address,
        cluster.as_str()
    )
}
