use serde::{Deserialize, Serialize};

/// One submitted GIF as stored in the program's base account.
///
/// Items are owned by the remote account. The portal never edits one in
/// place; it appends through `addGif` and re-fetches the whole list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GifItem {
    pub gif_link: String,
    /// Base58 address of the wallet that submitted the link
    pub user_address: String,
}

impl GifItem {
    pub fn new(gif_link: impl Into<String>, user_address: impl Into<String>) -> Self {
        Self {
            gif_link: gif_link.into(),
            user_address: user_address.into(),
        }
    }
}

/// Solana cluster the portal talks to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    #[serde(rename = "mainnet-beta")]
    MainnetBeta,
    Localnet,
}

impl Cluster {
    /// Name used in `?cluster=` query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Localnet => "localnet",
        }
    }

    /// Public JSON-RPC endpoint for the cluster.
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Localnet => "http://127.0.0.1:8899",
        }
    }
}

impl std::fmt::Display for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
