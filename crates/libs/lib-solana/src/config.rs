//! # Program Configuration
//!
//! Everything the program client needs, built once from the files bundled
//! with the front end.

use shared::dto::portal::Cluster;
use solana_sdk::signature::{Keypair, Signer};
use tracing::info;

use crate::error::Result;
use crate::keypair::keypair_from_json;
use crate::program::GifProgram;
use crate::rpc::Commitment;

const DEFAULT_CONFIRM_ATTEMPTS: u32 = 30;
const DEFAULT_CONFIRM_INTERVAL_MS: u32 = 500;

pub struct ProgramConfig {
    pub program: GifProgram,
    pub rpc_url: String,
    /// Used for reads, preflight and confirmation
    pub commitment: Commitment,
    /// Signs the account creation; its address is the shared base account
    pub base_account: Keypair,
    pub confirm_attempts: u32,
    pub confirm_interval_ms: u32,
}

impl ProgramConfig {
    pub fn new(program: GifProgram, base_account: Keypair, cluster: Cluster) -> Self {
        Self {
            program,
            rpc_url: cluster.rpc_url().to_string(),
            commitment: Commitment::Processed,
            base_account,
            confirm_attempts: DEFAULT_CONFIRM_ATTEMPTS,
            confirm_interval_ms: DEFAULT_CONFIRM_INTERVAL_MS,
        }
    }

    /// Build from the bundled IDL and keypair documents.
    pub fn from_bundle(idl_json: &str, keypair_json: &str, cluster: Cluster) -> Result<Self> {
        let program = GifProgram::from_idl_json(idl_json)?;
        let base_account = keypair_from_json(keypair_json)?;
        info!(
            "Program {} on {} with base account {}",
            program.program_id(),
            cluster,
            base_account.pubkey()
        );
        Ok(Self::new(program, base_account, cluster))
    }

    pub fn with_confirmation(mut self, attempts: u32, interval_ms: u32) -> Self {
        self.confirm_attempts = attempts;
        self.confirm_interval_ms = interval_ms;
        self
    }

    pub fn base_account_address(&self) -> String {
        self.base_account.pubkey().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{BASE_ACCOUNT, BUNDLED_IDL, BUNDLED_KEYPAIR};

    #[test]
    fn test_from_bundle() {
        let config =
            ProgramConfig::from_bundle(BUNDLED_IDL, BUNDLED_KEYPAIR, Cluster::Devnet).unwrap();
        assert_eq!(config.base_account_address(), BASE_ACCOUNT);
        assert_eq!(config.rpc_url, "https://api.devnet.solana.com");
        assert_eq!(config.commitment, Commitment::Processed);
    }

    #[test]
    fn test_bad_keypair_is_config_error() {
        let err = ProgramConfig::from_bundle(BUNDLED_IDL, "[1, 2, 3]", Cluster::Devnet)
            .err()
            .unwrap();
        let err: lib_core::PortalError = err.into();
        assert_eq!(err.kind(), "Config");
    }
}
