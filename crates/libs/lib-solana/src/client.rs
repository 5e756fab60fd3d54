//! # GIF Program Client
//!
//! [`GifProgramClient`] implements [`ProgramClient`] on top of a pluggable
//! HTTP transport and a wallet that co-signs transactions.
//!
//! Invocation flow:
//! 1. build the instruction from the IDL
//! 2. `getLatestBlockhash`
//! 3. assemble the transaction, co-sign with the base account key if required
//! 4. hand it to the wallet for the payer signature
//! 5. `sendTransaction`, then poll `getSignatureStatuses` until the configured
//!    commitment is reached

use async_trait::async_trait;
use lib_core::{Invocation, PortalError, ProgramClient, SignerRole, WalletProvider};
use serde::de::DeserializeOwned;
use shared::dto::portal::GifItem;
use solana_sdk::{hash::Hash, signature::Keypair};
use tracing::{debug, info, warn};

use crate::config::ProgramConfig;
use crate::error::{Result, SolanaError};
use crate::program::instruction::parse_pubkey;
use crate::program::transaction_builder::{
    build_transaction, encode_base64, serialize_transaction, verify_signed,
};
use crate::program::BaseAccount;
use crate::rpc::{
    self, LatestBlockhash, RpcRequest, SignatureStatus, UiAccount, WithContext,
};

/// HTTP POST of a JSON body.
#[async_trait(?Send)]
pub trait RpcTransport {
    async fn post(&self, url: &str, body: String) -> Result<String>;

    /// Wait between confirmation polls.
    async fn pause(&self, millis: u32);
}

pub struct GifProgramClient<T, W> {
    config: ProgramConfig,
    transport: T,
    wallet: W,
}

impl<T, W> GifProgramClient<T, W>
where
    T: RpcTransport,
    W: WalletProvider,
{
    pub fn new(config: ProgramConfig, transport: T, wallet: W) -> Self {
        Self {
            config,
            transport,
            wallet,
        }
    }

    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    async fn call<R: DeserializeOwned>(&self, request: RpcRequest) -> Result<R> {
        debug!("RPC {} -> {}", request.method, self.config.rpc_url);
        let body = self
            .transport
            .post(&self.config.rpc_url, request.to_json()?)
            .await?;
        rpc::parse_response(&body)
    }

    pub async fn latest_blockhash(&self) -> Result<Hash> {
        let response: WithContext<LatestBlockhash> = self
            .call(RpcRequest::get_latest_blockhash(self.config.commitment))
            .await?;
        response.value.hash()
    }

    /// Fetch and decode the base account; `None` if it does not exist.
    pub async fn base_account(&self, address: &str) -> Result<Option<BaseAccount>> {
        let response: WithContext<Option<UiAccount>> = self
            .call(RpcRequest::get_account_info(address, self.config.commitment))
            .await?;

        let Some(account) = response.value else {
            return Ok(None);
        };

        let program_id = self.config.program.program_id().to_string();
        if account.owner != program_id {
            return Err(SolanaError::AccountDecode(format!(
                "{} is owned by {}, not {}",
                address, account.owner, program_id
            )));
        }

        let data = account.decode_data()?;
        self.config.program.decode_base_account(&data).map(Some)
    }

    pub async fn send(&self, signed: &[u8]) -> Result<String> {
        self.call(RpcRequest::send_transaction(
            &encode_base64(signed),
            self.config.commitment,
        ))
        .await
    }

    pub async fn confirm(&self, signature: &str) -> Result<()> {
        let signatures = [signature.to_string()];
        for attempt in 1..=self.config.confirm_attempts {
            let response: WithContext<Vec<Option<SignatureStatus>>> = self
                .call(RpcRequest::get_signature_statuses(&signatures))
                .await?;

            if let Some(Some(status)) = response.value.into_iter().next() {
                if let Some(err) = status.err {
                    return Err(SolanaError::TransactionFailed {
                        signature: signature.to_string(),
                        reason: err.to_string(),
                    });
                }
                if status.reached(self.config.commitment) {
                    info!("Transaction {} landed in slot {}", signature, status.slot);
                    return Ok(());
                }
            }

            debug!("Transaction {} not confirmed yet (attempt {})", signature, attempt);
            self.transport.pause(self.config.confirm_interval_ms).await;
        }

        Err(SolanaError::Unconfirmed(signature.to_string()))
    }

    fn co_signers(&self, invocation: &Invocation) -> Result<Vec<&Keypair>> {
        let mut signers = Vec::with_capacity(invocation.signers.len());
        for role in &invocation.signers {
            match role {
                SignerRole::BaseAccount => {
                    let address = self.config.base_account_address();
                    if address != invocation.base_account {
                        return Err(SolanaError::Keypair(format!(
                            "bundled key {} cannot sign for {}",
                            address, invocation.base_account
                        )));
                    }
                    signers.push(&self.config.base_account);
                }
            }
        }
        Ok(signers)
    }
}

#[async_trait(?Send)]
impl<T, W> ProgramClient for GifProgramClient<T, W>
where
    T: RpcTransport,
    W: WalletProvider,
{
    async fn invoke(&self, invocation: Invocation) -> lib_core::Result<String> {
        let method = invocation.method.name();
        let instruction = self.config.program.instruction(&invocation)?;
        let payer = parse_pubkey(&invocation.user)?;
        let co_signers = self.co_signers(&invocation)?;

        let blockhash = self.latest_blockhash().await?;
        let tx = build_transaction(instruction, &payer, blockhash, &co_signers)?;
        let unsigned = serialize_transaction(&tx)?;

        debug!("Requesting wallet signature for {}", method);
        let signed_bytes = self.wallet.sign_transaction(unsigned).await?;
        let signed = verify_signed(&tx, &signed_bytes)?;

        let signature = self.send(&signed_bytes).await?;
        let expected = signed.signatures.first().map(|s| s.to_string());
        if expected.as_deref() != Some(signature.as_str()) {
            warn!("RPC returned signature {} for a different transaction", signature);
        }
        info!("{} sent: {}", method, signature);

        self.confirm(&signature).await?;
        Ok(signature)
    }

    async fn fetch_account(&self, address: &str) -> lib_core::Result<Option<Vec<GifItem>>> {
        self.base_account(address)
            .await
            .map(|account| account.map(|a| a.gif_list))
            .map_err(|e| PortalError::Fetch(e.to_string()))
    }
}
