//! # Transaction Builder
//!
//! Wraps a single program instruction into a legacy transaction paid for by
//! the connected wallet. Extra signers (the base account key when the
//! account is created) sign here; the wallet adds its own signature later,
//! in the browser.

use base64::{engine::general_purpose, Engine as _};
use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    message::Message,
    pubkey::Pubkey,
    signature::Keypair,
    transaction::Transaction,
};
use tracing::debug;

use crate::error::{Result, SolanaError};

/// Build a transaction for `instruction`, partially signed by `co_signers`.
pub fn build_transaction(
    instruction: Instruction,
    payer: &Pubkey,
    recent_blockhash: Hash,
    co_signers: &[&Keypair],
) -> Result<Transaction> {
    let mut message = Message::new(&[instruction], Some(payer));
    message.recent_blockhash = recent_blockhash;

    let mut tx = Transaction::new_unsigned(message);
    if !co_signers.is_empty() {
        tx.try_partial_sign(co_signers, recent_blockhash)
            .map_err(|e| SolanaError::Serialize(format!("co-signer rejected: {}", e)))?;
    }

    debug!(
        "Built transaction: {} required signatures, {} co-signed",
        tx.message.header.num_required_signatures,
        co_signers.len()
    );
    Ok(tx)
}

/// Wire format expected by wallets and `sendTransaction`.
pub fn serialize_transaction(tx: &Transaction) -> Result<Vec<u8>> {
    bincode::serialize(tx)
        .map_err(|e| SolanaError::Serialize(format!("Failed to serialize transaction: {}", e)))
}

pub fn deserialize_transaction(bytes: &[u8]) -> Result<Transaction> {
    bincode::deserialize(bytes)
        .map_err(|e| SolanaError::Serialize(format!("Failed to deserialize transaction: {}", e)))
}

/// Check a transaction returned by the wallet before sending it.
///
/// Every required signature must be present and the message must still be
/// the one that was handed over.
pub fn verify_signed(original: &Transaction, signed_bytes: &[u8]) -> Result<Transaction> {
    let signed = deserialize_transaction(signed_bytes)?;
    if signed.message != original.message {
        return Err(SolanaError::Serialize(
            "wallet returned a different message".to_string(),
        ));
    }
    if !signed.is_signed() {
        return Err(SolanaError::Serialize(
            "transaction is missing required signatures".to_string(),
        ));
    }
    Ok(signed)
}

pub fn encode_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}
