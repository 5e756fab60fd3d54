//! Errors raised while encoding, decoding or transporting program calls.

use lib_core::PortalError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SolanaError>;

#[derive(Debug, Error)]
pub enum SolanaError {
    #[error("Failed to parse IDL JSON: {0}")]
    IdlParse(String),

    #[error("Invalid IDL format: {0}")]
    IdlFormat(String),

    #[error("Invalid keypair: {0}")]
    Keypair(String),

    #[error("Invalid address '{0}'")]
    InvalidAddress(String),

    #[error("Failed to build instruction: {0}")]
    Instruction(String),

    #[error("Failed to decode account: {0}")]
    AccountDecode(String),

    #[error("Failed to serialize transaction: {0}")]
    Serialize(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Unexpected RPC response: {0}")]
    Response(String),

    #[error("Transaction {signature} failed: {reason}")]
    TransactionFailed { signature: String, reason: String },

    #[error("Transaction {0} was not confirmed in time")]
    Unconfirmed(String),
}

impl From<serde_json::Error> for SolanaError {
    fn from(err: serde_json::Error) -> Self {
        SolanaError::Response(err.to_string())
    }
}

impl From<SolanaError> for PortalError {
    fn from(err: SolanaError) -> Self {
        match err {
            SolanaError::IdlParse(_) | SolanaError::IdlFormat(_) | SolanaError::Keypair(_) => {
                PortalError::Config(err.to_string())
            }
            SolanaError::InvalidAddress(_) => PortalError::InvalidInput(err.to_string()),
            SolanaError::Instruction(_)
            | SolanaError::AccountDecode(_)
            | SolanaError::Serialize(_) => PortalError::Codec(err.to_string()),
            SolanaError::Transport(_)
            | SolanaError::Rpc { .. }
            | SolanaError::Response(_)
            | SolanaError::TransactionFailed { .. }
            | SolanaError::Unconfirmed(_) => PortalError::RemoteCall(err.to_string()),
        }
    }
}
