//! # JSON-RPC Types
//!
//! Request builders and response shapes for the four Solana RPC methods the
//! portal uses: `getAccountInfo`, `getLatestBlockhash`, `sendTransaction` and
//! `getSignatureStatuses`.

use std::str::FromStr;

use base64::{engine::general_purpose, Engine as _};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use solana_sdk::hash::Hash;

use crate::error::{Result, SolanaError};

/// Commitment level for Solana transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    #[default]
    Processed,
    Confirmed,
    Finalized,
}

#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    jsonrpc: &'static str,
    id: u64,
    pub method: &'static str,
    pub params: Value,
}

impl RpcRequest {
    fn new(method: &'static str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        }
    }

    pub fn get_account_info(address: &str, commitment: Commitment) -> Self {
        Self::new(
            "getAccountInfo",
            json!([address, { "encoding": "base64", "commitment": commitment }]),
        )
    }

    pub fn get_latest_blockhash(commitment: Commitment) -> Self {
        Self::new("getLatestBlockhash", json!([{ "commitment": commitment }]))
    }

    pub fn send_transaction(tx_base64: &str, preflight: Commitment) -> Self {
        Self::new(
            "sendTransaction",
            json!([tx_base64, { "encoding": "base64", "preflightCommitment": preflight }]),
        )
    }

    pub fn get_signature_statuses(signatures: &[String]) -> Self {
        Self::new("getSignatureStatuses", json!([signatures]))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| SolanaError::Serialize(e.to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    #[serde(default = "Option::default")]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

impl<T> RpcResponse<T> {
    pub fn into_result(self) -> Result<T> {
        match (self.result, self.error) {
            (_, Some(err)) => Err(SolanaError::Rpc {
                code: err.code,
                message: err.message,
            }),
            (Some(result), None) => Ok(result),
            (None, None) => Err(SolanaError::Response(
                "response has neither result nor error".to_string(),
            )),
        }
    }
}

/// Parse a response body and unwrap `result`.
pub fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str::<RpcResponse<T>>(body)?.into_result()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcContext {
    pub slot: u64,
}

/// `{ context, value }` wrapper used by most methods.
#[derive(Debug, Clone, Deserialize)]
pub struct WithContext<T> {
    pub context: RpcContext,
    pub value: T,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiAccount {
    pub lamports: u64,
    /// `[payload, encoding]`
    pub data: Vec<String>,
    pub owner: String,
    pub executable: bool,
}

impl UiAccount {
    pub fn decode_data(&self) -> Result<Vec<u8>> {
        match self.data.as_slice() {
            [payload, encoding] if encoding == "base64" => general_purpose::STANDARD
                .decode(payload)
                .map_err(|e| SolanaError::Response(format!("account data is not base64: {}", e))),
            other => Err(SolanaError::Response(format!(
                "unexpected account data encoding: {:?}",
                other.get(1)
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestBlockhash {
    pub blockhash: String,
    pub last_valid_block_height: u64,
}

impl LatestBlockhash {
    pub fn hash(&self) -> Result<Hash> {
        Hash::from_str(&self.blockhash).map_err(|e| {
            SolanaError::Response(format!("invalid blockhash '{}': {}", self.blockhash, e))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureStatus {
    pub slot: u64,
    pub confirmations: Option<u64>,
    pub err: Option<Value>,
    pub confirmation_status: Option<Commitment>,
}

impl SignatureStatus {
    /// Landed at `commitment` or deeper.
    pub fn reached(&self, commitment: Commitment) -> bool {
        self.confirmation_status
            .is_some_and(|status| status >= commitment)
    }
}
