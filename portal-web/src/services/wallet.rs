//! Phantom Integration via wasm-bindgen
//!
//! JavaScript interop for the injected `window.solana` provider. Transactions
//! cross the boundary as serialized bytes; the glue rebuilds a web3.js
//! `Transaction` only because Phantom's `signTransaction` expects one.

use async_trait::async_trait;
use js_sys::{Reflect, Uint8Array};
use lib_core::{Address, PortalError, WalletProvider};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function hasSolanaProvider() {
    return typeof window.solana !== 'undefined' && window.solana !== null;
}

export function isPhantomProvider() {
    return !!(window.solana && window.solana.isPhantom);
}

export async function connectPhantom(onlyIfTrusted) {
    const provider = window.solana;
    if (!provider) {
        throw new Error('Solana object not found! Get a Phantom Wallet');
    }
    const response = onlyIfTrusted
        ? await provider.connect({ onlyIfTrusted: true })
        : await provider.connect();
    return { publicKey: response.publicKey.toString() };
}

export async function signTransactionBytes(bytes) {
    const provider = window.solana;
    if (!provider) {
        throw new Error('Wallet adapter not found');
    }
    if (typeof window.solanaWeb3 === 'undefined') {
        throw new Error('Solana Web3.js not loaded');
    }
    const tx = window.solanaWeb3.Transaction.from(bytes);
    const signed = await provider.signTransaction(tx);
    return new Uint8Array(signed.serialize());
}
")]
extern "C" {
    fn hasSolanaProvider() -> bool;

    fn isPhantomProvider() -> bool;

    #[wasm_bindgen(catch)]
    async fn connectPhantom(only_if_trusted: bool) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn signTransactionBytes(bytes: &[u8]) -> Result<JsValue, JsValue>;
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConnectResponse {
    public_key: String,
}

/// The Phantom extension, reached through `window.solana`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhantomWallet;

#[async_trait(?Send)]
impl WalletProvider for PhantomWallet {
    fn is_available(&self) -> bool {
        hasSolanaProvider()
    }

    fn is_recognized_kind(&self) -> bool {
        isPhantomProvider()
    }

    async fn connect(&self, trusted_only: bool) -> lib_core::Result<Address> {
        let result = connectPhantom(trusted_only)
            .await
            .map_err(|e| PortalError::Authorization(js_error_message(&e)))?;

        let response: ConnectResponse = serde_wasm_bindgen::from_value(result).map_err(|e| {
            PortalError::Authorization(format!("Unexpected connect response: {}", e))
        })?;
        Ok(response.public_key)
    }

    async fn sign_transaction(&self, transaction: Vec<u8>) -> lib_core::Result<Vec<u8>> {
        let signed = signTransactionBytes(&transaction)
            .await
            .map_err(|e| PortalError::Authorization(js_error_message(&e)))?;
        Ok(Uint8Array::new(&signed).to_vec())
    }
}

/// Best-effort text for a rejected JS promise.
///
/// Phantom rejects with plain `{ code, message }` objects rather than `Error`s.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Some(message) = Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
    {
        return message;
    }
    format!("{:?}", err)
}
