//! JSON-RPC over `fetch`, via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use lib_solana::{RpcTransport, SolanaError};

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl RpcTransport for GlooTransport {
    async fn post(&self, url: &str, body: String) -> lib_solana::Result<String> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| SolanaError::Transport(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| SolanaError::Transport(format!("HTTP request failed: {}", e)))?;

        if !response.ok() {
            return Err(SolanaError::Transport(format!(
                "{} returned HTTP {}",
                url,
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SolanaError::Transport(format!("Failed to read response: {}", e)))
    }

    async fn pause(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}
