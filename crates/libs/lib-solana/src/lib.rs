//! # Solana Library
//!
//! Client side of the GIF program: everything needed to talk to the deployed
//! Anchor program without the Anchor TypeScript runtime.
//!
//! - [`idl`]: the bundled interface description (program id, instruction accounts and args)
//! - [`program`]: discriminators, instruction encoding, account decoding, transactions
//! - [`keypair`]: the bundled base account key
//! - [`rpc`]: JSON-RPC 2.0 request builders and response types
//! - [`client`]: [`GifProgramClient`], the [`lib_core::ProgramClient`] implementation
//!
//! Nothing here performs I/O directly. HTTP goes through an [`RpcTransport`]
//! supplied by the caller (the browser front end uses `gloo-net`), which keeps
//! the whole crate testable on the host.

pub mod client;
pub mod config;
pub mod error;
pub mod idl;
pub mod keypair;
pub mod program;
pub mod rpc;


pub use client::{GifProgramClient, RpcTransport};
pub use config::ProgramConfig;
pub use error::{Result, SolanaError};
pub use idl::Idl;
pub use program::{BaseAccount, GifProgram};
pub use rpc::Commitment;
