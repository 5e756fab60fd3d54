//! # Session
//!
//! Connection and account lifecycle of one portal page.
//!
//! - [`state`] - [`Session`] snapshot, [`AccountView`] and derived [`SessionPhase`]
//! - [`capability`] - traits for the wallet, the program client and user prompts
//! - [`controller`] - [`SessionController`], the state machine driving the page

pub mod capability;
pub mod controller;
pub mod state;

pub use capability::{
    Address, Invocation, ProgramClient, ProgramMethod, SignerRole, UserPrompt, WalletProvider,
};
pub use controller::SessionController;
pub use state::{AccountView, Session, SessionPhase};
