//! # Core Library
//!
//! Session lifecycle for the GIF portal: the [`SessionController`] state
//! machine, the capabilities it depends on, configuration and errors.
//!
//! Nothing in here touches the browser or the network directly. The wallet,
//! the program client and user prompts are injected through the traits in
//! [`session::capability`], which keeps the controller testable on the host.

pub mod config;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use config::PortalConfig;
pub use error::{PortalError, Result};
pub use session::{
    AccountView, Address, Invocation, ProgramClient, ProgramMethod, Session, SessionController,
    SessionPhase, SignerRole, UserPrompt, WalletProvider,
};
