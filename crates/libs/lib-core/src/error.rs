//! # Centralized Error Handling
//!
//! [`PortalError`] is the error type shared by every capability the session
//! controller calls into. The controller never lets one escape: each variant
//! maps onto a logging or state outcome instead.
//!
//! ## Error Categories
//!
//! 1. **Wallet errors**
//!    - [`WalletMissing`](PortalError::WalletMissing) → alert the user and open the install page
//!    - [`Authorization`](PortalError::Authorization) → logged only
//!
//! 2. **Program errors**
//!    - [`RemoteCall`](PortalError::RemoteCall) → logged only, no retry
//!    - [`Fetch`](PortalError::Fetch) → surfaced as
//!      [`AccountView::FetchError`](crate::AccountView::FetchError)
//!
//! 3. **Startup / data errors**
//!    - [`Config`](PortalError::Config) → bundled IDL or keypair is unusable
//!    - [`Codec`](PortalError::Codec) → on-chain data does not match the expected layout
//!    - [`InvalidInput`](PortalError::InvalidInput)
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{PortalError, Result};
//!
//! fn require_link(link: &str) -> Result<&str> {
//!     if link.is_empty() {
//!         return Err(PortalError::InvalidInput("No gif link given".to_string()));
//!     }
//!     Ok(link)
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, PortalError>`.
pub type Result<T> = std::result::Result<T, PortalError>;

/// Portal-wide error type.
///
/// Each variant carries a descriptive `String`; `thiserror` provides `Display`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PortalError {
    /// No wallet provider injected into the page, or not a supported kind.
    #[error("Wallet not found: {0}")]
    WalletMissing(String),

    /// The wallet refused (or the user rejected) a connect or signing request.
    #[error("Wallet authorization failed: {0}")]
    Authorization(String),

    /// A program instruction could not be built, signed, sent or confirmed.
    #[error("Remote call failed: {0}")]
    RemoteCall(String),

    /// The base account could not be fetched or decoded.
    #[error("Account fetch failed: {0}")]
    Fetch(String),

    /// Bundled configuration (IDL, keypair, cluster) is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Binary layout error (instruction data, account data, transactions).
    #[error("Codec error: {0}")]
    Codec(String),

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PortalError {
    /// Short variant name, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            PortalError::WalletMissing(_) => "WalletMissing",
            PortalError::Authorization(_) => "Authorization",
            PortalError::RemoteCall(_) => "RemoteCall",
            PortalError::Fetch(_) => "Fetch",
            PortalError::Config(_) => "Config",
            PortalError::Codec(_) => "Codec",
            PortalError::InvalidInput(_) => "InvalidInput",
        }
    }

    /// Text suitable for showing in the page.
    ///
    /// Transport and layout details stay in the console log.
    pub fn user_message(&self) -> String {
        match self {
            PortalError::WalletMissing(_) => "Phantom wallet not found!".to_string(),
            PortalError::Authorization(msg) | PortalError::InvalidInput(msg) => msg.clone(),
            PortalError::Fetch(_) => "Could not load the GIF collection".to_string(),
            PortalError::RemoteCall(_) => "Transaction failed".to_string(),
            PortalError::Config(_) | PortalError::Codec(_) => {
                "An internal error occurred".to_string()
            }
        }
    }
}
