//! # Capability Traits
//!
//! The controller's view of the outside world. The browser front end provides
//! the real implementations (Phantom bindings, the Anchor program client,
//! `window.alert`); tests provide doubles.
//!
//! All traits are `?Send`: futures in the browser run on a single thread and
//! hold `JsValue`s, which are not `Send`.

use async_trait::async_trait;
use shared::dto::portal::GifItem;

use crate::error::Result;

/// Base58 account address.
pub type Address = String;

/// Browser-extension wallet.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// A wallet object is injected into the page.
    fn is_available(&self) -> bool;

    /// The injected wallet is the supported kind (Phantom).
    fn is_recognized_kind(&self) -> bool;

    /// Request authorization and return the wallet address.
    ///
    /// With `trusted_only` the wallet must not prompt; it succeeds only when
    /// the site was approved earlier.
    async fn connect(&self, trusted_only: bool) -> Result<Address>;

    /// Have the wallet add its signature to a serialized transaction.
    async fn sign_transaction(&self, transaction: Vec<u8>) -> Result<Vec<u8>>;
}

/// Remote procedure on the GIF program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramMethod {
    /// Create the base account
    StartStuffOff,
    /// Append a link to the base account
    AddGif { gif_link: String },
}

impl ProgramMethod {
    /// Method name as written in the program IDL.
    pub fn name(&self) -> &'static str {
        match self {
            ProgramMethod::StartStuffOff => "startStuffOff",
            ProgramMethod::AddGif { .. } => "addGif",
        }
    }
}

/// Extra signer required next to the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignerRole {
    /// The bundled base account key (needed when the account is created)
    BaseAccount,
}

/// One program call: method plus the accounts and signers it runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub method: ProgramMethod,
    pub base_account: Address,
    /// Connected wallet; pays fees and signs
    pub user: Address,
    pub signers: Vec<SignerRole>,
}

impl Invocation {
    pub fn start_stuff_off(base_account: &str, user: &str) -> Self {
        Self {
            method: ProgramMethod::StartStuffOff,
            base_account: base_account.to_string(),
            user: user.to_string(),
            signers: vec![SignerRole::BaseAccount],
        }
    }

    pub fn add_gif(base_account: &str, user: &str, gif_link: &str) -> Self {
        Self {
            method: ProgramMethod::AddGif {
                gif_link: gif_link.to_string(),
            },
            base_account: base_account.to_string(),
            user: user.to_string(),
            signers: Vec::new(),
        }
    }
}

/// Client for the deployed GIF program.
#[async_trait(?Send)]
pub trait ProgramClient {
    /// Build, sign, send and confirm one call. Returns the transaction signature.
    async fn invoke(&self, invocation: Invocation) -> Result<String>;

    /// Fetch the item list stored at `address`.
    ///
    /// `Ok(None)` means the account does not exist yet.
    async fn fetch_account(&self, address: &str) -> Result<Option<Vec<GifItem>>>;
}

/// Blocking user-facing notifications.
pub trait UserPrompt {
    fn alert(&self, message: &str);

    /// Open `url` in a new tab.
    fn open_external(&self, url: &str);
}
