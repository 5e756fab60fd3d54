//! # Session Controller
//!
//! Drives one page session through
//! `Disconnected → Connecting → ConnectedUninitialized → ConnectedReady`
//! (or `ConnectedFetchFailed`).
//!
//! Every operation is infallible from the caller's point of view: failures of
//! the wallet or the program client are logged and folded into the session
//! state, and the operation returns the phase the session ended in.
//!
//! The controller is single-threaded. Operations take `&self`; state lives in
//! a `RefCell` that is never borrowed across an `.await`. Nothing prevents a
//! second `submit_item` from starting before the first one resolves.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error, info, warn};

use crate::config::PortalConfig;
use crate::error::PortalError;
use crate::session::capability::{Invocation, ProgramClient, UserPrompt, WalletProvider};
use crate::session::state::{AccountView, Session, SessionPhase};

type Observer = Rc<dyn Fn(&Session)>;

/// State machine behind the portal page.
pub struct SessionController<W, P, U> {
    config: PortalConfig,
    wallet: W,
    program: P,
    prompt: U,
    session: RefCell<Session>,
    observers: RefCell<Vec<Observer>>,
}

impl<W, P, U> SessionController<W, P, U>
where
    W: WalletProvider,
    P: ProgramClient,
    U: UserPrompt,
{
    pub fn new(config: PortalConfig, wallet: W, program: P, prompt: U) -> Self {
        Self {
            config,
            wallet,
            program,
            prompt,
            session: RefCell::new(Session::default()),
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Register a callback invoked with a snapshot after every state change.
    pub fn subscribe(&self, observer: impl Fn(&Session) + 'static) {
        self.observers.borrow_mut().push(Rc::new(observer));
    }

    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.borrow().phase()
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn program(&self) -> &P {
        &self.program
    }

    pub fn prompt(&self) -> &U {
        &self.prompt
    }

    /// Startup check: reconnect silently if the wallet already trusts the site.
    pub async fn check_existing_session(&self) -> SessionPhase {
        if self.session.borrow().is_connected() {
            return self.phase();
        }

        if !self.wallet.is_available() || !self.wallet.is_recognized_kind() {
            self.signal_missing_wallet();
            return self.phase();
        }
        info!("Phantom wallet found");

        self.update(|s| s.connecting = true);
        match self.wallet.connect(true).await {
            Ok(address) => {
                info!("Connected with public key: {}", address);
                self.on_connected(address).await
            }
            Err(err) => {
                // Not trusted yet; the user can still connect explicitly
                debug!("No trusted wallet session: {}", err);
                self.update(|s| s.connecting = false);
                self.phase()
            }
        }
    }

    /// User-triggered connect.
    pub async fn connect(&self) -> SessionPhase {
        if self.session.borrow().is_connected() {
            debug!("connect() ignored, wallet already connected");
            return self.phase();
        }

        if !self.wallet.is_available() {
            self.signal_missing_wallet();
            return self.phase();
        }

        self.update(|s| s.connecting = true);
        match self.wallet.connect(false).await {
            Ok(address) => {
                info!("Connected with public key: {}", address);
                self.on_connected(address).await
            }
            Err(err) => {
                error!("Wallet connection failed [{}]: {}", err.kind(), err);
                self.update(|s| s.connecting = false);
                self.phase()
            }
        }
    }

    /// Mirror the input field.
    pub fn set_input(&self, value: impl Into<String>) {
        let value = value.into();
        self.update(|s| s.input_value = value);
    }

    /// Submit whatever is currently in the input field.
    pub async fn submit_input(&self) -> SessionPhase {
        let link = self.session.borrow().input_value.clone();
        self.submit_item(&link).await
    }

    /// Append `link` to the shared account.
    ///
    /// The input field is cleared before the remote call resolves and is not
    /// restored if the call fails.
    pub async fn submit_item(&self, link: &str) -> SessionPhase {
        if link.is_empty() {
            info!("No gif link given!");
            return self.phase();
        }

        self.update(|s| s.input_value.clear());
        info!("Gif link: {}", link);

        let Some(user) = self.session.borrow().wallet_address.clone() else {
            let err = PortalError::Authorization("wallet is not connected".to_string());
            error!("Error sending GIF: {}", err);
            return self.phase();
        };

        let invocation = Invocation::add_gif(&self.config.base_account, &user, link);
        match self.program.invoke(invocation).await {
            Ok(signature) => {
                info!("GIF successfully sent to program: {} (tx {})", link, signature);
                self.refresh().await
            }
            Err(err) => {
                error!("Error sending GIF [{}]: {}", err.kind(), err);
                self.phase()
            }
        }
    }

    /// One-time creation of the shared account.
    pub async fn initialize_account(&self) -> SessionPhase {
        let (phase, user) = {
            let session = self.session.borrow();
            (session.phase(), session.wallet_address.clone())
        };
        let user = match (phase, user) {
            (SessionPhase::ConnectedUninitialized, Some(user)) => user,
            (phase, _) => {
                warn!("initialize_account() ignored in phase {:?}", phase);
                return phase;
            }
        };

        let base_account = self.config.base_account.clone();
        info!("Creating BaseAccount {}", base_account);
        match self
            .program
            .invoke(Invocation::start_stuff_off(&base_account, &user))
            .await
        {
            Ok(signature) => {
                info!(
                    "Created a new BaseAccount w/ address: {} (tx {})",
                    base_account, signature
                );
                self.refresh().await
            }
            Err(err) => {
                error!("Error creating BaseAccount account [{}]: {}", err.kind(), err);
                self.phase()
            }
        }
    }

    /// Re-fetch the whole item list.
    ///
    /// Observers see the result only once the fetch has resolved.
    pub async fn refresh(&self) -> SessionPhase {
        info!("Fetching gif list...");
        let view = match self.program.fetch_account(&self.config.base_account).await {
            Ok(Some(items)) => {
                info!("Got the account with {} gifs", items.len());
                AccountView::Ready(items)
            }
            Ok(None) => {
                info!(
                    "Base account {} does not exist yet",
                    self.config.base_account
                );
                AccountView::Uninitialized
            }
            Err(err) => {
                error!("Error fetching gif list [{}]: {}", err.kind(), err);
                AccountView::FetchError(err.user_message())
            }
        };
        self.update(|s| s.account = view);
        self.phase()
    }

    async fn on_connected(&self, address: String) -> SessionPhase {
        self.update(|s| {
            s.wallet_address = Some(address);
            s.connecting = false;
        });
        self.refresh().await
    }

    fn signal_missing_wallet(&self) {
        let err = PortalError::WalletMissing(format!(
            "install a Phantom wallet from {}",
            self.config.install_url
        ));
        warn!("{}", err);
        self.prompt.alert(&err.user_message());
        self.prompt.open_external(&self.config.install_url);
    }

    fn update(&self, apply: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut session = self.session.borrow_mut();
            apply(&mut session);
            session.clone()
        };
        // Observers may subscribe from inside a notification
        let observers = self.observers.borrow().clone();
        for observer in observers {
            observer(&snapshot);
        }
    }
}
