//! Session state snapshot.

use shared::dto::portal::GifItem;

/// What the portal knows about the shared base account.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AccountView {
    /// No fetch has completed yet
    #[default]
    NotLoaded,
    /// The RPC node reports no account at the base address
    Uninitialized,
    /// The account exists; items in on-chain order (possibly empty)
    Ready(Vec<GifItem>),
    /// The fetch failed for a reason other than a missing account
    FetchError(String),
}

impl AccountView {
    pub fn items(&self) -> Option<&[GifItem]> {
        match self {
            AccountView::Ready(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_uninitialized(&self) -> bool {
        matches!(self, AccountView::Uninitialized)
    }
}

/// Which view the page should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Disconnected,
    /// A connect request is in flight, or the first fetch has not resolved
    Connecting,
    ConnectedUninitialized,
    ConnectedReady,
    ConnectedFetchFailed,
}

impl SessionPhase {
    pub fn is_connected(&self) -> bool {
        matches!(
            self,
            SessionPhase::ConnectedUninitialized
                | SessionPhase::ConnectedReady
                | SessionPhase::ConnectedFetchFailed
        )
    }
}

/// Everything the page renders from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    /// Set once after a successful connect, never cleared
    pub wallet_address: Option<String>,
    /// Mirror of the link input field
    pub input_value: String,
    pub account: AccountView,
    /// True while a connect request is awaiting the wallet
    pub connecting: bool,
}

impl Session {
    pub fn phase(&self) -> SessionPhase {
        if self.wallet_address.is_none() {
            return if self.connecting {
                SessionPhase::Connecting
            } else {
                SessionPhase::Disconnected
            };
        }
        match self.account {
            AccountView::NotLoaded => SessionPhase::Connecting,
            AccountView::Uninitialized => SessionPhase::ConnectedUninitialized,
            AccountView::Ready(_) => SessionPhase::ConnectedReady,
            AccountView::FetchError(_) => SessionPhase::ConnectedFetchFailed,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet_address.is_some()
    }

    pub fn items(&self) -> &[GifItem] {
        self.account.items().unwrap_or(&[])
    }

    /// The one-time initialization is offered only for a missing account.
    pub fn can_initialize(&self) -> bool {
        self.phase() == SessionPhase::ConnectedUninitialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected(account: AccountView) -> Session {
        Session {
            wallet_address: Some("wallet".to_string()),
            account,
            ..Session::default()
        }
    }

    #[test]
    fn test_new_session_is_disconnected() {
        let session = Session::default();
        assert_eq!(session.phase(), SessionPhase::Disconnected);
        assert!(session.items().is_empty());
        assert!(!session.can_initialize());
    }

    #[test]
    fn test_connecting_without_address() {
        let session = Session {
            connecting: true,
            ..Session::default()
        };
        assert_eq!(session.phase(), SessionPhase::Connecting);
    }

    #[test]
    fn test_phase_follows_account_view() {
        assert_eq!(connected(AccountView::NotLoaded).phase(), SessionPhase::Connecting);
        assert_eq!(
            connected(AccountView::Uninitialized).phase(),
            SessionPhase::ConnectedUninitialized
        );
        assert_eq!(
            connected(AccountView::Ready(vec![])).phase(),
            SessionPhase::ConnectedReady
        );
        assert_eq!(
            connected(AccountView::FetchError("timeout".into())).phase(),
            SessionPhase::ConnectedFetchFailed
        );
    }

    #[test]
    fn test_only_uninitialized_can_initialize() {
        assert!(connected(AccountView::Uninitialized).can_initialize());
        assert!(!connected(AccountView::FetchError("x".into())).can_initialize());
        assert!(!connected(AccountView::Ready(vec![])).can_initialize());
    }
}
