//! Wallet session manager.
//!
//! Tracks the account exposed by an injected wallet provider:
//!
//! ```text
//!                  connect() ok
//!  Disconnected ──────────────────▶ Connected ──┐ accountsChanged([a'])
//!       ▲                              │  ▲     │ (address updated in place)
//!       └──── accountsChanged([]) ─────┘  └─────┘
//! ```
//!
//! The provider is optional: `None` means probing the environment found no
//! wallet, and [`WalletSession::connect`] reports
//! [`WalletError::ProviderMissing`] without touching the network.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::error::{WalletError, WalletResult};
use crate::state::StateCell;
use crate::types::{WalletAddress, WalletState};

/// Callback invoked with the provider's new account list.
pub type AccountsHandler = Box<dyn Fn(Vec<String>)>;

/// An injected wallet provider (EIP-1193 style).
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Ask the user to expose their accounts (`eth_requestAccounts`).
    async fn request_accounts(&self) -> WalletResult<Vec<String>>;

    /// Register `handler` for `accountsChanged` notifications.
    ///
    /// The listener stays registered until the returned [`Subscription`]
    /// is dropped or cancelled.
    fn subscribe_accounts_changed(&self, handler: AccountsHandler) -> WalletResult<Subscription>;
}

/// Registered listener. Unregisters exactly once, on drop or [`cancel`].
///
/// [`cancel`]: Subscription::cancel
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Unregister now.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Holds the connected address and mirrors provider account changes.
pub struct WalletSession<P, C> {
    provider: Option<P>,
    state: C,
    subscription: RefCell<Option<Subscription>>,
    closed: Rc<Cell<bool>>,
}

impl<P, C> WalletSession<P, C>
where
    P: WalletProvider,
    C: StateCell<WalletState> + Clone + 'static,
{
    /// Create a session over an optional provider.
    pub fn new(provider: Option<P>, state: C) -> Self {
        Self {
            provider,
            state,
            subscription: RefCell::new(None),
            closed: Rc::new(Cell::new(false)),
        }
    }

    /// Whether a provider was found in the environment.
    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    /// Currently connected address.
    pub fn address(&self) -> Option<WalletAddress> {
        self.state.get().address
    }

    /// Register the account-change listener. Calling it again is a no-op.
    pub fn start(&self) -> WalletResult<()> {
        if self.closed.get() {
            return Err(WalletError::SessionClosed);
        }
        let Some(provider) = self.provider.as_ref() else {
            log::warn!("⚠️  No wallet provider found, account changes will not be tracked");
            return Ok(());
        };
        if self.subscription.borrow().is_some() {
            return Ok(());
        }

        let state = self.state.clone();
        let closed = Rc::clone(&self.closed);
        let subscription = provider.subscribe_accounts_changed(Box::new(move |accounts: Vec<String>| {
            if closed.get() {
                return;
            }
            apply_accounts(&state, &accounts);
        }))?;

        *self.subscription.borrow_mut() = Some(subscription);
        log::debug!("👂 Listening for wallet account changes");
        Ok(())
    }

    /// Request accounts from the provider and keep the first one.
    ///
    /// A rejection is logged and returned; the current address is kept.
    pub async fn connect(&self) -> WalletResult<WalletAddress> {
        let provider = self.provider.as_ref().ok_or(WalletError::ProviderMissing)?;
        if self.closed.get() {
            return Err(WalletError::SessionClosed);
        }

        log::info!("🔑 Requesting wallet accounts...");

        let accounts = match provider.request_accounts().await {
            Ok(accounts) => accounts,
            Err(e) => {
                log::error!("❌ Error connecting to wallet: {}", e);
                return Err(e);
            }
        };

        if self.closed.get() {
            log::debug!("Wallet session closed before accounts arrived, ignoring");
            return Err(WalletError::SessionClosed);
        }

        let address = accounts
            .first()
            .and_then(|account| WalletAddress::parse(account))
            .ok_or(WalletError::NoAccounts)?;

        let next = Some(address.clone());
        if self.state.get().address != next {
            self.state.update(|s| s.address = next);
        }

        log::info!("✅ Wallet connected: {}", address);
        Ok(address)
    }

    /// Apply an `accountsChanged` notification.
    pub fn on_accounts_changed(&self, accounts: &[String]) {
        if self.closed.get() {
            return;
        }
        apply_accounts(&self.state, accounts);
    }
}

impl<P, C> WalletSession<P, C> {
    /// Unregister the listener and stop applying late results.
    pub fn teardown(&self) {
        self.closed.set(true);
        if let Some(subscription) = self.subscription.borrow_mut().take() {
            subscription.cancel();
            log::debug!("Wallet account listener removed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

impl<P, C> Drop for WalletSession<P, C> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// First account wins; an empty list disconnects. Writes only on change.
fn apply_accounts<C: StateCell<WalletState>>(state: &C, accounts: &[String]) {
    let next = accounts.first().and_then(|account| WalletAddress::parse(account));
    if state.get().address == next {
        return;
    }

    match &next {
        Some(address) => log::info!("🔄 Wallet account changed: {}", address),
        None => log::info!("🔌 Wallet disconnected"),
    }
    state.update(|s| s.address = next);
}
