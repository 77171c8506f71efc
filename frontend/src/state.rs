//! Reactive state cells.
//!
//! Backs the core session components with Leptos signals, so every state
//! transition (including the in-flight flag) re-renders immediately.

use leptos::*;

use dstorage::{StateCell, UploadCoordinator, UploadState, WalletSession, WalletState};

use crate::services::{BrowserGateway, EthereumProvider};

/// [`StateCell`] over an [`RwSignal`].
///
/// Writes to a disposed signal (component unmounted) are dropped and
/// reported as `false`.
pub struct SignalCell<T: 'static>(RwSignal<T>);

impl<T: 'static> SignalCell<T> {
    pub fn new(signal: RwSignal<T>) -> Self {
        Self(signal)
    }
}

impl<T: 'static> Clone for SignalCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalCell<T> {}

impl<T: Clone + Default + 'static> StateCell<T> for SignalCell<T> {
    fn get(&self) -> T {
        self.0.try_get_untracked().unwrap_or_default()
    }

    fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        self.0.try_update(f).is_some()
    }
}

/// Wallet session as wired in the browser.
pub type AppWallet = WalletSession<EthereumProvider, SignalCell<WalletState>>;

/// Upload coordinator as wired in the browser.
pub type AppUploads = UploadCoordinator<BrowserGateway, SignalCell<UploadState>>;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dstorage::{AccountsHandler, Subscription, WalletAddress, WalletProvider, WalletResult};
    use futures::executor::block_on;

    struct StaticProvider(Vec<String>);

    #[async_trait(?Send)]
    impl WalletProvider for StaticProvider {
        async fn request_accounts(&self) -> WalletResult<Vec<String>> {
            Ok(self.0.clone())
        }

        fn subscribe_accounts_changed(&self, _handler: AccountsHandler) -> WalletResult<Subscription> {
            Ok(Subscription::new(|| {}))
        }
    }

    #[test]
    fn test_signal_cell_updates_until_disposed() {
        let runtime = create_runtime();
        let signal = create_rw_signal(UploadState::default());
        let cell = SignalCell::new(signal);

        assert!(cell.update(|s| s.in_flight = true));
        assert!(signal.get_untracked().in_flight);

        signal.dispose();
        assert!(!cell.update(|s| s.in_flight = false));
        assert_eq!(cell.get(), UploadState::default());

        runtime.dispose();
    }

    #[test]
    fn test_wallet_session_drives_signal() {
        let runtime = create_runtime();
        let wallet_state = create_rw_signal(WalletState::default());
        let session = WalletSession::new(
            Some(StaticProvider(vec!["0xABC".to_string()])),
            SignalCell::new(wallet_state),
        );

        let address = block_on(session.connect()).unwrap();

        assert_eq!(address.as_str(), "0xABC");
        assert_eq!(wallet_state.get_untracked().address, WalletAddress::parse("0xABC"));

        session.on_accounts_changed(&[]);
        assert!(!wallet_state.get_untracked().is_connected());

        drop(session);
        runtime.dispose();
    }
}
