use leptos::*;
use std::rc::Rc;

use dstorage::WalletState;

use crate::state::AppWallet;
use crate::types::Notice;

#[component]
pub fn Header(
    wallet: Rc<AppWallet>,
    wallet_state: RwSignal<WalletState>,
) -> impl IntoView {
    let is_connected = move || wallet_state.with(|s| s.is_connected());

    // Handler pour connexion wallet
    let on_wallet_click = move |_| {
        if is_connected() {
            return;
        }
        log::info!("🔑 Attempting to connect wallet...");

        let wallet = Rc::clone(&wallet);
        spawn_local(async move {
            // Rejections are already logged by the session.
            if let Err(e) = wallet.connect().await {
                if let Some(notice) = Notice::from_wallet_error(&e) {
                    alert(&notice.message);
                }
            }
        });
    };

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"IPFS STORAGE"</a>
            </div>
            <div class="header-right">
                <button
                    class="wallet-status"
                    class:connected=is_connected
                    prop:disabled=is_connected
                    on:click=on_wallet_click
                >
                    <span class="wallet-dot" class:connected=is_connected></span>
                    <span id="walletText">
                        {move || wallet_state.with(|s| match &s.address {
                            Some(addr) => addr.short(),
                            None => "Connect Wallet".to_string(),
                        })}
                    </span>
                </button>
            </div>
        </header>
    }
}

/// Blocking browser alert, for conditions the user must fix outside the app.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
