//! Decentralized Storage - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that connects an Ethereum wallet and uploads
//! files to IPFS, listing the resulting content identifiers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (wallet connection)                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (when wallet connected)                  │
//! │  └── UploadHistory (when uploads exist)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Static gateway settings
//! - [`types`] - User-facing notices
//! - [`state`] - Signal-backed state cells
//! - [`components`] - UI components (Header, Upload, History, etc.)
//! - [`services`] - Injected wallet provider and IPFS client

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use dstorage::{UploadCoordinator, UploadState, WalletSession, WalletState};

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{Notice, NoticeLevel};

// State
pub use state::{AppUploads, AppWallet, SignalCell};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Decentralized Storage - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Session state, owned by this page
    let wallet_state = create_rw_signal(WalletState::default());
    let upload_state = create_rw_signal(UploadState::default());

    // Provider and gateway are built once and handed to the components
    let config = gateway_config();
    let wallet: Rc<AppWallet> = Rc::new(WalletSession::new(
        EthereumProvider::detect(),
        SignalCell::new(wallet_state),
    ));
    let uploads: Rc<AppUploads> = Rc::new(UploadCoordinator::new(
        BrowserGateway::new(config.clone()),
        SignalCell::new(upload_state),
        config.max_upload_bytes,
    ));

    if let Err(e) = wallet.start() {
        log::error!("❌ Failed to watch wallet accounts: {}", e);
    }
    {
        let wallet = Rc::clone(&wallet);
        on_cleanup(move || wallet.teardown());
    }

    view! {
        <Header
            wallet=Rc::clone(&wallet)
            wallet_state=wallet_state
        />

        <div class="container">
            <Hero/>

            // Uploads need a connected wallet
            <Show
                when=move || wallet_state.with(|s| s.is_connected())
                fallback=|| view! {
                    <p class="connect-hint">"Connect your wallet to upload files to IPFS."</p>
                }
            >
                <p class="wallet-address">
                    "Connected Wallet: "
                    {move || wallet_state.with(|s| s.address.as_ref().map(|a| a.to_string()).unwrap_or_default())}
                </p>
                <UploadSection
                    uploads=Rc::clone(&uploads)
                    upload_state=upload_state
                    config=config.clone()
                />
                <UploadHistory
                    upload_state=upload_state
                    config=config.clone()
                />
            </Show>
        </div>

        <Footer/>
    }
}
