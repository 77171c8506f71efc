//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Files are public once uploaded • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="https://docs.ipfs.tech" class="footer-link" target="_blank" rel="noopener noreferrer">
                    "IPFS"
                </a>
                <a href="https://metamask.io" class="footer-link" target="_blank" rel="noopener noreferrer">
                    "MetaMask"
                </a>
            </div>
        </footer>
    }
}
