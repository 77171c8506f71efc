//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Decentralized Storage with IPFS"</h1>
            <p class="subtitle">
                "Connect your Ethereum wallet, then pick a file to store it on IPFS. "
                "Every upload gets a content identifier you can share."
            </p>
        </div>
    }
}
