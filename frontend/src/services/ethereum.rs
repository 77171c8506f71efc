//! Wrapper around the injected Ethereum provider (MetaMask and compatible).

use async_trait::async_trait;
use dstorage::{AccountsHandler, Subscription, WalletError, WalletProvider, WalletResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Provider event fired when the user switches or disconnects accounts.
const ACCOUNTS_CHANGED: &str = "accountsChanged";

/// Handle on `window.ethereum`.
#[derive(Clone)]
pub struct EthereumProvider {
    ethereum: JsValue,
}

impl EthereumProvider {
    /// Probe the page for an injected provider.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ethereum = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;

        if ethereum.is_null() || ethereum.is_undefined() {
            log::warn!("⚠️  No Ethereum provider found");
            return None;
        }

        log::info!("✅ Ethereum provider detected");
        Some(Self { ethereum })
    }

    fn method(&self, name: &str) -> Result<js_sys::Function, String> {
        js_sys::Reflect::get(&self.ethereum, &JsValue::from_str(name))
            .map_err(|e| format!("Method {} not found: {}", name, js_error_message(&e)))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| format!("Method {} is not a function", name))
    }
}

#[async_trait(?Send)]
impl WalletProvider for EthereumProvider {
    async fn request_accounts(&self) -> WalletResult<Vec<String>> {
        let request = self.method("request").map_err(WalletError::Rejected)?;

        let args = js_sys::Object::new();
        js_sys::Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str("eth_requestAccounts"))
            .map_err(|e| WalletError::Rejected(js_error_message(&e)))?;

        let result = request
            .call1(&self.ethereum, &args)
            .map_err(|e| WalletError::Rejected(js_error_message(&e)))?;

        let accounts = JsFuture::from(js_sys::Promise::resolve(&result))
            .await
            .map_err(|e| WalletError::Rejected(js_error_message(&e)))?;

        serde_wasm_bindgen::from_value(accounts)
            .map_err(|e| WalletError::Rejected(format!("Invalid accounts response: {}", e)))
    }

    fn subscribe_accounts_changed(&self, handler: AccountsHandler) -> WalletResult<Subscription> {
        let on = self.method("on").map_err(WalletError::Subscription)?;

        let callback = Closure::wrap(Box::new(move |accounts: JsValue| {
            handler(serde_wasm_bindgen::from_value(accounts).unwrap_or_default());
        }) as Box<dyn FnMut(JsValue)>);

        on.call2(
            &self.ethereum,
            &JsValue::from_str(ACCOUNTS_CHANGED),
            callback.as_ref().unchecked_ref(),
        )
        .map_err(|e| WalletError::Subscription(js_error_message(&e)))?;

        let ethereum = self.ethereum.clone();
        Ok(Subscription::new(move || {
            let remove = js_sys::Reflect::get(&ethereum, &JsValue::from_str("removeListener"))
                .ok()
                .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

            let removed = match remove {
                Some(remove) => remove
                    .call2(
                        &ethereum,
                        &JsValue::from_str(ACCOUNTS_CHANGED),
                        callback.as_ref().unchecked_ref(),
                    )
                    .map_err(|e| log::warn!("Failed to remove {} listener: {}", ACCOUNTS_CHANGED, js_error_message(&e)))
                    .is_ok(),
                None => {
                    log::warn!("Provider has no removeListener, keeping {} listener", ACCOUNTS_CHANGED);
                    false
                }
            };

            // Still registered on the JS side: keep the closure alive.
            if !removed {
                callback.forget();
            }
        }))
    }
}

/// Best-effort message from a rejected promise or thrown value.
fn js_error_message(e: &JsValue) -> String {
    js_sys::Reflect::get(e, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| e.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}
