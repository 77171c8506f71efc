//! Session upload history.

use leptos::*;

use dstorage::{GatewayConfig, UploadState};

/// Every CID uploaded this session, oldest first.
#[component]
pub fn UploadHistory(
    upload_state: RwSignal<UploadState>,
    config: GatewayConfig,
) -> impl IntoView {
    let config = store_value(config);

    view! {
        <Show
            when=move || upload_state.with(|s| !s.history.is_empty())
            fallback=|| view! { }
        >
            <div class="upload-history">
                <h3>"Uploaded Files"</h3>
                <ul>
                    // History is append-only, so the index is a stable key.
                    <For
                        each=move || upload_state.with(|s| s.history.clone()).into_iter().enumerate()
                        key=|(i, _)| *i
                        children=move |(_, cid)| {
                            let url = config.with_value(|c| c.retrieval_url(&cid));
                            view! {
                                <li>
                                    <a href=url target="_blank" rel="noopener noreferrer">
                                        {cid.to_string()}
                                    </a>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </Show>
    }
}
