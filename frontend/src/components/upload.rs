//! File upload component.
//!
//! Reads the picked file, hands it to the upload coordinator and shows the
//! reading and in-flight indicators, the latest CID and any notice.

use leptos::*;
use std::rc::Rc;
use web_sys::{Event, HtmlInputElement};

use dstorage::{GatewayConfig, UploadState};

use crate::services::read_file;
use crate::state::AppUploads;
use crate::types::Notice;

#[component]
pub fn UploadSection(
    uploads: Rc<AppUploads>,
    upload_state: RwSignal<UploadState>,
    config: GatewayConfig,
) -> impl IntoView {
    let (notice, set_notice) = create_signal(None::<Notice>);
    let config = store_value(config);

    // Handler pour le changement de fichier
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        // Clear so picking the same file again fires another change.
        input.set_value("");
        set_notice.set(None);

        let uploads = Rc::clone(&uploads);
        let max_bytes = config.with_value(|c| c.max_upload_bytes);
        spawn_local(async move {
            let selection = match file {
                Some(file) => {
                    set_notice.set(Some(Notice::reading(&file.name())));
                    match read_file(file, max_bytes).await {
                        Ok(upload) => {
                            set_notice.set(None);
                            Some(upload)
                        }
                        Err(e) => {
                            log::error!("❌ {}", e);
                            set_notice.set(Some(Notice::from_upload_error(&e)));
                            return;
                        }
                    }
                }
                None => None,
            };

            match uploads.select_and_upload(selection).await {
                Ok(cid) => set_notice.set(Some(Notice::success(format!("File uploaded! IPFS Hash: {}", cid)))),
                Err(e) => set_notice.set(Some(Notice::from_upload_error(&e))),
            }
        });
    };

    view! {
        <div class="upload-section" id="uploadZone">
            <h3>"Upload File to IPFS"</h3>

            <input
                type="file"
                id="fileInput"
                on:change=on_file_change
            />

            <Show
                when=move || upload_state.with(|s| s.in_flight)
                fallback=|| view! { }
            >
                <p class="upload-text">"⏳ Uploading file, please wait..."</p>
            </Show>

            {move || notice.get().map(|n| view! {
                <div class=n.level.css_class()>
                    {n.level.emoji()} " " {n.message}
                </div>
            })}

            {move || upload_state.with(|s| s.latest.clone()).map(|cid| {
                let url = config.with_value(|c| c.retrieval_url(&cid));
                view! {
                    <p class="latest-upload">
                        "Latest uploaded file! IPFS Hash: "
                        <a href=url target="_blank" rel="noopener noreferrer">{cid.to_string()}</a>
                    </p>
                }
            })}
        </div>
    }
}
