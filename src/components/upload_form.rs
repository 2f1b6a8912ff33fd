//! Upload form: classic file input plus a drag-and-drop zone.
//!
//! A dropped or picked file gets a local object URL for instant preview; the
//! previous URL is revoked before a replacement is minted and the live one is
//! revoked on unmount, so object URLs never accumulate. Submitting without a
//! file is a local validation error and issues no request.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use web_sys::Url;

use crate::api;

/// Detail route for a server-issued filename, or `None` when the identifier
/// is empty. The route key is the filename truncated at the first `.`.
pub fn detail_route(unique_filename: &str) -> Option<String> {
    let id = unique_filename.split('.').next().unwrap_or("");
    if id.is_empty() {
        None
    } else {
        Some(format!("/painting/{id}"))
    }
}

#[component]
pub fn UploadForm() -> impl IntoView {
    let file = RwSignal::new_local(None::<web_sys::File>);
    let (preview_url, set_preview_url) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (is_loading, set_is_loading) = signal(false);
    let file_input = NodeRef::<leptos::html::Input>::new();
    let navigate = use_navigate();

    // Single path for both the input and the drop zone, so the object URL
    // lifecycle lives in one place.
    let assign_file = move |picked: Option<web_sys::File>| {
        if let Some(old) = preview_url.get_untracked() {
            let _ = Url::revoke_object_url(&old);
        }
        let next = picked
            .as_ref()
            .and_then(|f| Url::create_object_url_with_blob(f).ok());
        file.set(picked);
        set_preview_url.set(next);
        set_error.set(None);
    };

    on_cleanup(move || {
        if let Some(url) = preview_url.get_untracked() {
            let _ = Url::revoke_object_url(&url);
        }
    });

    let on_file_change = move |_| {
        let Some(input) = file_input.get() else { return };
        let picked = input.files().and_then(|list| list.get(0));
        // Reset so picking the same file again still fires a change event.
        input.set_value("");
        assign_file(picked);
    };

    let on_drag_over = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let dropped = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|list| list.get(0));
        if dropped.is_some() {
            assign_file(dropped);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let Some(selected) = file.get_untracked() else {
            set_error.set(Some("Please select a file".into()));
            return;
        };

        set_is_loading.set(true);
        set_error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::upload_image(&selected).await {
                Ok(resp) => match detail_route(&resp.unique_filename) {
                    Some(route) => {
                        log::debug!("upload stored at {}", resp.image_url);
                        navigate(&route, Default::default());
                    }
                    None => {
                        set_error
                            .set(Some("Upload successful, but no unique filename received".into()));
                        set_is_loading.set(false);
                    }
                },
                Err(err) => {
                    log::error!("upload failed: {err}");
                    let message = err
                        .detail()
                        .map(str::to_owned)
                        .unwrap_or_else(|| "Error uploading file".into());
                    set_error.set(Some(message));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <form class="upload-form" on:submit=on_submit>
            <div class="upload-drop" on:dragover=on_drag_over on:drop=on_drop>
                {move || match preview_url.get() {
                    Some(url) => view! {
                        <img class="upload-preview" src=url alt="Selected photo" />
                    }.into_any(),
                    None => view! {
                        <p class="upload-drop-text">
                            <strong>"Drop a photo here"</strong>
                            " or pick one below"
                        </p>
                    }.into_any(),
                }}
                <label class="upload-label" for="file-upload">"Upload Image"</label>
                <input
                    id="file-upload"
                    class="upload-input"
                    type="file"
                    accept="image/*"
                    node_ref=file_input
                    on:change=on_file_change
                />
            </div>

            <div class="upload-kind">
                <label class="upload-label" for="image-type">"Image Type"</label>
                <select id="image-type" class="upload-select">
                    <option value="portrait">"Portrait"</option>
                    <option value="animal">"Animal"</option>
                    <option value="landscape">"Landscape"</option>
                    <option value="abstract">"Abstract"</option>
                </select>
            </div>

            <button type="submit" class="btn btn-primary upload-submit" disabled=is_loading>
                {move || if is_loading.get() { "Uploading…" } else { "Upload →" }}
            </button>

            {move || error.get().map(|msg| view! {
                <p class="upload-error">{msg}</p>
            })}
        </form>
    }
}
