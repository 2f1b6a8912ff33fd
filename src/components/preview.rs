//! Large preview pane plus the selectable thumbnail strip.

use leptos::prelude::*;

use crate::state::Thumbnail;

/// Pure presentation over the parent's state: the displayed URL, the strip of
/// available variants, and a busy overlay while processing is in flight.
/// Clicking a thumbnail only reports the selection upward.
#[component]
pub fn PaintingPreview(
    displayed: String,
    thumbnails: Vec<Thumbnail>,
    processing: bool,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="preview">
            <div class="preview-stage">
                <img class="preview-image" src=displayed alt="Displayed painting" />
                <Show when=move || processing>
                    <div class="preview-busy">
                        <span class="spinner"></span>
                    </div>
                </Show>
            </div>
            <div class="preview-strip">
                {thumbnails
                    .into_iter()
                    .map(|thumb| {
                        let url = thumb.url.clone();
                        view! {
                            <img
                                class="preview-thumb"
                                src=thumb.url
                                alt=thumb.caption
                                on:click=move |_| on_select.run(url.clone())
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
