//! Kit options panel: price, sizes, palette legend, process / purchase.

use leptos::prelude::*;

const KIT_SIZES: [&str; 2] = ["21 x 29 cm", "40 x 50 cm"];

/// Right-hand panel of the detail page. The process trigger is rendered only
/// while idle and unprocessed; while a request is in flight it is replaced by
/// a busy block, and after the first success by the purchase action.
#[component]
pub fn PaintingOptions(
    processing: bool,
    purchase_ready: bool,
    palette: Option<Vec<(String, [u8; 3])>>,
    process_error: Option<String>,
    #[prop(into)] on_process: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="options">
            <h1 class="options-title">"Paint by Numbers kit"</h1>
            <p class="options-price">"130 zł"</p>

            <div class="options-sizes">
                <h2 class="options-heading">"Size"</h2>
                <div class="options-size-row">
                    {KIT_SIZES
                        .into_iter()
                        .map(|size| view! {
                            <button class="options-size">{size}</button>
                        })
                        .collect_view()}
                </div>
            </div>

            {palette.map(|entries| view! {
                <div class="options-palette">
                    <h2 class="options-heading">"Color Palette"</h2>
                    <div class="palette-grid">
                        {entries
                            .into_iter()
                            .map(|(label, [r, g, b])| view! {
                                <div class="palette-entry">
                                    <span
                                        class="palette-swatch"
                                        style=format!("background-color: rgb({r},{g},{b})")
                                    ></span>
                                    <span class="palette-label">{label}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            })}

            {if processing {
                view! {
                    <div class="options-busy">
                        <span class="spinner"></span>
                    </div>
                }.into_any()
            } else if purchase_ready {
                view! {
                    <button class="btn btn-cart">"Add to cart"</button>
                }.into_any()
            } else {
                view! {
                    <button class="btn btn-process" on:click=move |_| on_process.run(())>
                        "Process"
                    </button>
                }.into_any()
            }}

            {process_error.map(|msg| view! {
                <p class="options-error">{msg}</p>
            })}
        </div>
    }
}
