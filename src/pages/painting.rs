//! Painting detail page.
//!
//! Owns one [`DetailState`] signal and drives it: fetch on mount (and on
//! route-param change), process on demand. The preview and options panels are
//! handed plain snapshots plus callbacks, never the signal itself.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::{PaintingOptions, PaintingPreview};
use crate::state::{DetailState, Phase};

#[component]
pub fn PaintingPage() -> impl IntoView {
    let params = use_params_map();
    let state = RwSignal::new(DetailState::new());

    Effect::new(move |_| {
        let id = params.with(|p| p.get("unique_filename").unwrap_or_default());
        state.set(DetailState::new());
        spawn_local(async move {
            match api::fetch_painting(&id).await {
                Ok(painting) => state.update(|s| s.loaded(painting)),
                Err(err) => {
                    log::error!("failed to fetch painting {id}: {err}");
                    state.update(|s| s.load_failed(&err));
                }
            }
        });
    });

    let on_select = Callback::new(move |url: String| {
        state.update(|s| s.select_image(url));
    });

    let on_process = Callback::new(move |_: ()| {
        // The transition doubles as the re-entrancy guard: only the click
        // that actually moved us into Processing issues a request.
        let started = state
            .try_update(|s| s.process_started())
            .unwrap_or(false);
        if !started {
            return;
        }
        spawn_local(async move {
            let result = api::process_image().await;
            if let Err(err) = &result {
                log::error!("processing failed: {err}");
            }
            state.update(|s| s.process_finished(result));
        });
    });

    view! {
        <div class="detail-page container">
            {move || {
                let snapshot = state.get();
                match snapshot.phase() {
                    Phase::Loading => view! {
                        <div class="detail-status">"Loading..."</div>
                    }.into_any(),
                    Phase::Failed => {
                        let message = snapshot
                            .load_error()
                            .unwrap_or("No painting found")
                            .to_owned();
                        view! {
                            <div class="detail-status detail-error">{message}</div>
                        }.into_any()
                    }
                    Phase::Ready | Phase::Processing => {
                        let processing = snapshot.phase() == Phase::Processing;
                        view! {
                            <div class="detail-layout">
                                <div class="detail-main">
                                    <PaintingPreview
                                        displayed=snapshot.displayed().to_owned()
                                        thumbnails=snapshot.thumbnails()
                                        processing=processing
                                        on_select=on_select
                                    />
                                </div>
                                <div class="detail-side">
                                    <PaintingOptions
                                        processing=processing
                                        purchase_ready=snapshot.purchase_ready()
                                        palette=snapshot.palette()
                                        process_error=snapshot.process_error().map(str::to_owned)
                                        on_process=on_process
                                    />
                                </div>
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}
