use leptos::prelude::*;

use crate::components::UploadForm;

/// Full-height masthead: a before/after sample behind the headline, with the
/// upload form floated over the middle.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-diff">
                <div class="hero-diff-item">
                    <img src="assets/index_img.svg" alt="Sample photo" />
                </div>
                <div class="hero-diff-item hero-diff-after">
                    <img src="assets/index_img_c.svg" alt="Sample photo, clustered" />
                </div>
                <div class="hero-diff-resizer"></div>
            </div>

            <div class="hero-upload">
                <UploadForm />
            </div>

            <div class="hero-caption">
                <h1 class="hero-title">
                    "Find a photo." <br />
                    "Paint it by numbers."
                </h1>
            </div>
        </section>
    }
}
