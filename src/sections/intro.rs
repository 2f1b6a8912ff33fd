use leptos::prelude::*;

#[component]
pub fn Intro() -> impl IntoView {
    view! {
        <section class="intro">
            <div class="container">
                <h2 class="intro-title">"Paint by Numbers"</h2>
                <p class="intro-text">
                    "Upload any photo and we turn it into a numbered canvas with a "
                    "matching paint set. No drawing skills needed."
                </p>
            </div>
        </section>
    }
}
