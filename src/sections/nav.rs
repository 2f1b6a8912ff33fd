use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-title">"perpul."</span>
                </a>
                <div class="nav-links">
                    <a href="#" class="nav-link">"Blog"</a>
                    <a href="#faq" class="nav-link">"FAQ"</a>
                </div>
            </div>
        </nav>
    }
}
