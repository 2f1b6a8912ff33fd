use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">"perpul."</span>
                </div>
                <div class="footer-links">
                    <a href="#" class="footer-link">"Blog"</a>
                    <a href="#faq" class="footer-link">"FAQ"</a>
                </div>
                <p class="footer-copyright">"perpul (c)2026"</p>
            </div>
        </footer>
    }
}
