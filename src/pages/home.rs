// Landing page - hero with upload, intro, FAQ
use leptos::prelude::*;

use crate::sections::{FaqSection, Footer, Hero, Intro, Nav};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <Intro />
            <FaqSection />
        </main>
        <Footer />
    }
}
