//! FAQ accordion. Every item owns its open flag, so several can be open at
//! once and toggling one never touches its neighbours.

use leptos::prelude::*;

#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="faq-item">
            <button class="faq-question" on:click=move |_| set_open.update(|o| *o = !*o)>
                <span class="faq-question-text">{question}</span>
                <span class=move || {
                    if open.get() { "faq-chevron open" } else { "faq-chevron" }
                }>"⌄"</span>
            </button>
            <Show when=move || open.get()>
                <div class="faq-answer">
                    <p>{answer}</p>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="faq">
            <div class="container">
                <p class="section-eyebrow">"FAQs"</p>
                <h2 class="section-title">"Frequently asked questions"</h2>
                <div class="faq-list">
                    <FaqItem
                        question="What is painting by numbers?"
                        answer="A canvas divided into numbered regions, each number matching \
                                one paint pot. Fill every region with its color and the \
                                picture emerges."
                    />
                    <FaqItem
                        question="How to choose the right photo?"
                        answer="Pick a sharp, well-lit photo with a clear subject. Busy \
                                backgrounds and dim lighting make the regions small and \
                                fiddly to paint."
                    />
                    <FaqItem
                        question="Examples of good and bad photos"
                        answer="Good: a portrait against a plain wall, a pet in daylight. \
                                Bad: group shots from far away, night photos, heavy filters."
                    />
                    <FaqItem
                        question="What is in the kit?"
                        answer="The printed numbered canvas, a set of matched acrylic paints, \
                                three brushes and a reference sheet of your photo."
                    />
                    <FaqItem
                        question="What are the benefits of painting by numbers?"
                        answer="It is a low-pressure way to paint something you care about. \
                                Most people finish a canvas over a few relaxed evenings."
                    />
                </div>
            </div>
        </section>
    }
}
