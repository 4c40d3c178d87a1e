use yew::prelude::*;

use crate::components::page_hero::PageHero;

const VALUES: [(&str, &str); 3] = [
    ("🔐 Wallet First", "Your wallet is your identity. No accounts, no paperwork."),
    ("🤖 AI Native", "Every platform is designed and tuned by AI from a single description."),
    ("🌍 Borderless", "Crypto payments let operators reach players anywhere."),
];

const MILESTONES: [(&str, &str); 3] = [
    ("2023", "GWIN.ai founded"),
    ("2024", "First AI-generated casino goes live"),
    ("2025", "1,000 sites launched across 5 chains"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <PageHero title_key="aboutTitle" subtitle_key="aboutSubtitle" />
            <section class="about-values">
                <h2>{"Our Values"}</h2>
                <div class="features-grid">
                    { for VALUES.iter().map(|(title, description)| html! {
                        <div class="feature-item">
                            <h3>{ *title }</h3>
                            <p>{ *description }</p>
                        </div>
                    }) }
                </div>
            </section>
            <section class="about-milestones">
                <h2>{"Milestones"}</h2>
                <ul>
                    { for MILESTONES.iter().map(|(year, event)| html! {
                        <li><strong>{ *year }</strong>{" "}{ *event }</li>
                    }) }
                </ul>
            </section>
        </div>
    }
}
