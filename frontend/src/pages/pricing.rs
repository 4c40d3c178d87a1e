use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page_hero::PageHero;
use crate::Route;

const PLANS: [(&str, &str, &[&str]); 3] = [
    ("Starter", "0.1 ETH", &["1 gambling site", "Crypto payments", "Community support"]),
    ("Pro", "0.5 ETH", &["5 gambling sites", "Custom domains", "Priority support"]),
    ("Enterprise", "Custom", &["Unlimited sites", "Custom development", "Dedicated manager"]),
];

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <div class="pricing-page">
            <PageHero title_key="pricingTitle" subtitle_key="pricingSubtitle" />
            <section class="pricing-plans">
                { for PLANS.iter().map(|(name, price, features)| html! {
                    <div class="pricing-card">
                        <h3>{ *name }</h3>
                        <p class="price">{ *price }</p>
                        <ul>
                            { for features.iter().map(|f| html! { <li>{ *f }</li> }) }
                        </ul>
                        <Link<Route> to={Route::Contact} classes="hero-cta">{"Get Started"}</Link<Route>>
                    </div>
                }) }
            </section>
        </div>
    }
}
