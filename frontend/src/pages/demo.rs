use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page_hero::PageHero;
use crate::Route;

const STEPS: [(&str, &str, &str); 4] = [
    ("⚡", "Connect Your Wallet", "Connect your crypto wallet in seconds. No KYC, no personal information required."),
    ("▶", "Describe Your Vision", "Tell our AI what kind of gambling platform you want. Be as specific or general as you like."),
    ("📈", "AI Builds Your Site", "Watch as our AI creates your professional gambling platform in real-time."),
    ("⭐", "Deploy & Earn", "Your site is live and ready to accept players. Start earning immediately!"),
];

const FEATURES: [(&str, &str); 6] = [
    ("⚡ 5-Minute Setup", "From wallet connection to live site in under 5 minutes"),
    ("🤖 AI-Powered", "Advanced AI that understands your vision and builds accordingly"),
    ("💰 Crypto Payments", "Accept ETH, BTC, USDC, and 20+ other cryptocurrencies"),
    ("🌐 Multi-Chain", "Support for Ethereum, Polygon, BSC, Arbitrum, and more"),
    ("📱 Mobile Ready", "Responsive design that works perfectly on all devices"),
    ("🔒 Secure", "Bank-grade security with crypto wallet integration"),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("Crypto Casino King", "Built my casino in 3 minutes. Already making $5K/month!", "$5,000/month"),
    ("Sports Bet Pro", "The AI understood exactly what I wanted. Perfect sports betting site!", "$8,500/month"),
    ("Poker Master", "Best investment I ever made. ROI in the first week!", "$12,000/month"),
];

#[function_component(Demo)]
pub fn demo() -> Html {
    let active_step = use_state(|| 0usize);

    html! {
        <div class="demo-page">
            <PageHero title_key="demoTitle" subtitle_key="demoSubtitle">
                <Link<Route> to={Route::Builder} classes="hero-cta">{"Try It Yourself →"}</Link<Route>>
            </PageHero>

            <section class="how-it-works">
                <h2>{"How It Works"}</h2>
                <p>{"See how easy it is to build your gambling empire"}</p>
                <div class="steps-grid">
                    { for STEPS.iter().enumerate().map(|(i, (icon, title, description))| {
                        let onclick = {
                            let active_step = active_step.clone();
                            Callback::from(move |_: MouseEvent| active_step.set(i))
                        };
                        let active = *active_step == i;
                        html! {
                            <div class={classes!("step", active.then(|| "active"))} {onclick}>
                                <span class="step-icon">{ *icon }</span>
                                <h3>{ format!("{}. {}", i + 1, title) }</h3>
                                <p>{ *description }</p>
                                if active {
                                    <div class="step-preview">{"▶"}</div>
                                }
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section class="features">
                <h2>{"Why Choose GWIN.ai?"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|(title, description)| html! {
                        <div class="feature-item">
                            <h3>{ *title }</h3>
                            <p>{ *description }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="testimonials">
                <h2>{"Success Stories"}</h2>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().map(|(name, quote, revenue)| html! {
                        <div class="testimonial">
                            <p>{ format!("\"{}\"", quote) }</p>
                            <strong>{ *name }</strong>
                            <span class="testimonial-revenue">{ *revenue }</span>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
