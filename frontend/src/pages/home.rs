use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::context::use_language;
use crate::Route;

const STATS: [(&str, &str); 3] = [
    ("1,000+", "sitesLaunched"),
    ("20+", "cryptocurrenciesSupported"),
    ("5 min", "averageDeploymentTime"),
];

const FEATURES: [(&str, &str); 4] = [
    ("⚡ Instant Deployment", "From wallet connection to live site in under 5 minutes"),
    ("💰 Crypto Payments Only", "Accept ETH, BTC, USDC, and 20+ other cryptocurrencies"),
    ("🤖 AI Site Builder", "Describe your vision, AI builds your perfect gambling site"),
    ("🌐 Multi-Chain Support", "Ethereum, Polygon, BSC, Arbitrum - your choice"),
];

const STEPS: [(&str, &str); 3] = [
    ("🔗 Connect Wallet", "Link your crypto wallet address"),
    ("🎯 Describe Vision", "Tell AI what gambling site you want"),
    ("🚀 Launch Site", "Deploy live instantly"),
];

#[function_component(Home)]
pub fn home() -> Html {
    let language = use_language();

    html! {
        <div class="home-page">
            // Hero Section
            <section class="hero">
                <h1>{ language.t("heroTitle") }</h1>
                <p class="hero-subtitle">{ language.t("heroSubtitle") }</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Builder} classes="hero-cta">
                        { language.t("connectWalletStart") }
                    </Link<Route>>
                    <Link<Route> to={Route::Demo} classes="hero-secondary">
                        { language.t("watchDemo") }
                    </Link<Route>>
                </div>
                <div class="hero-stats">
                    { for STATS.iter().map(|(value, key)| html! {
                        <div class="hero-stat">
                            <strong>{ *value }</strong>
                            <span>{ language.t(key) }</span>
                        </div>
                    }) }
                </div>
            </section>

            // Features Section
            <section class="features">
                <h2>{"Revolutionary Crypto-First Features"}</h2>
                <p>{"Built for the future of gambling - wallet-first, AI-powered, crypto-native."}</p>
                <div class="features-grid">
                    { for FEATURES.iter().map(|(title, description)| html! {
                        <div class="feature-item">
                            <h3>{ *title }</h3>
                            <p>{ *description }</p>
                        </div>
                    }) }
                </div>
            </section>

            // Process Section
            <section class="how-it-works">
                <h2>{"3 Simple Steps to Your Gambling Empire"}</h2>
                <p>{"From wallet connection to live site in minutes. No complexity, just results."}</p>
                <div class="steps-grid">
                    { for STEPS.iter().enumerate().map(|(i, (title, description))| html! {
                        <div class="step">
                            <span class="step-number">{ i + 1 }</span>
                            <h3>{ *title }</h3>
                            <p>{ *description }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="footer-cta">
                <h2>{"Ready to Launch Your Empire?"}</h2>
                <p class="subtitle">{"Connect your wallet and let AI build your platform today."}</p>
                <Link<Route> to={Route::Builder} classes="hero-cta">
                    {"Start Building"}
                </Link<Route>>
            </section>
        </div>
    }
}
