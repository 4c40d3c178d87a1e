use yew::prelude::*;

use crate::chat::SiteDraft;
use crate::components::chat_widget::ChatWidget;
use crate::components::page_hero::PageHero;

const FEATURES: [(&str, &str); 4] = [
    ("🤖 AI-Powered Design", "Our AI understands your vision and creates a professional gambling platform tailored to your needs."),
    ("⚡ Instant Deployment", "From concept to live site in under 5 minutes. No coding, no complex setup required."),
    ("📈 Revenue Optimization", "Built-in features to maximize your earnings from day one with proven conversion strategies."),
    ("🛡 Crypto-First Security", "Bank-grade security with crypto wallet integration. No KYC, no personal data required."),
];

#[function_component(Builder)]
pub fn builder() -> Html {
    let generated = use_state(|| None::<SiteDraft>);

    let on_site_generated = {
        let generated = generated.clone();
        Callback::from(move |draft: SiteDraft| generated.set(Some(draft)))
    };

    html! {
        <div class="builder-page">
            <PageHero title_key="builderTitle" subtitle_key="builderSubtitle" />

            <section class="builder-workspace">
                <ChatWidget {on_site_generated} />
                <div class="builder-preview">
                    {
                        if let Some(draft) = &*generated {
                            html! {
                                <div class="site-preview">
                                    <h3>{"Your Site Preview"}</h3>
                                    <p><strong>{"Type: "}</strong>{ draft.site_kind.as_str() }</p>
                                    <p><strong>{"Estimated revenue: "}</strong>{ format!("${}/month", draft.estimated_revenue) }</p>
                                    <ul>
                                        { for draft.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                                    </ul>
                                    <p class="site-preview-prompt">{ format!("\"{}\"", draft.user_input) }</p>
                                </div>
                            }
                        } else {
                            html! {
                                <div class="site-preview empty">
                                    <p>{"Describe your platform in the chat and a preview will appear here."}</p>
                                </div>
                            }
                        }
                    }
                </div>
            </section>

            <section class="features">
                <div class="features-grid">
                    { for FEATURES.iter().map(|(title, description)| html! {
                        <div class="feature-item">
                            <h3>{ *title }</h3>
                            <p>{ *description }</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
