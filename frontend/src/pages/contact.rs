use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::page_hero::PageHero;

const CHANNELS: [(&str, &str, &str); 4] = [
    ("Email", "hello@gwin.ai", "mailto:hello@gwin.ai"),
    ("Discord", "discord.gg/gwin-ai", "https://discord.gg/gwin-ai"),
    ("Twitter", "@gwin_ai", "https://twitter.com/gwin_ai"),
    ("GitHub", "github.com/gwin-ai", "https://github.com/gwin-ai"),
];

#[derive(Clone, Default, PartialEq)]
struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let sent = use_state(|| false);

    let field = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Nowhere to send it yet; log and reset.
            info!("Contact form submitted by {} <{}>", form.name, form.email);
            form.set(ContactForm::default());
            sent.set(true);
        })
    };

    html! {
        <div class="contact-page">
            <PageHero title_key="contactTitle" subtitle_key="contactSubtitle" />
            <section class="contact-content">
                <form class="contact-form" {onsubmit}>
                    <h2>{"Send us a message"}</h2>
                    if *sent {
                        <p class="contact-sent">{"Thanks! We'll get back to you within 24 hours."}</p>
                    }
                    <input name="name" placeholder="Name" value={form.name.clone()}
                        oninput={field(|f, v| f.name = v)} />
                    <input name="email" type="email" placeholder="Email" value={form.email.clone()}
                        oninput={field(|f, v| f.email = v)} />
                    <input name="subject" placeholder="Subject" value={form.subject.clone()}
                        oninput={field(|f, v| f.subject = v)} />
                    <textarea name="message" placeholder="Message" value={form.message.clone()}
                        oninput={field(|f, v| f.message = v)} />
                    <button type="submit">{"Send Message"}</button>
                </form>
                <div class="contact-channels">
                    { for CHANNELS.iter().map(|(title, label, href)| html! {
                        <a class="contact-channel" href={*href}>
                            <h3>{ *title }</h3>
                            <span>{ *label }</span>
                        </a>
                    }) }
                </div>
            </section>
        </div>
    }
}
