use yew::prelude::*;

use crate::i18n::context::ThemeContext;
use crate::i18n::preferences::Theme;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let ctx = use_context::<ThemeContext>();
    let Some(ctx) = ctx else {
        return html! {};
    };
    let theme = ctx.theme;

    let onclick = Callback::from(move |_: MouseEvent| {
        ctx.toggle();
    });

    html! {
        <button type="button" class="theme-toggle" aria-label="Toggle theme" {onclick}>
            { if theme == Theme::Dark { "☀" } else { "🌙" } }
        </button>
    }
}
