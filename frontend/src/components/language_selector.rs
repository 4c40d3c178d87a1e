use log::info;
use yew::prelude::*;

use crate::components::dropdown_menu::{Align, DropdownMenu};
use crate::i18n::context::LanguageContext;
use crate::i18n::{preferences, Language};

#[derive(Properties, PartialEq)]
pub struct LanguageSelectorProps {
    /// Show the language name next to the flag instead of the flag alone.
    #[prop_or_default]
    pub show_label: bool,
}

#[function_component(LanguageSelector)]
pub fn language_selector(props: &LanguageSelectorProps) -> Html {
    let ctx = use_context::<LanguageContext>();
    let Some(ctx) = ctx else {
        return html! {};
    };
    let current = ctx.language;

    let trigger = html! {
        <>
            <span class="globe">{"🌐"}</span>
            if props.show_label {
                <span class="language-name">{ current.name() }</span>
            } else {
                <span>{ current.flag() }</span>
            }
        </>
    };

    let align = if props.show_label { Align::Start } else { Align::End };

    html! {
        <DropdownMenu {trigger} {align} class="language-selector">
            { for Language::ALL.into_iter().map(|language| {
                let set_language = ctx.set_language.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    info!("Switching language to {}", language.code());
                    preferences::store_language(language);
                    set_language.emit(language);
                });
                let selected = language == current;
                html! {
                    <button type="button" key={language.code()} {onclick}
                        class={classes!("dropdown-item", selected.then(|| "selected"))}>
                        <span>{ language.flag() }</span>
                        <span>{ language.name() }</span>
                        if selected {
                            <span class="check">{"✓"}</span>
                        }
                    </button>
                }
            }) }
        </DropdownMenu>
    }
}
