use yew::prelude::*;

use crate::i18n::context::use_language;

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub title_key: AttrValue,
    pub subtitle_key: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Translated heading block shared by the content pages.
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    let language = use_language();

    html! {
        <section class="page-hero">
            <h1>{ language.t(&props.title_key) }</h1>
            <p class="page-hero-subtitle">{ language.t(&props.subtitle_key) }</p>
            if !props.children.is_empty() {
                <div class="page-hero-actions">
                    { for props.children.iter() }
                </div>
            }
        </section>
    }
}
