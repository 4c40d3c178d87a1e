use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::pagination::page_window;
use crate::catalog::{self, CatalogSelection, CategoryFilter};
use crate::components::game_card::GameCard;
use crate::components::page_hero::PageHero;
use crate::config;
use crate::i18n::context::use_language;
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    let language = use_language();
    let selection = use_state(CatalogSelection::default);
    let blurred = use_state(|| false);

    let catalog = catalog::embedded();
    let page = catalog.page(&selection.filter, selection.page, config::GAMES_PER_PAGE);
    let total_pages = page.total_pages;
    let stats = catalog.stats();

    let select_category = {
        let selection = selection.clone();
        move |label: String| {
            let selection = selection.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*selection).clone();
                next.select_category(CategoryFilter::parse(&label));
                debug!("Catalog category {}", next.filter.label());
                selection.set(next);
            })
        }
    };

    let navigate = {
        let selection = selection.clone();
        move |step: fn(&mut CatalogSelection, usize)| {
            let selection = selection.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*selection).clone();
                step(&mut next, total_pages);
                selection.set(next);
            })
        }
    };
    let go_to = {
        let selection = selection.clone();
        move |target: usize| {
            let selection = selection.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*selection).clone();
                next.go_to(target, total_pages);
                selection.set(next);
            })
        }
    };

    let on_focus_change = {
        let blurred = blurred.clone();
        Callback::from(move |value: bool| blurred.set(value))
    };

    html! {
        <div class={classes!("services-page", (*blurred).then(|| "services-background-blur"))}>
            <PageHero title_key="servicesTitle" subtitle_key="servicesSubtitle">
                <Link<Route> to={Route::Builder} classes="hero-cta">{"Start Building"}</Link<Route>>
                <Link<Route> to={Route::Pricing} classes="hero-secondary">{"View Pricing"}</Link<Route>>
            </PageHero>

            <section class="game-hub">
                <h2>{ language.t("gamePlatformHub") }</h2>

                <div class="category-filter">
                    { for catalog.categories().into_iter().map(|label| {
                        let active = selection.filter.label() == label;
                        html! {
                            <button key={label} class={classes!("category-button", active.then(|| "active"))}
                                onclick={select_category(label.to_string())}>
                                { label }
                            </button>
                        }
                    }) }
                </div>

                <div class="games-grid">
                    { for page.items.iter().map(|game| html! {
                        <GameCard key={game.id.clone()} game={(*game).clone()} {language}
                            on_focus_change={on_focus_change.clone()} />
                    }) }
                </div>

                if total_pages > 1 {
                    <div class="pagination">
                        <button onclick={navigate(CatalogSelection::previous)} disabled={!page.has_previous()}>
                            {"‹ Previous"}
                        </button>
                        { for page_window(page.page, total_pages, config::PAGE_BUTTONS).into_iter().map(|n| html! {
                            <button key={n} class={classes!("page-button", (n == page.page).then(|| "active"))}
                                onclick={go_to(n)}>
                                { n }
                            </button>
                        }) }
                        <button onclick={navigate(CatalogSelection::next)} disabled={!page.has_next()}>
                            {"Next ›"}
                        </button>
                    </div>
                }

                <p class="showing">
                    {
                        match page.showing() {
                            Some((first, last)) => format!("Showing {}-{} of {} games", first, last, page.total_items),
                            None => "No games found".to_string(),
                        }
                    }
                    if let CategoryFilter::Only(category) = &selection.filter {
                        { format!(" in {}", category) }
                    }
                </p>

                <div class="catalog-stats">
                    <div class="stat">
                        <h3>{ stats.total_games }</h3>
                        <p>{ language.t("totalGames") }</p>
                    </div>
                    <div class="stat">
                        <h3>{ stats.categories }</h3>
                        <p>{ language.t("categories") }</p>
                    </div>
                    <div class="stat">
                        <h3>{ format!("{:.1}", stats.average_rating) }</h3>
                        <p>{ language.t("averageRating") }</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
