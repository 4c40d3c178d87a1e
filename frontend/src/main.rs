use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use yew_hooks::use_window_scroll;

mod config;
mod catalog;
mod chat;
mod disclosure;
mod i18n;
mod components {
    pub mod chat_widget;
    pub mod dropdown_menu;
    pub mod game_card;
    pub mod language_selector;
    pub mod page_hero;
    pub mod sheet;
    pub mod theme_toggle;
    pub mod wallet_connect;
}
mod pages {
    pub mod about;
    pub mod builder;
    pub mod contact;
    pub mod demo;
    pub mod home;
    pub mod not_found;
    pub mod pricing;
    pub mod services;
}

use components::{
    language_selector::LanguageSelector,
    sheet::Sheet,
    theme_toggle::ThemeToggle,
    wallet_connect::WalletConnect,
};
use i18n::context::{use_language, LanguageContext, ThemeContext};
use i18n::preferences::{self, Theme};
use pages::{
    about::About,
    builder::Builder,
    contact::Contact,
    demo::Demo,
    home::Home,
    not_found::NotFound,
    pricing::Pricing,
    services::Services,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/builder")]
    Builder,
    #[at("/services")]
    Services,
    #[at("/demo")]
    Demo,
    #[at("/pricing")]
    Pricing,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

const NAV_ITEMS: [(Route, &str); 7] = [
    (Route::Home, "home"),
    (Route::Builder, "builder"),
    (Route::Services, "services"),
    (Route::Demo, "demo"),
    (Route::Pricing, "pricing"),
    (Route::About, "about"),
    (Route::Contact, "contact"),
];


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Builder => {
            info!("Rendering Builder page");
            html! { <Builder /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Demo => {
            info!("Rendering Demo page");
            html! { <Demo /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let language = use_language();
    let current = use_route::<Route>();
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 16.0;

    let links = |class: &'static str| -> Html {
        NAV_ITEMS.iter().map(|(route, key)| {
            let active = current.as_ref() == Some(route);
            html! {
                <Link<Route> to={route.clone()} classes={classes!(class, active.then(|| "active"))}>
                    { language.t(key) }
                </Link<Route>>
            }
        }).collect::<Html>()
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"⚡ "}{ config::SITE_NAME }
                </Link<Route>>

                <div class="nav-links">
                    { links("nav-link") }
                </div>

                <div class="nav-right">
                    <LanguageSelector />
                    <ThemeToggle />
                    <WalletConnect />
                </div>

                <div class="nav-mobile">
                    <Sheet trigger={html! { <span class="burger-menu">{"☰"}</span> }}>
                        <div class="mobile-menu">
                            { links("mobile-nav-link") }
                            <div class="mobile-menu-controls" onclick={stop}>
                                <LanguageSelector show_label=true />
                                <ThemeToggle />
                            </div>
                            <WalletConnect />
                        </div>
                    </Sheet>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    let language = use_state(preferences::load_language);

    let context = LanguageContext {
        language: *language,
        set_language: {
            let language = language.clone();
            Callback::from(move |next| language.set(next))
        },
    };

    let theme = use_state(preferences::load_theme);

    use_effect_with_deps(
        |theme| {
            preferences::apply_theme(*theme);
            || ()
        },
        *theme,
    );

    let theme_context = ThemeContext {
        theme: *theme,
        set_theme: {
            let theme = theme.clone();
            Callback::from(move |next: Theme| {
                info!("Switching theme to {}", next.as_str());
                preferences::store_theme(next);
                theme.set(next);
            })
        },
    };

    html! {
        <ContextProvider<LanguageContext> {context}>
            <ContextProvider<ThemeContext> context={theme_context}>
                <BrowserRouter>
                    <Nav />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                </BrowserRouter>
            </ContextProvider<ThemeContext>>
        </ContextProvider<LanguageContext>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::get_log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
