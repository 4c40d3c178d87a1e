use yew::prelude::*;

use crate::catalog::models::platform_icon;
use crate::catalog::Game;
use crate::i18n::Language;

#[derive(Properties, PartialEq)]
pub struct GameCardProps {
    pub game: Game,
    pub language: Language,
    /// Fired with `true` while the card is hovered so the page can blur
    /// its background.
    #[prop_or_default]
    pub on_focus_change: Option<Callback<bool>>,
}

#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let flipped = use_state(|| false);
    let game = &props.game;

    let hover = |value: bool| {
        let flipped = flipped.clone();
        let on_focus_change = props.on_focus_change.clone();
        Callback::from(move |_: MouseEvent| {
            flipped.set(value);
            if let Some(cb) = &on_focus_change {
                cb.emit(value);
            }
        })
    };

    let name = game.display_name(props.language).to_string();

    html! {
        <div class="game-card" onmouseenter={hover(true)} onmouseleave={hover(false)}>
            <div class={classes!("game-card-inner", (*flipped).then(|| "flipped"))}>
                <div class="game-card-front">
                    <img src={game.image_path()} alt={name.clone()} loading="lazy" />
                    <div class="game-card-meta">
                        <span class="game-category">{ &game.category }</span>
                        <span class={classes!("game-status", game.is_live().then(|| "live"))}>
                            { &game.status }
                        </span>
                    </div>
                    <h3>{ &name }</h3>
                    <div class="game-card-footer">
                        <span class="game-rating">{ format!("⭐ {:.1}", game.rating) }</span>
                        <span class="game-platforms">
                            { for game.platform.iter().map(|p| html! {
                                <span title={p.clone()}>{ platform_icon(p) }</span>
                            }) }
                        </span>
                    </div>
                </div>
                <div class="game-card-back">
                    <h3>{ &name }</h3>
                    <p class="game-provider">{ &game.provider }</p>
                    <p class="game-description">{ game.display_description(props.language) }</p>
                    <ul class="game-features">
                        { for game.features.iter().take(3).map(|f| html! { <li>{ f }</li> }) }
                    </ul>
                    if !game.launch_url.is_empty() {
                        <a class="game-launch" href={game.launch_url.clone()} target="_blank" rel="noopener noreferrer">
                            {"Play ▶"}
                        </a>
                    }
                </div>
            </div>
        </div>
    }
}
