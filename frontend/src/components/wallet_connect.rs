use log::info;
use yew::prelude::*;

use crate::i18n::context::use_language;

/// Placeholder until a real wallet integration exists.
#[function_component(WalletConnect)]
pub fn wallet_connect() -> Html {
    let language = use_language();
    let onclick = Callback::from(|_: MouseEvent| {
        info!("Wallet connection clicked");
    });

    html! {
        <button type="button" class="wallet-connect" {onclick}>
            <span>{"👛"}</span>
            <span>{ language.t("connectWallet") }</span>
        </button>
    }
}
