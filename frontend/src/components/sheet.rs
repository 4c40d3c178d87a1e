use log::warn;
use web_sys::window;
use yew::prelude::*;

use crate::disclosure::use_disclosure;

#[derive(Properties, PartialEq)]
pub struct SheetProps {
    pub trigger: Html,
    #[prop_or_default]
    pub class: Classes,
    /// Close after any click inside the panel, e.g. on a nav link.
    #[prop_or(true)]
    pub close_on_click: bool,
    pub children: Children,
}

fn overflow_value(locked: bool) -> &'static str {
    if locked {
        "hidden"
    } else {
        "unset"
    }
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let value = overflow_value(locked);
    if body.style().set_property("overflow", value).is_err() {
        warn!("Failed to set body overflow to {}", value);
    }
}

/// Panel sliding in from the right, over a backdrop. Locks page scroll
/// while open.
#[function_component(Sheet)]
pub fn sheet(props: &SheetProps) -> Html {
    let panel = use_node_ref();
    let disclosure = use_disclosure(panel.clone(), false, None);
    let open = disclosure.is_open();

    use_effect_with_deps(
        |open| {
            lock_body_scroll(*open);
            || lock_body_scroll(false)
        },
        open,
    );

    let toggle = {
        let disclosure = disclosure.clone();
        Callback::from(move |_: MouseEvent| disclosure.toggle())
    };

    let close = {
        let disclosure = disclosure.clone();
        Callback::from(move |_: MouseEvent| disclosure.close())
    };

    let panel_click = if props.close_on_click {
        close.clone()
    } else {
        Callback::noop()
    };

    html! {
        <>
            <button type="button" class="sheet-trigger" onclick={toggle}>
                { props.trigger.clone() }
            </button>
            if open {
                <>
                    <div class="sheet-backdrop" onclick={close}></div>
                    <div ref={panel} class={classes!("sheet", props.class.clone())}
                        onclick={panel_click}>
                        { for props.children.iter() }
                    </div>
                </>
            }
            <style>
                {r#"
                .sheet-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    background: rgba(0, 0, 0, 0.5);
                }
                .sheet {
                    position: fixed;
                    top: 0;
                    bottom: 0;
                    right: 0;
                    width: 75%;
                    max-width: 24rem;
                    z-index: 50;
                    padding: 24px;
                    background: var(--background, #0d0d0d);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_sheet_hides_body_overflow() {
        assert_eq!(overflow_value(true), "hidden");
        assert_eq!(overflow_value(false), "unset");
    }
}
