use yew::prelude::*;

use crate::disclosure::use_disclosure;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum Align {
    Start,
    #[default]
    End,
}

impl Align {
    fn class(self) -> &'static str {
        match self {
            Align::Start => "dropdown-align-start",
            Align::End => "dropdown-align-end",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownMenuProps {
    pub trigger: Html,
    #[prop_or_default]
    pub align: Align,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_open_change: Option<Callback<bool>>,
    pub children: Children,
}

/// A trigger button with a menu below it. Any click inside the menu closes
/// it, as do outside clicks and Escape. ArrowDown on the trigger opens it.
#[function_component(DropdownMenu)]
pub fn dropdown_menu(props: &DropdownMenuProps) -> Html {
    let root = use_node_ref();
    let disclosure = use_disclosure(root.clone(), false, props.on_open_change.clone());

    let toggle = {
        let disclosure = disclosure.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            disclosure.toggle();
        })
    };

    let close = {
        let disclosure = disclosure.clone();
        Callback::from(move |_: MouseEvent| disclosure.close())
    };

    let onkeydown = {
        let disclosure = disclosure.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "ArrowDown" {
                e.prevent_default();
                disclosure.open();
            }
        })
    };

    html! {
        <div ref={root} class={classes!("dropdown", props.class.clone())}>
            <button type="button" class="dropdown-trigger" onclick={toggle} {onkeydown}
                aria-expanded={disclosure.is_open().to_string()}>
                { props.trigger.clone() }
            </button>
            if disclosure.is_open() {
                <div class={classes!("dropdown-content", props.align.class())} onclick={close}>
                    { for props.children.iter() }
                </div>
            }
            <style>
                {r#"
                .dropdown {
                    position: relative;
                    display: inline-block;
                }
                .dropdown-content {
                    position: absolute;
                    top: 100%;
                    margin-top: 4px;
                    min-width: 8rem;
                    z-index: 50;
                    padding: 4px;
                    border-radius: 6px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: var(--popover, #1a1a1a);
                    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.3);
                }
                .dropdown-align-start { left: 0; }
                .dropdown-align-end { right: 0; }
                .dropdown-item {
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    width: 100%;
                    padding: 6px 8px;
                    border: none;
                    background: none;
                    color: inherit;
                    cursor: pointer;
                    border-radius: 4px;
                }
                .dropdown-item:hover, .dropdown-item.selected {
                    background: rgba(255, 255, 255, 0.08);
                }
                "#}
            </style>
        </div>
    }
}
