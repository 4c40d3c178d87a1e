use chrono::{Local, Utc};
use gloo_timers::future::TimeoutFuture;
use log::{error, info, warn};
use std::time::Duration;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::chat::{ChatError, ChatMessage, ChatPhase, ChatSession, Role, SiteDraft};
use crate::config;

const QUICK_PROMPTS: [(&str, &str); 3] = [
    ("🎰 Casino", "Crypto casino with slots and poker"),
    ("🏈 Sports Betting", "Sports betting platform"),
    ("🃏 Poker Room", "Poker room with tournaments"),
];

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    #[prop_or_default]
    pub class: Classes,
    /// Sent on the user's behalf shortly after the widget mounts.
    #[prop_or_default]
    pub initial_message: Option<String>,
    #[prop_or_default]
    pub on_site_generated: Option<Callback<SiteDraft>>,
}

pub enum ChatWidgetMsg {
    SetInput(String),
    Send(Option<String>),
    DoneTyping,
    DoneGenerating,
}

pub struct ChatWidget {
    session: ChatSession,
    input: String,
    end_ref: NodeRef,
    scroll: ScrollAnchor,
}

/// Remembers how many messages were on screen at the last scroll so that
/// only new messages, not keystrokes, move the log.
#[derive(Default)]
struct ScrollAnchor {
    seen: usize,
}

impl ScrollAnchor {
    fn advance(&mut self, count: usize) -> bool {
        let changed = count != self.seen;
        self.seen = count;
        changed
    }
}

fn wait(delay: Duration) -> TimeoutFuture {
    TimeoutFuture::new(u32::try_from(delay.as_millis()).unwrap_or(u32::MAX))
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ChatWidgetProps;

    fn create(ctx: &Context<Self>) -> Self {
        if let Some(message) = ctx.props().initial_message.clone() {
            ctx.link().send_future(async move {
                TimeoutFuture::new(config::INITIAL_MESSAGE_DELAY_MS).await;
                ChatWidgetMsg::Send(Some(message))
            });
        }

        Self {
            session: ChatSession::new(Utc::now()),
            input: String::new(),
            end_ref: NodeRef::default(),
            scroll: ScrollAnchor::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::SetInput(value) => {
                self.input = value;
                true
            }
            ChatWidgetMsg::Send(text) => {
                let from_input = text.is_none();
                let text = text.unwrap_or_else(|| self.input.clone());
                match self.session.submit(&text, Utc::now(), &mut rand::thread_rng()) {
                    Ok(delay) => {
                        info!("Simulating reply to {:?}", text);
                        if from_input {
                            self.input.clear();
                        }
                        ctx.link().send_future(async move {
                            wait(delay).await;
                            ChatWidgetMsg::DoneTyping
                        });
                        true
                    }
                    Err(ChatError::Empty) => false,
                    Err(e) => {
                        warn!("Ignoring chat input: {}", e);
                        false
                    }
                }
            }
            ChatWidgetMsg::DoneTyping => {
                match self.session.start_generating() {
                    Ok(delay) => {
                        ctx.link().send_future(async move {
                            wait(delay).await;
                            ChatWidgetMsg::DoneGenerating
                        });
                    }
                    Err(e) => {
                        error!("Chat reply failed: {}", e);
                        self.session.fail(Utc::now());
                    }
                }
                true
            }
            ChatWidgetMsg::DoneGenerating => {
                match self.session.complete(Utc::now(), &mut rand::thread_rng()) {
                    Ok(draft) => {
                        if let Some(cb) = &ctx.props().on_site_generated {
                            cb.emit(draft);
                        }
                    }
                    Err(e) => {
                        error!("Chat reply failed: {}", e);
                        self.session.fail(Utc::now());
                    }
                }
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if !self.scroll.advance(self.session.messages().len()) {
            return;
        }
        if let Some(end) = self.end_ref.cast::<web_sys::Element>() {
            end.scroll_into_view();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let busy = self.session.is_busy();
        let phase = self.session.phase();

        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatWidgetMsg::SetInput(input.value())
        });
        let onkeypress = ctx.link().batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter" && !e.shift_key()).then(|| {
                e.prevent_default();
                ChatWidgetMsg::Send(None)
            })
        });
        let send = ctx.link().callback(|_: MouseEvent| ChatWidgetMsg::Send(None));

        html! {
            <div class={classes!("chat-widget", ctx.props().class.clone())}>
                <div class="chat-header">
                    <span class="chat-bot-icon">{"🤖"}</span>
                    <span>{"AI Site Builder"}</span>
                    if phase == ChatPhase::Generating {
                        <span class="chat-building">{"⚡ Building..."}</span>
                    }
                </div>

                <div class="chat-messages">
                    { for self.session.messages().iter().map(render_message) }
                    if phase == ChatPhase::Typing {
                        <div class="chat-row assistant">
                            <span class="chat-avatar">{"🤖"}</span>
                            <div class="chat-bubble typing-dots">
                                <span></span><span></span><span></span>
                            </div>
                        </div>
                    }
                    <div ref={self.end_ref.clone()}></div>
                </div>

                <div class="chat-input">
                    <div class="chat-input-row">
                        <input
                            type="text"
                            placeholder="Tell me what gambling site you want..."
                            value={self.input.clone()}
                            disabled={busy}
                            {oninput}
                            {onkeypress}
                        />
                        <button onclick={send} disabled={busy || self.input.trim().is_empty()}>
                            {"➤"}
                        </button>
                    </div>
                    <div class="chat-quick-prompts">
                        { for QUICK_PROMPTS.iter().map(|(label, prompt)| {
                            let prompt = prompt.to_string();
                            html! {
                                <button
                                    class="chat-quick-prompt"
                                    disabled={busy}
                                    onclick={ctx.link().callback(move |_: MouseEvent| ChatWidgetMsg::Send(Some(prompt.clone())))}
                                >
                                    { *label }
                                </button>
                            }
                        }) }
                    </div>
                </div>

                <style>
                    {r#"
                    .chat-widget {
                        display: flex;
                        flex-direction: column;
                        height: 600px;
                        max-height: 80vh;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 12px;
                        overflow: hidden;
                    }
                    .chat-header {
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        padding: 16px;
                        font-weight: 600;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .chat-building {
                        margin-left: 8px;
                        font-size: 0.85rem;
                        animation: pulse 1s infinite;
                    }
                    .chat-messages {
                        flex: 1;
                        overflow-y: auto;
                        padding: 16px;
                        display: flex;
                        flex-direction: column;
                        gap: 16px;
                    }
                    .chat-row { display: flex; gap: 12px; }
                    .chat-row.user { justify-content: flex-end; }
                    .chat-bubble {
                        max-width: 80%;
                        padding: 12px 16px;
                        border-radius: 8px;
                        white-space: pre-line;
                        font-size: 0.9rem;
                        background: rgba(255, 255, 255, 0.06);
                    }
                    .chat-row.user .chat-bubble { background: #7c3aed; color: #fff; }
                    .chat-time { font-size: 0.75rem; opacity: 0.7; margin-top: 8px; }
                    .chat-row.user .chat-time { text-align: right; }
                    .typing-dots span {
                        display: inline-block;
                        width: 8px;
                        height: 8px;
                        margin-right: 4px;
                        border-radius: 50%;
                        background: #7c3aed;
                        animation: bounce 1s infinite;
                    }
                    .typing-dots span:nth-child(2) { animation-delay: 0.1s; }
                    .typing-dots span:nth-child(3) { animation-delay: 0.2s; }
                    .chat-input { border-top: 1px solid rgba(255, 255, 255, 0.1); padding: 16px; }
                    .chat-input-row { display: flex; gap: 8px; }
                    .chat-input-row input { flex: 1; }
                    .chat-quick-prompts { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 12px; }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-4px); }
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.4; }
                    }
                    "#}
                </style>
            </div>
        }
    }
}

fn render_message(message: &ChatMessage) -> Html {
    let (row_class, avatar) = match message.role {
        Role::User => ("user", "👤"),
        Role::Assistant => ("assistant", "🤖"),
    };
    let time = message
        .timestamp
        .with_timezone(&Local)
        .format("%H:%M:%S")
        .to_string();

    html! {
        <div key={message.id.clone()} class={classes!("chat-row", row_class)}>
            if message.role == Role::Assistant {
                <span class="chat-avatar">{ avatar }</span>
            }
            <div class="chat-bubble">
                <div>{ &message.content }</div>
                <div class="chat-time">{ time }</div>
            </div>
            if message.role == Role::User {
                <span class="chat-avatar">{ avatar }</span>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolls_only_when_the_message_count_changes() {
        let mut anchor = ScrollAnchor::default();
        // Welcome message on first render.
        assert!(anchor.advance(1));
        // Typing into the input re-renders with the same log.
        assert!(!anchor.advance(1));
        assert!(!anchor.advance(1));
        assert!(anchor.advance(2));
        assert!(!anchor.advance(2));
        assert!(anchor.advance(3));
    }
}
