//! Expanded chat panel: header, history, input row, and footer.

use leptos::prelude::*;

use crate::components::chat_widget::WidgetActions;
use crate::components::message_list::MessageList;
use crate::components::settings_dropdown::SettingsDropdown;
use crate::components::suggested_questions::SuggestedQuestions;
use crate::state::conversation::ConversationState;
use crate::state::ui::UiState;
use crate::state::voice::VoiceState;
use crate::util::clock::date_time;

/// Chat panel. Stays mounted while closing so the collapse animation can run.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let actions = expect_context::<WidgetActions>();
    let ui = actions.ui;
    let conversation = actions.conversation;
    let persona = actions.persona;
    let input = actions.input;

    let body_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = conversation.with(|c| (c.revision(), c.is_typing()));

        #[cfg(feature = "csr")]
        {
            if let Some(el) = body_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            actions.send_input();
        }
    };

    let bot_name = move || persona.with(|p| p.committed().name.clone());
    let bot_icon = move || persona.with(|p| p.committed().icon.as_str().to_owned());
    let started_at = move || conversation.with(|c| c.started_at().map(date_time).unwrap_or_default());
    let voice_enabled = actions.config.with_value(|c| c.voice_enabled);
    let show_footer = actions.config.with_value(|c| c.show_footer);
    let credit_url = actions.config.with_value(|c| c.credit_url.clone());

    view! {
        <div class="chat-modal" class:chat-modal--closing=move || ui.with(UiState::is_closing)>
            <div class="chat-header">
                <div class="chat-header-left">
                    <img src=bot_icon alt="Bot Icon" class="bot-icon"/>
                    <span>{bot_name}</span>
                </div>
                <div class="chat-header-right">
                    <button class="dropdown-toggle" title="Settings" on:click=move |_| actions.toggle_dropdown()>
                        <span class="dropdown-toggle__icon"></span>
                    </button>
                    <button class="close-btn" title="Close" on:click=move |_| actions.toggle_panel()>
                        "×"
                    </button>
                </div>
                <Show when=move || ui.with(|u| u.show_dropdown)>
                    <SettingsDropdown/>
                </Show>
            </div>

            <div class="chat-body" node_ref=body_ref>
                <div class="chat-body-inner">
                    <div class="chat-welcome-section">
                        <img src=bot_icon alt="Bot" class="chat-welcome-icon"/>
                        <div class="chat-welcome-name">{bot_name}</div>
                        <div class="chat-welcome-time">{started_at}</div>
                    </div>
                    <MessageList/>
                    <Show when=move || conversation.with(ConversationState::is_typing)>
                        <div class="chat-msg bot">
                            <div class="msg-wrapper bot">
                                <img src=bot_icon alt="bot" class="msg-avatar left"/>
                                <div class="msg-bubble bot-bubble typing">
                                    <span class="dot"></span>
                                    <span class="dot"></span>
                                    <span class="dot"></span>
                                </div>
                            </div>
                        </div>
                    </Show>
                    <SuggestedQuestions/>
                </div>
            </div>

            <div class="chat-input">
                <div class="chat-input-wrapper">
                    <input
                        type="text"
                        placeholder="Ask me..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <div class="input-buttons">
                        {voice_enabled
                            .then(|| {
                                view! {
                                    <button
                                        class="circle-btn mic-btn"
                                        class:mic-btn--listening=move || actions.voice.with(VoiceState::is_listening)
                                        title="Speak"
                                        on:click=move |_| actions.toggle_listening()
                                    >
                                        "🎤"
                                    </button>
                                }
                            })}
                        <button
                            class="circle-btn"
                            title="Send"
                            disabled=move || conversation.with(ConversationState::is_typing)
                            on:click=move |_| actions.send_input()
                        >
                            "➤"
                        </button>
                    </div>
                </div>
            </div>

            {show_footer
                .then(|| {
                    view! {
                        <div class="chat-footer-links">
                            <span class="footer-link" on:click=move |_| ui.update(UiState::toggle_suggestions)>
                                "FAQ"
                            </span>
                            <span class="footer-separator">"|"</span>
                            <a class="footer-link" href=credit_url>
                                "Made by David Oche"
                            </a>
                        </div>
                    }
                })}
        </div>
    }
}
