//! Conversation history rendering.

use leptos::prelude::*;

use crate::components::chat_widget::WidgetActions;
use crate::util::clock::time_of_day;
use crate::util::markdown::render_markdown_html;

/// Every message in display order. Bot text renders as Markdown.
#[component]
pub fn MessageList() -> impl IntoView {
    let actions = expect_context::<WidgetActions>();
    let conversation = actions.conversation;
    let persona = actions.persona;
    let user_icon = actions.config.with_value(|c| c.user_icon.clone());

    move || {
        let bot_icon = persona.with(|p| p.committed().icon.clone());
        conversation.with(|c| {
            c.messages()
                .iter()
                .map(|msg| {
                    let sender = msg.sender;
                    let avatar = sender.avatar(&bot_icon, &user_icon).as_str().to_owned();
                    let stamp = time_of_day(&msg.timestamp);
                    let body = if sender.renders_markdown() {
                        let rendered = render_markdown_html(&msg.text);
                        view! { <div class="msg-markdown" inner_html=rendered></div> }.into_any()
                    } else {
                        view! { <span>{msg.text.clone()}</span> }.into_any()
                    };

                    view! {
                        <div class=format!("chat-msg {}", sender.modifier())>
                            <div class=format!("msg-wrapper {}", sender.modifier())>
                                <img
                                    src=avatar
                                    alt=sender.modifier()
                                    class=format!("msg-avatar {}", sender.avatar_side())
                                />
                                <div>
                                    <div class=format!("msg-bubble {}", sender.bubble_class())>
                                        {body}
                                        <div class="msg-timestamp-inside">{stamp}</div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()
        })
    }
}
