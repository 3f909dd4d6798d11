//! One-click suggested questions, toggled from the FAQ footer link.

use leptos::prelude::*;

use crate::components::chat_widget::WidgetActions;
use crate::state::conversation::ConversationState;

#[component]
pub fn SuggestedQuestions() -> impl IntoView {
    let actions = expect_context::<WidgetActions>();
    let ui = actions.ui;
    let conversation = actions.conversation;
    let questions = actions.config.with_value(|c| c.suggestions.clone());

    view! {
        <Show when=move || ui.with(|u| u.show_suggestions)>
            <div class="suggested-questions" class:fade-out=move || ui.with(|u| u.suggestions_fading)>
                {questions
                    .iter()
                    .cloned()
                    .map(|q| {
                        let label = q.clone();
                        view! {
                            <button
                                class="suggested-btn"
                                disabled=move || conversation.with(ConversationState::is_typing)
                                on:click=move |_| actions.click_suggestion(q.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Show>
    }
}
