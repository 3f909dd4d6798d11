//! Floating launcher button.

use leptos::prelude::*;

use crate::components::chat_widget::WidgetActions;
use crate::state::ui::UiState;

#[component]
pub fn Launcher() -> impl IntoView {
    let actions = expect_context::<WidgetActions>();
    let ui = actions.ui;
    let icon = actions.config.with_value(|c| c.launcher_icon.as_str().to_owned());

    view! {
        <button class="chat-launcher slide-in" on:click=move |_| actions.toggle_panel()>
            {move || {
                if ui.with(UiState::is_open) {
                    view! { <span id="launcher-close">"×"</span> }.into_any()
                } else {
                    view! { <img src=icon.clone() alt="Chat Icon"/> }.into_any()
                }
            }}
        </button>
    }
}
