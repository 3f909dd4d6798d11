//! One-time greeting bubble shown before the panel is first opened.

use leptos::prelude::*;

use crate::components::chat_widget::WidgetActions;
use crate::state::ui::UiState;

#[component]
pub fn PreviewBubble() -> impl IntoView {
    let actions = expect_context::<WidgetActions>();
    let ui = actions.ui;
    let welcome = actions.welcome;

    view! {
        <Show when=move || ui.with(UiState::preview_visible)>
            <div class="preview-wrapper">
                <div class="preview-bubble" on:click=move |_| actions.toggle_panel()>
                    {move || welcome.with(|w| w.displayed().to_owned())}
                </div>
                <span class="preview-close-outside" on:click=move |_| ui.update(UiState::dismiss_preview)>
                    "×"
                </span>
            </div>
        </Show>
    }
}
