//! Persona settings dropdown (name + icon picker).

use leptos::prelude::*;

use crate::components::chat_widget::WidgetActions;

/// Edits the draft persona; nothing outside this dropdown changes until Save.
#[component]
pub fn SettingsDropdown() -> impl IntoView {
    let actions = expect_context::<WidgetActions>();
    let persona = actions.persona;
    let presets = actions.config.with_value(|c| c.preset_icons.clone());

    view! {
        <div class="chat-dropdown">
            <label>
                "Name:"
                <input
                    type="text"
                    prop:value=move || persona.with(|p| p.draft().name.clone())
                    on:input=move |ev| persona.update(|p| p.set_draft_name(event_target_value(&ev)))
                />
            </label>
            <div class="icon-options">
                {presets
                    .into_iter()
                    .enumerate()
                    .map(|(idx, icon)| {
                        let src = icon.as_str().to_owned();
                        let selected_icon = icon.clone();
                        view! {
                            <img
                                src=src
                                alt=format!("icon-{}", idx + 1)
                                class="icon-option"
                                class:selected=move || persona.with(|p| p.draft().icon == selected_icon)
                                on:click=move |_| persona.update(|p| p.set_draft_icon(icon.clone()))
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <button class="save-settings" on:click=move |_| actions.save_persona()>
                "Save"
            </button>
        </div>
    }
}
