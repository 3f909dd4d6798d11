//! Root application: embedded marketing page with the widget floating above.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::chat_widget::ChatWidget;
use crate::config::WidgetConfig;

/// Root application component.
///
/// Loads the widget configuration once and embeds the static page behind
/// the widget; the page has no data dependency on the widget.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = WidgetConfig::load();
    let page_url = config.page_url.clone();

    view! {
        <Stylesheet id="quicky" href="/pkg/quicky.css"/>
        <Title text="Made with Nestlé"/>

        <iframe class="embedded-page" src=page_url title="Made with Nestlé"></iframe>
        <ChatWidget config=config/>
    }
}
