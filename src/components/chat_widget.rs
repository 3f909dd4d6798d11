//! Root widget component and its action surface.
//!
//! DESIGN
//! ======
//! All state is created here, per instance, and handed to children through
//! context. Timers and the speech recognizer live in local stored slots; each
//! slot owns a handle that cancels on drop, and `on_cleanup` empties every
//! slot so nothing fires after the widget unmounts.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::launcher::Launcher;
use crate::components::preview_bubble::PreviewBubble;
use crate::config::WidgetConfig;
use crate::state::conversation::ConversationState;
use crate::state::persona::{PersonaSettings, PersonaState};
use crate::state::typing::TypingEffect;
use crate::state::ui::{PanelTransition, UiState};
use crate::state::voice::{VoiceAction, VoiceState};
use crate::util::clock::now_iso;
use crate::util::speech::{self, SpeechCapture, SpeechError, SpeechEvent};
use crate::util::ticker::{Delay, Ticker};

/// Handles and signals shared by the widget's child components.
#[derive(Clone, Copy)]
pub struct WidgetActions {
    pub config: StoredValue<WidgetConfig>,
    pub ui: RwSignal<UiState>,
    pub conversation: RwSignal<ConversationState>,
    pub persona: RwSignal<PersonaState>,
    pub voice: RwSignal<VoiceState>,
    pub input: RwSignal<String>,
    pub welcome: RwSignal<TypingEffect>,
    typing_ticker: StoredValue<Option<Ticker>, LocalStorage>,
    close_timer: StoredValue<Option<Delay>, LocalStorage>,
    fade_timer: StoredValue<Option<Delay>, LocalStorage>,
    speech: StoredValue<Option<SpeechCapture>, LocalStorage>,
}

impl WidgetActions {
    fn new(config: WidgetConfig) -> Self {
        let persona = PersonaState::new(PersonaSettings { name: config.label.clone(), icon: config.default_icon() });
        Self {
            ui: RwSignal::new(UiState::default()),
            conversation: RwSignal::new(ConversationState::with_welcome(now_iso())),
            persona: RwSignal::new(persona),
            voice: RwSignal::new(VoiceState::default()),
            input: RwSignal::new(String::new()),
            welcome: RwSignal::new(TypingEffect::default()),
            config: StoredValue::new(config),
            typing_ticker: StoredValue::new_local(None),
            close_timer: StoredValue::new_local(None),
            fade_timer: StoredValue::new_local(None),
            speech: StoredValue::new_local(None),
        }
    }

    /// (Re)start the welcome reveal; replacing the ticker cancels the old one.
    pub fn start_typing(self, target: String) {
        let interval = self.config.with_value(|c| c.typing_interval_ms);
        self.welcome.update(|w| w.restart(target));
        let welcome = self.welcome;
        let ticker = Ticker::every(interval, move || {
            let _ = welcome.try_update(TypingEffect::tick);
        });
        self.typing_ticker.set_value(Some(ticker));
    }

    /// Launcher, overlay, or close button.
    pub fn toggle_panel(self) {
        let close_ms = self.config.with_value(|c| c.close_animation_ms);
        match self.ui.try_update(|u| u.toggle_panel(close_ms)) {
            Some(PanelTransition::StartCloseTimer { ms }) => {
                let ui = self.ui;
                let timer = Delay::after(ms, move || {
                    let _ = ui.try_update(UiState::finish_close);
                });
                self.close_timer.set_value(Some(timer));
            }
            Some(PanelTransition::Opened | PanelTransition::Closed) => self.close_timer.set_value(None),
            None => {}
        }
    }

    pub fn toggle_dropdown(self) {
        let persona = self.persona;
        self.ui.update(|u| persona.update(|p| u.toggle_dropdown(p)));
    }

    pub fn save_persona(self) {
        let persona = self.persona;
        self.ui.update(|u| persona.update(|p| u.save_persona(p)));
    }

    /// Send the current input field.
    pub fn send_input(self) {
        let text = self.input.get_untracked();
        self.send(text);
    }

    /// Send `text` as a question. Ignored when blank or while a reply is pending.
    pub fn send(self, text: String) {
        if text.trim().is_empty() || self.conversation.with_untracked(ConversationState::is_typing) {
            return;
        }
        self.input.set(String::new());

        #[cfg(feature = "csr")]
        {
            use crate::controller::send_question;
            use crate::net::answer::HttpAnswerClient;
            use crate::net::geolocation::BrowserLocation;

            let (endpoint, geo_timeout) = self.config.with_value(|c| (c.endpoint.clone(), c.geolocation_timeout_ms));
            let name = self.persona.with_untracked(|p| p.committed().name.clone());
            let conversation = self.conversation;
            leptos::task::spawn_local(async move {
                let outcome = send_question(
                    &conversation,
                    &BrowserLocation::new(geo_timeout),
                    &HttpAnswerClient::new(endpoint),
                    &name,
                    &text,
                )
                .await;
                log::debug!("send settled: {outcome:?}");
            });
        }
    }

    /// Suggested question clicked: fade the list out, then send. Ignored while
    /// a reply is pending.
    pub fn click_suggestion(self, question: String) {
        let pending = self.conversation.with_untracked(ConversationState::is_typing);
        if !self.ui.try_update(|u| u.begin_suggestion_fade(pending)).unwrap_or(false) {
            return;
        }
        let fade_ms = self.config.with_value(|c| c.suggestion_fade_ms);
        let timer = Delay::after(fade_ms, move || {
            if self.ui.try_update(UiState::finish_suggestion_fade).is_some() {
                self.send(question);
            }
        });
        self.fade_timer.set_value(Some(timer));
    }

    /// Microphone button.
    pub fn toggle_listening(self) {
        let lang = self.config.with_value(|c| c.speech_lang.clone());
        let available = speech::is_supported();
        let Some(action) = self.voice.try_update(|v| v.toggle(available, &lang)) else {
            return;
        };
        match action {
            VoiceAction::Unsupported => speech::alert_unsupported(),
            VoiceAction::Stop => {
                if let Some(capture) = self.speech.try_update_value(Option::take).flatten() {
                    capture.stop();
                }
            }
            VoiceAction::Start { session, config } => {
                let voice = self.voice;
                let input = self.input;
                let started = SpeechCapture::start(&config, move |event| match event {
                    SpeechEvent::Result(transcript) => {
                        if let Some(text) = voice.try_update(|v| v.on_result(session, &transcript)).flatten() {
                            input.set(text);
                        }
                    }
                    SpeechEvent::Error(reason) => {
                        let _ = voice.try_update(|v| v.on_error(session, &reason));
                    }
                    SpeechEvent::End => {
                        let _ = voice.try_update(|v| v.on_end(session));
                    }
                });
                match started {
                    Ok(capture) => self.speech.set_value(Some(capture)),
                    Err(e) => {
                        log::error!("{e}");
                        self.voice.update(VoiceState::reset);
                        if matches!(e, SpeechError::Unsupported) {
                            speech::alert_unsupported();
                        }
                    }
                }
            }
        }
    }

    /// Release every timer and the recognizer.
    fn teardown(self) {
        let _ = self.typing_ticker.try_update_value(Option::take);
        let _ = self.close_timer.try_update_value(Option::take);
        let _ = self.fade_timer.try_update_value(Option::take);
        let _ = self.speech.try_update_value(Option::take);
        let _ = self.voice.try_update(VoiceState::reset);
    }
}

/// Floating chat widget: launcher, preview bubble, and chat panel.
#[component]
pub fn ChatWidget(#[prop(optional)] config: Option<WidgetConfig>) -> impl IntoView {
    let config = config.unwrap_or_else(WidgetConfig::load);
    let welcome_text = config.welcome_text();
    let actions = WidgetActions::new(config);
    provide_context(actions);

    actions.start_typing(welcome_text);

    // Mirror the revealed greeting into the seeded first message.
    Effect::new(move || {
        let shown = actions.welcome.with(|w| w.displayed().to_owned());
        actions.conversation.update(|c| c.replace_first_message_text(&shown));
    });

    // Stop ticking once the greeting is fully shown.
    Effect::new(move || {
        if actions.welcome.with(TypingEffect::is_complete) {
            actions.typing_ticker.set_value(None);
        }
    });

    // Release the recognizer once capture is over.
    Effect::new(move || {
        if !actions.voice.with(VoiceState::is_listening) {
            actions.speech.set_value(None);
        }
    });

    on_cleanup(move || actions.teardown());

    view! {
        <div class="quicky-widget">
            <Show when=move || actions.ui.with(UiState::is_open)>
                <div class="chat-overlay" on:click=move |_| actions.toggle_panel()></div>
                <ChatPanel/>
            </Show>
            <PreviewBubble/>
            <Launcher/>
        </div>
    }
}
