#![cfg(not(feature = "csr"))]

use super::*;
use leptos::reactive::owner::Owner;

fn with_widget(config: WidgetConfig, test: impl FnOnce(WidgetActions)) {
    let owner = Owner::new();
    owner.with(|| test(WidgetActions::new(config)));
}

fn start_listening(actions: WidgetActions) {
    actions.voice.update(|v| {
        let _ = v.toggle(true, "en-US");
    });
    actions.speech.set_value(Some(SpeechCapture {}));
}

fn make_busy(actions: WidgetActions) {
    actions.conversation.update(|c| {
        let _ = c.begin_send("Where is KitKat made?", "2025-06-01T10:00:00Z");
    });
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn teardown_releases_every_handle() {
    with_widget(WidgetConfig::default(), |actions| {
        actions.start_typing("Hi!".to_owned());
        actions.toggle_panel();
        actions.toggle_panel();
        actions.ui.update(UiState::toggle_suggestions);
        actions.click_suggestion("Any recipes?".to_owned());
        start_listening(actions);

        assert!(actions.typing_ticker.with_value(Option::is_some));
        assert!(actions.close_timer.with_value(Option::is_some));
        assert!(actions.fade_timer.with_value(Option::is_some));
        assert!(actions.speech.with_value(Option::is_some));

        actions.teardown();

        assert!(actions.typing_ticker.with_value(Option::is_none));
        assert!(actions.close_timer.with_value(Option::is_none));
        assert!(actions.fade_timer.with_value(Option::is_none));
        assert!(actions.speech.with_value(Option::is_none));
        assert!(!actions.voice.with_untracked(VoiceState::is_listening));
    });
}

#[test]
fn start_typing_restarts_from_empty_prefix() {
    with_widget(WidgetConfig::default(), |actions| {
        actions.start_typing("Hello".to_owned());
        actions.welcome.update(|w| {
            w.tick();
        });
        actions.start_typing("Yo".to_owned());
        assert_eq!(actions.welcome.with_untracked(|w| w.displayed().to_owned()), "");
        assert_eq!(actions.welcome.with_untracked(|w| w.target().to_owned()), "Yo");
        assert!(actions.typing_ticker.with_value(Option::is_some));
    });
}

// =============================================================
// Panel
// =============================================================

#[test]
fn closing_schedules_timer_and_reopen_clears_it() {
    with_widget(WidgetConfig::default(), |actions| {
        actions.toggle_panel();
        assert!(actions.close_timer.with_value(Option::is_none));

        actions.toggle_panel();
        assert!(actions.ui.with_untracked(UiState::is_closing));
        assert!(actions.close_timer.with_value(Option::is_some));

        actions.toggle_panel();
        assert!(actions.ui.with_untracked(UiState::is_open));
        assert!(!actions.ui.with_untracked(UiState::is_closing));
        assert!(actions.close_timer.with_value(Option::is_none));
    });
}

#[test]
fn instant_close_schedules_no_timer() {
    let config = WidgetConfig { close_animation_ms: None, ..WidgetConfig::default() };
    with_widget(config, |actions| {
        actions.toggle_panel();
        actions.toggle_panel();
        assert!(!actions.ui.with_untracked(UiState::is_open));
        assert!(actions.close_timer.with_value(Option::is_none));
    });
}

// =============================================================
// Voice
// =============================================================

#[test]
fn stopping_capture_leaves_input_untouched() {
    with_widget(WidgetConfig::default(), |actions| {
        actions.input.set("half a question".to_owned());
        start_listening(actions);

        actions.toggle_listening();

        assert_eq!(actions.input.get_untracked(), "half a question");
        assert!(!actions.voice.with_untracked(VoiceState::is_listening));
        assert!(actions.speech.with_value(Option::is_none));
    });
}

#[test]
fn mic_without_recognizer_stays_idle() {
    with_widget(WidgetConfig::default(), |actions| {
        actions.input.set("typed".to_owned());
        actions.toggle_listening();

        assert_eq!(actions.input.get_untracked(), "typed");
        assert!(!actions.voice.with_untracked(VoiceState::is_listening));
        assert!(actions.speech.with_value(Option::is_none));
    });
}

// =============================================================
// Send
// =============================================================

#[test]
fn blank_input_is_kept_and_not_sent() {
    with_widget(WidgetConfig::default(), |actions| {
        actions.input.set("   ".to_owned());
        actions.send_input();
        assert_eq!(actions.input.get_untracked(), "   ");
        assert_eq!(actions.conversation.with_untracked(ConversationState::len), 1);
    });
}

#[test]
fn input_is_kept_while_reply_pending() {
    with_widget(WidgetConfig::default(), |actions| {
        make_busy(actions);
        actions.input.set("And where is Aero made?".to_owned());
        actions.send_input();
        assert_eq!(actions.input.get_untracked(), "And where is Aero made?");
        assert_eq!(actions.conversation.with_untracked(ConversationState::len), 2);
    });
}

#[test]
fn accepted_send_clears_input() {
    with_widget(WidgetConfig::default(), |actions| {
        actions.input.set("Hello".to_owned());
        actions.send_input();
        assert_eq!(actions.input.get_untracked(), "");
    });
}

// =============================================================
// Suggestions
// =============================================================

#[test]
fn suggestion_click_fades_list_out() {
    with_widget(WidgetConfig::default(), |actions| {
        actions.ui.update(UiState::toggle_suggestions);
        actions.click_suggestion("Any recipes?".to_owned());
        assert!(actions.ui.with_untracked(|u| u.suggestions_fading));
        assert!(actions.fade_timer.with_value(Option::is_some));
    });
}

#[test]
fn suggestion_click_while_reply_pending_is_ignored() {
    with_widget(WidgetConfig::default(), |actions| {
        actions.ui.update(UiState::toggle_suggestions);
        make_busy(actions);
        actions.click_suggestion("Any recipes?".to_owned());

        assert!(actions.ui.with_untracked(|u| u.show_suggestions));
        assert!(!actions.ui.with_untracked(|u| u.suggestions_fading));
        assert!(actions.fade_timer.with_value(Option::is_none));
    });
}
