use super::*;
use crate::state::persona::{IconRef, PersonaSettings};

fn persona() -> PersonaState {
    PersonaState::new(PersonaSettings { name: "Quicky".to_owned(), icon: IconRef::new("/a.png") })
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_closed_with_preview() {
    let state = UiState::default();
    assert_eq!(state.panel, PanelPhase::Closed);
    assert!(state.preview_visible());
    assert!(!state.show_dropdown);
    assert!(!state.show_suggestions);
}

// =============================================================
// Panel phase
// =============================================================

#[test]
fn open_hides_preview() {
    let mut state = UiState::default();
    assert_eq!(state.toggle_panel(Some(300)), PanelTransition::Opened);
    assert!(state.is_open());
    assert!(!state.show_preview);
    assert!(!state.preview_visible());
}

#[test]
fn close_with_animation_enters_closing_then_closed() {
    let mut state = UiState::default();
    state.toggle_panel(Some(300));
    assert_eq!(state.toggle_panel(Some(300)), PanelTransition::StartCloseTimer { ms: 300 });
    assert!(state.is_closing());
    assert!(state.is_open());

    state.finish_close();
    assert_eq!(state.panel, PanelPhase::Closed);
    assert!(!state.is_open());
}

#[test]
fn close_without_animation_is_immediate() {
    let mut state = UiState::default();
    state.toggle_panel(None);
    assert_eq!(state.toggle_panel(None), PanelTransition::Closed);
    assert_eq!(state.panel, PanelPhase::Closed);

    state.toggle_panel(Some(0));
    assert_eq!(state.toggle_panel(Some(0)), PanelTransition::Closed);
}

#[test]
fn reopen_during_close_cancels_and_stale_timer_is_ignored() {
    let mut state = UiState::default();
    state.toggle_panel(Some(300));
    state.toggle_panel(Some(300));
    assert_eq!(state.toggle_panel(Some(300)), PanelTransition::Opened);
    state.finish_close();
    assert_eq!(state.panel, PanelPhase::Open);
}

#[test]
fn preview_never_returns_after_first_open() {
    let mut state = UiState::default();
    state.toggle_panel(None);
    state.toggle_panel(None);
    assert!(!state.preview_visible());
    assert!(!state.show_preview);
    state.toggle_panel(Some(200));
    state.toggle_panel(Some(200));
    state.finish_close();
    assert!(!state.preview_visible());
}

#[test]
fn dismiss_preview_hides_bubble_without_opening() {
    let mut state = UiState::default();
    state.dismiss_preview();
    assert!(!state.preview_visible());
    assert_eq!(state.panel, PanelPhase::Closed);
}

#[test]
fn closing_panel_hides_dropdown() {
    let mut state = UiState::default();
    let mut persona = persona();
    state.toggle_panel(None);
    state.toggle_dropdown(&mut persona);
    state.toggle_panel(None);
    assert!(!state.show_dropdown);
}

// =============================================================
// Settings dropdown
// =============================================================

#[test]
fn reopening_dropdown_discards_unsaved_draft() {
    let mut state = UiState::default();
    let mut persona = persona();
    state.toggle_dropdown(&mut persona);
    persona.set_draft_name("Bot2");
    state.toggle_dropdown(&mut persona);
    state.toggle_dropdown(&mut persona);
    assert_eq!(persona.draft().name, "Quicky");
}

#[test]
fn save_persona_commits_and_closes_dropdown() {
    let mut state = UiState::default();
    let mut persona = persona();
    state.toggle_dropdown(&mut persona);
    persona.set_draft_name("Bot2");
    persona.set_draft_icon(IconRef::new("/b.png"));
    state.save_persona(&mut persona);

    assert!(!state.show_dropdown);
    assert_eq!(persona.committed().name, "Bot2");
    assert_eq!(persona.committed().icon, IconRef::new("/b.png"));
}

// =============================================================
// Suggestions
// =============================================================

#[test]
fn faq_toggle_flips_suggestions() {
    let mut state = UiState::default();
    state.toggle_suggestions();
    assert!(state.show_suggestions);
    state.toggle_suggestions();
    assert!(!state.show_suggestions);
}

#[test]
fn suggestion_fade_hides_list_once() {
    let mut state = UiState::default();
    assert!(!state.begin_suggestion_fade(false));

    state.toggle_suggestions();
    assert!(state.begin_suggestion_fade(false));
    assert!(!state.begin_suggestion_fade(false));
    state.finish_suggestion_fade();
    assert!(!state.show_suggestions);
    assert!(!state.suggestions_fading);
}

#[test]
fn suggestion_click_while_reply_pending_keeps_list() {
    let mut state = UiState::default();
    state.toggle_suggestions();
    assert!(!state.begin_suggestion_fade(true));
    assert!(state.show_suggestions);
    assert!(!state.suggestions_fading);
}
