//! Widget chrome state (panel phase, preview bubble, dropdown, suggestions).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the conversation so rendering controls
//! can evolve independently of message data. The panel has a distinct
//! `Closing` phase: a collapsing panel stays mounted (styled as closing) until
//! the close timer fires [`UiState::finish_close`].

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::persona::PersonaState;

/// Visibility phase of the chat panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelPhase {
    #[default]
    Closed,
    Open,
    /// Close animation running; the panel is still mounted.
    Closing,
}

/// Side effect the widget must schedule after a panel toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelTransition {
    Opened,
    /// Run the close animation and call `finish_close` after `ms`.
    StartCloseTimer { ms: u32 },
    Closed,
}

/// UI flags for one widget instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub panel: PanelPhase,
    pub show_preview: bool,
    pub show_dropdown: bool,
    pub show_suggestions: bool,
    pub suggestions_fading: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            panel: PanelPhase::Closed,
            show_preview: true,
            show_dropdown: false,
            show_suggestions: false,
            suggestions_fading: false,
        }
    }
}

impl UiState {
    /// `true` while the panel is mounted (open or animating closed).
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.panel, PanelPhase::Open | PanelPhase::Closing)
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.panel == PanelPhase::Closing
    }

    /// The preview bubble renders only while the panel has never been opened.
    #[must_use]
    pub fn preview_visible(&self) -> bool {
        self.show_preview && !self.is_open()
    }

    /// Launcher, overlay, or close button pressed.
    pub fn toggle_panel(&mut self, close_animation_ms: Option<u32>) -> PanelTransition {
        match self.panel {
            PanelPhase::Closed | PanelPhase::Closing => {
                self.panel = PanelPhase::Open;
                // The preview bubble never returns after the first open.
                self.show_preview = false;
                PanelTransition::Opened
            }
            PanelPhase::Open => {
                self.show_dropdown = false;
                match close_animation_ms {
                    Some(ms) if ms > 0 => {
                        self.panel = PanelPhase::Closing;
                        PanelTransition::StartCloseTimer { ms }
                    }
                    _ => {
                        self.panel = PanelPhase::Closed;
                        PanelTransition::Closed
                    }
                }
            }
        }
    }

    /// Close timer elapsed. Ignored unless the panel is still closing, so a
    /// stale timer after a quick reopen does nothing.
    pub fn finish_close(&mut self) {
        if self.panel == PanelPhase::Closing {
            self.panel = PanelPhase::Closed;
        }
    }

    /// The "×" beside the preview bubble.
    pub fn dismiss_preview(&mut self) {
        self.show_preview = false;
    }

    /// Settings button pressed. Opening always re-seeds the draft persona.
    pub fn toggle_dropdown(&mut self, persona: &mut PersonaState) {
        self.show_dropdown = !self.show_dropdown;
        if self.show_dropdown {
            persona.reseed_draft();
        }
    }

    /// Save pressed in the settings dropdown.
    pub fn save_persona(&mut self, persona: &mut PersonaState) {
        persona.save();
        self.show_dropdown = false;
    }

    /// FAQ footer link.
    pub fn toggle_suggestions(&mut self) {
        self.show_suggestions = !self.show_suggestions;
        self.suggestions_fading = false;
    }

    /// A suggestion was clicked. Returns `false` when the list is not
    /// interactive: hidden, already fading out, or a reply is still pending
    /// and the question would be refused.
    pub fn begin_suggestion_fade(&mut self, reply_pending: bool) -> bool {
        if reply_pending || !self.show_suggestions || self.suggestions_fading {
            return false;
        }
        self.suggestions_fading = true;
        true
    }

    pub fn finish_suggestion_fade(&mut self) {
        self.suggestions_fading = false;
        self.show_suggestions = false;
    }
}
