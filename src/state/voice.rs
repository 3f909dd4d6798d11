//! Voice input state: listening flag and speech session bookkeeping.
//!
//! DESIGN
//! ======
//! Each started capture gets a new session number. Recognizer events carry
//! the session they belong to, and events from a stopped or superseded
//! session are ignored, so a late `result` can never overwrite the input after
//! the user stopped listening.

#[cfg(test)]
#[path = "voice_test.rs"]
mod voice_test;

/// Fixed recognizer configuration for one capture session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeechConfig {
    pub lang: String,
    pub interim_results: bool,
    pub max_alternatives: u32,
}

impl SpeechConfig {
    pub fn new(lang: impl Into<String>) -> Self {
        Self { lang: lang.into(), interim_results: false, max_alternatives: 1 }
    }
}

/// What the widget must do with the platform recognizer after a toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoiceAction {
    /// No speech capability; tell the user, change nothing.
    Unsupported,
    /// Stop the active recognizer.
    Stop,
    /// Start a recognizer for `session` with `config`.
    Start { session: u64, config: SpeechConfig },
}

/// Listening state for the microphone button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoiceState {
    listening: bool,
    session: u64,
}

impl VoiceState {
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Session number of the most recently started capture.
    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Microphone button pressed. Stopping never depends on the capability.
    pub fn toggle(&mut self, capability_available: bool, lang: &str) -> VoiceAction {
        if self.listening {
            self.listening = false;
            return VoiceAction::Stop;
        }
        if !capability_available {
            return VoiceAction::Unsupported;
        }
        self.session += 1;
        self.listening = true;
        VoiceAction::Start { session: self.session, config: SpeechConfig::new(lang) }
    }

    /// A transcript arrived. Returns the text that replaces the input field,
    /// or `None` when the event is stale.
    pub fn on_result(&mut self, session: u64, transcript: &str) -> Option<String> {
        if !self.is_current(session) {
            return None;
        }
        self.listening = false;
        Some(transcript.to_owned())
    }

    /// Recognition failed; the input field is left alone.
    pub fn on_error(&mut self, session: u64, reason: &str) {
        if self.is_current(session) {
            log::warn!("speech recognition error: {reason}");
            self.listening = false;
        }
    }

    /// Recognizer ended on its own (silence, timeout).
    pub fn on_end(&mut self, session: u64) {
        if self.is_current(session) {
            self.listening = false;
        }
    }

    /// Unconditional stop used on teardown and when starting capture failed.
    pub fn reset(&mut self) {
        self.listening = false;
    }

    fn is_current(&self, session: u64) -> bool {
        self.listening && session == self.session
    }
}
