//! Persona settings: the name and icon the bot presents.
//!
//! The committed persona drives rendering and outgoing requests. The draft is
//! a separate owned copy edited in the settings dropdown and only becomes
//! visible after [`PersonaState::save`].

#[cfg(test)]
#[path = "persona_test.rs"]
mod persona_test;

use serde::{Deserialize, Serialize};

/// Opaque reference to an image asset (a URL or bundler path).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(src: impl Into<String>) -> Self {
        Self(src.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Display name and icon of the bot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonaSettings {
    pub name: String,
    pub icon: IconRef,
}

/// Committed persona plus the unsaved draft being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonaState {
    committed: PersonaSettings,
    draft: PersonaSettings,
}

impl PersonaState {
    pub fn new(settings: PersonaSettings) -> Self {
        Self { draft: settings.clone(), committed: settings }
    }

    #[must_use]
    pub fn committed(&self) -> &PersonaSettings {
        &self.committed
    }

    #[must_use]
    pub fn draft(&self) -> &PersonaSettings {
        &self.draft
    }

    /// Discard unsaved edits by copying the committed persona into the draft.
    pub fn reseed_draft(&mut self) {
        self.draft = self.committed.clone();
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_draft_icon(&mut self, icon: IconRef) {
        self.draft.icon = icon;
    }

    /// Commit the draft. A blank draft name keeps the committed name; the
    /// draft is normalized to what was actually committed.
    pub fn save(&mut self) {
        let name = self.draft.name.trim();
        if !name.is_empty() {
            self.committed.name = name.to_owned();
        }
        self.committed.icon = self.draft.icon.clone();
        self.draft = self.committed.clone();
    }
}
