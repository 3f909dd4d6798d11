//! Widget configuration.
//!
//! DESIGN
//! ======
//! Every field carries a serde default so a host page can override any subset
//! through an embedded `<script type="application/json" id="quicky-config">`
//! element. Behavior that used to differ between widget variants (close
//! animation, voice input, footer) is expressed as flags here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::persona::IconRef;

/// DOM id of the optional embedded configuration element.
pub const CONFIG_ELEMENT_ID: &str = "quicky-config";

pub const DEFAULT_LABEL: &str = "Quicky";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/chat";
pub const DEFAULT_TYPING_INTERVAL_MS: u32 = 25;
pub const DEFAULT_CLOSE_ANIMATION_MS: u32 = 300;
pub const DEFAULT_SUGGESTION_FADE_MS: u32 = 400;
pub const DEFAULT_GEOLOCATION_TIMEOUT_MS: u32 = 5000;
pub const DEFAULT_SPEECH_LANG: &str = "en-US";

/// Errors produced while reading embedded configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration element held invalid JSON.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Runtime configuration for one widget instance.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Initial persona name, also used in the welcome greeting.
    pub label: String,
    /// Question-answering endpoint receiving `POST` requests.
    pub endpoint: String,
    /// URL of the page embedded behind the widget.
    pub page_url: String,
    /// Delay between revealed characters of the welcome greeting.
    pub typing_interval_ms: u32,
    /// Close animation length; `None` closes the panel immediately.
    pub close_animation_ms: Option<u32>,
    /// Fade-out duration of the suggestion list after a click.
    pub suggestion_fade_ms: u32,
    /// Upper bound on the geolocation lookup before sending without it.
    pub geolocation_timeout_ms: u32,
    /// Locale passed to the speech recognizer.
    pub speech_lang: String,
    /// Show the microphone button.
    pub voice_enabled: bool,
    /// Show the FAQ / credits footer under the input row.
    pub show_footer: bool,
    /// Author credit link rendered in the footer.
    pub credit_url: String,
    /// Avatar rendered next to user messages.
    pub user_icon: IconRef,
    /// Animated launcher icon.
    pub launcher_icon: IconRef,
    /// Persona icons offered in the settings dropdown; the first is the default.
    pub preset_icons: Vec<IconRef>,
    /// One-click questions listed under the conversation.
    pub suggestions: Vec<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_owned(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            page_url: "/nestle.html".to_owned(),
            typing_interval_ms: DEFAULT_TYPING_INTERVAL_MS,
            close_animation_ms: Some(DEFAULT_CLOSE_ANIMATION_MS),
            suggestion_fade_ms: DEFAULT_SUGGESTION_FADE_MS,
            geolocation_timeout_ms: DEFAULT_GEOLOCATION_TIMEOUT_MS,
            speech_lang: DEFAULT_SPEECH_LANG.to_owned(),
            voice_enabled: true,
            show_footer: true,
            credit_url: "https://davidoche.netlify.app/".to_owned(),
            user_icon: IconRef::new("/assets/usericon.png"),
            launcher_icon: IconRef::new("/assets/icon.gif"),
            preset_icons: vec![
                IconRef::new("/assets/icon.png"),
                IconRef::new("/assets/icon1.png"),
                IconRef::new("/assets/icon2.png"),
                IconRef::new("/assets/icon3.png"),
                IconRef::new("/assets/icon4.png"),
            ],
            suggestions: vec![
                "Where can I buy Kit Kat and Smarties?".to_owned(),
                "How many Nestlé products are listed on the site?".to_owned(),
                "Give me a recipe rich in protein".to_owned(),
                "Avez-vous des collations savoureuses?".to_owned(),
                "你能推荐一种好吃的给我吗".to_owned(),
            ],
        }
    }
}

impl WidgetConfig {
    /// Parse a configuration override. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `raw` is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Persona icon used before any customization.
    #[must_use]
    pub fn default_icon(&self) -> IconRef {
        self.preset_icons
            .first()
            .cloned()
            .unwrap_or_else(|| self.launcher_icon.clone())
    }

    /// Greeting typed into the first bot message and the preview bubble.
    #[must_use]
    pub fn welcome_text(&self) -> String {
        welcome_text(&self.label)
    }

    /// Load configuration from the embedded JSON element, falling back to
    /// defaults when it is absent or malformed.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw.as_deref().map(str::trim) {
                None | Some("") => Self::default(),
                Some(raw) => Self::from_json(raw).unwrap_or_else(|e| {
                    log::warn!("ignoring embedded widget config: {e}");
                    Self::default()
                }),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

/// Build the welcome greeting for a persona label.
#[must_use]
pub fn welcome_text(label: &str) -> String {
    format!(
        "Hi! I'm {label}, your personal MadeWithNestlé AI assistant. Ask me anything, and I'll quickly search the entire site to find the answers you need."
    )
}
