use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_points_at_local_chat_endpoint() {
    let config = WidgetConfig::default();
    assert_eq!(config.endpoint, "http://localhost:8000/api/chat");
    assert_eq!(config.label, "Quicky");
    assert_eq!(config.typing_interval_ms, 25);
    assert_eq!(config.close_animation_ms, Some(300));
}

#[test]
fn default_icon_is_first_preset() {
    let config = WidgetConfig::default();
    assert_eq!(config.default_icon(), IconRef::new("/assets/icon.png"));
}

#[test]
fn default_icon_falls_back_to_launcher_without_presets() {
    let config = WidgetConfig { preset_icons: Vec::new(), ..WidgetConfig::default() };
    assert_eq!(config.default_icon(), config.launcher_icon);
}

#[test]
fn welcome_text_mentions_label() {
    let text = welcome_text("Bot2");
    assert!(text.starts_with("Hi! I'm Bot2, your personal MadeWithNestlé AI assistant."));
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn from_json_overrides_subset_and_keeps_defaults() {
    let config = WidgetConfig::from_json(r#"{"label":"Nessie","close_animation_ms":null}"#).unwrap();
    assert_eq!(config.label, "Nessie");
    assert_eq!(config.close_animation_ms, None);
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.suggestions.len(), 5);
}

#[test]
fn from_json_reads_icon_refs_as_plain_strings() {
    let config = WidgetConfig::from_json(r#"{"preset_icons":["/a.png","/b.png"]}"#).unwrap();
    assert_eq!(config.preset_icons, vec![IconRef::new("/a.png"), IconRef::new("/b.png")]);
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = WidgetConfig::from_json("{not json").unwrap_err();
    assert!(err.to_string().starts_with("config parse failed"));
}

#[test]
fn load_without_browser_returns_defaults() {
    assert_eq!(WidgetConfig::load(), WidgetConfig::default());
}
