use super::*;

// =============================================================
// Formatting
// =============================================================

#[test]
fn renders_emphasis_and_links() {
    let html = render_markdown_html("Find **KitKat** at [the shop](https://www.madewithnestle.ca/kitkat).");
    assert!(html.contains("<strong>KitKat</strong>"));
    assert!(html.contains(r#"<a href="https://www.madewithnestle.ca/kitkat">the shop</a>"#));
}

#[test]
fn renders_lists() {
    let html = render_markdown_html("- oats\n- yogurt");
    assert!(html.contains("<ul>"));
    assert!(html.contains("<li>oats</li>"));
}

#[test]
fn plain_text_is_wrapped_in_paragraph() {
    assert_eq!(render_markdown_html("Hello"), "<p>Hello</p>\n");
}

// =============================================================
// Untrusted content
// =============================================================

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("hi <script>alert(1)</script> there");
    assert!(!html.contains("<script>"));
    assert!(html.contains("hi"));
}

#[test]
fn script_link_target_is_blanked() {
    let html = render_markdown_html("[click](javascript:alert(document.cookie))");
    assert!(!html.contains("javascript:"));
    assert!(html.contains(r#"<a href="">click</a>"#));
}

#[test]
fn scheme_check_ignores_case_and_entities() {
    let html = render_markdown_html("[a](JaVaScRiPt:alert(1)) [b](javascript&#58;alert(1))");
    assert!(!html.to_ascii_lowercase().contains("javascript"));
}

#[test]
fn data_image_source_is_blanked() {
    let html = render_markdown_html("![x](data:text/html;base64,PHNjcmlwdD4=)");
    assert!(!html.contains("data:"));
    assert!(html.contains("<img"));
}

#[test]
fn relative_and_mailto_links_are_kept() {
    let html = render_markdown_html("[recipes](/recipes?tag=a:b) [mail](mailto:hello@nestle.ca)");
    assert!(html.contains(r#"href="/recipes?tag=a:b""#));
    assert!(html.contains(r#"href="mailto:hello@nestle.ca""#));
}

#[test]
fn url_safety_check() {
    assert!(is_safe_url("https://example.com"));
    assert!(is_safe_url("#section"));
    assert!(is_safe_url("page.html"));
    assert!(!is_safe_url("vbscript:msgbox"));
    assert!(!is_safe_url(" java\tscript:alert(1)"));
}
