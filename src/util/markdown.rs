//! Markdown rendering for bot replies.
//!
//! Answers come from a remote model and land in `inner_html`, so the event
//! stream is filtered before HTML is written: raw HTML is dropped and link or
//! image targets with a scheme other than `http`, `https` or `mailto` are
//! blanked.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Whether `url` may be emitted as an `href`/`src`. Relative URLs pass.
fn is_safe_url(url: &str) -> bool {
    // Browsers ignore embedded whitespace and control characters in schemes.
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    let Some(colon) = normalized.find(':') else {
        return true;
    };
    let scheme = &normalized[..colon];
    // A colon after a path, query or fragment delimiter is not a scheme.
    if scheme.contains(['/', '?', '#']) {
        return true;
    }
    SAFE_SCHEMES.contains(&scheme)
}

fn sanitize(tag: Tag<'_>) -> Tag<'_> {
    match tag {
        Tag::Link { link_type, dest_url, title, id } if !is_safe_url(&dest_url) => {
            log::warn!("dropped unsafe link target in answer");
            Tag::Link { link_type, dest_url: CowStr::Borrowed(""), title, id }
        }
        Tag::Image { link_type, dest_url, title, id } if !is_safe_url(&dest_url) => {
            log::warn!("dropped unsafe image source in answer");
            Tag::Image { link_type, dest_url: CowStr::Borrowed(""), title, id }
        }
        other => other,
    }
}

/// Render answer Markdown to HTML for `inner_html`.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let events = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(tag) => Some(Event::Start(sanitize(tag))),
        other => Some(other),
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}
