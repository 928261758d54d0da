//! Markdown → HTML rendering for service responses.

use pulldown_cmark::{html, CowStr, Event, Options, Parser};

/// Render CommonMark (plus tables, strikethrough and task lists) to HTML.
///
/// Raw HTML blocks in the source are emitted as escaped text; the result is
/// injected with `dangerous_inner_html`, so the model output never gets to
/// contribute markup of its own.
pub fn render_markdown(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(input, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(CowStr::from(raw.into_string())),
        other => other,
    });

    let mut output = String::with_capacity(input.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
