//! Syntax highlighting for fenced code blocks in rendered notes.
//!
//! Rewrites a pulldown-cmark event stream so that every code block becomes a
//! pre-highlighted HTML block. Syntax and theme sets are loaded once and
//! shared across requests.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const THEME: &str = "base16-eighties.dark";

pub fn highlight<'a>(events: impl Iterator<Item = Event<'a>>) -> impl Iterator<Item = Event<'a>> {
    let theme = THEMES
        .themes
        .get(THEME)
        .expect("bundled theme set should contain the configured theme");

    // Some(syntax) while buffering the body of a fenced block.
    let mut active: Option<&SyntaxReference> = None;
    let mut buffer = String::new();
    let mut out = Vec::new();

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let syntax = match kind {
                    CodeBlockKind::Fenced(lang) => SYNTAXES.find_syntax_by_token(&lang),
                    CodeBlockKind::Indented => None,
                }
                .unwrap_or_else(|| SYNTAXES.find_syntax_plain_text());
                active = Some(syntax);
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(syntax) = active.take() {
                    let html = highlighted_html_for_string(&buffer, &SYNTAXES, syntax, theme)
                        .expect("highlighting an in-memory string should not fail");
                    buffer.clear();
                    out.push(Event::Html(CowStr::from(html)));
                }
            }
            Event::Text(text) if active.is_some() => buffer.push_str(&text),
            other => out.push(other),
        }
    }

    out.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{Options, Parser};

    fn render(markdown: &str) -> String {
        let events = highlight(Parser::new_ext(markdown, Options::all()));
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, events);
        html
    }

    #[test]
    fn fenced_block_becomes_inline_styled_html() {
        let html = render("```python\nprint(\"hola\")\n```\n");
        assert!(html.contains("<pre"));
        assert!(html.contains("style="));
        assert!(!html.contains("```"));
    }

    #[test]
    fn prose_passes_through() {
        let html = render("# Título\n\nUn párrafo.\n");
        assert!(html.contains("<h1"));
        assert!(html.contains("Un párrafo."));
    }

    #[test]
    fn unknown_language_falls_back_to_plain_text() {
        let html = render("```nosuchlang\nx y z\n```\n");
        assert!(html.contains("x y z"));
    }
}
