//! Syntax-highlighted code block.
//!
//! Delegates tokenization to [`lattice_highlight`] and renders the
//! classed spans inside a `<pre><code>` pair, with an optional gutter
//! of line numbers. The engine is built once per process and shared;
//! a highlighting failure degrades to escaped plain source.

use std::sync::OnceLock;

use dioxus::prelude::*;
use lattice_highlight::Highlighter;

/// Process-wide shared engine, built on first use.
static HIGHLIGHTER: OnceLock<Highlighter> = OnceLock::new();

fn shared_highlighter() -> &'static Highlighter {
    HIGHLIGHTER.get_or_init(Highlighter::new)
}

/// Number of gutter lines for a source string.
///
/// A trailing newline does not produce a phantom final line.
pub fn gutter_line_count(source: &str) -> usize {
    source.lines().count()
}

/// Run `source` through the shared engine, falling back to escaped
/// plain text when the engine reports an error.
fn highlighted_html(source: &str, language: &str) -> String {
    match shared_highlighter().highlight(source, language) {
        Ok(html) => html,
        Err(error) => {
            tracing::warn!(language, %error, "highlighting failed, rendering plain source");
            html_escape::encode_text(source).into_owned()
        }
    }
}

/// Code block with language-aware token classes.
///
/// The class list starts with `code-block` and a `language-{tag}`
/// marker; caller-supplied classes land after both.
#[component]
pub fn CodeBlock(
    language: String,
    #[props(default)] show_line_numbers: bool,
    class: Option<String>,
    source: String,
) -> Element {
    let class_list = crate::classes![
        "code-block",
        format!("language-{language}"),
        class,
    ];
    let html = highlighted_html(&source, &language);
    let line_count = gutter_line_count(&source);

    rsx! {
        pre { class: "{class_list}",
            if show_line_numbers {
                span { class: "code-block-gutter",
                    for number in 1..=line_count {
                        span { class: "line-number", "{number}" }
                    }
                }
            }
            code { dangerous_inner_html: "{html}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gutter_line_count() {
        assert_eq!(gutter_line_count(""), 0);
        assert_eq!(gutter_line_count("one"), 1);
        assert_eq!(gutter_line_count("one\n"), 1);
        assert_eq!(gutter_line_count("one\ntwo\nthree"), 3);
    }

    #[test]
    fn test_highlighted_html_unknown_language_keeps_source() {
        let html = highlighted_html("plain words", "nonexistent_lang_xyz");
        assert!(html.contains("plain words"));
    }

    #[test]
    fn test_highlighted_html_known_language_tags_tokens() {
        let html = highlighted_html("fn main() {}", "rust");
        assert!(html.contains("<span"));
    }
}
