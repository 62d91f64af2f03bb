//! Classed-HTML syntax highlighting engine.
//!
//! Wraps [`syntect`]: syntax definitions and themes are loaded once at
//! construction, then every highlight query is cheap. Output is HTML
//! `<span>`s carrying scope classes rather than inline colors, so the
//! same markup can be restyled by swapping the stylesheet emitted by
//! [`Highlighter::theme_css`].

use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use thiserror::Error;

/// Theme used when a requested theme name is not in the default set.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Errors from the underlying highlighting engine.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// Tokenization or HTML generation failed.
    #[error("highlighting failed: {0}")]
    Render(#[from] syntect::Error),
}

/// Syntax highlighter producing classed HTML spans.
///
/// Holds the syntax and theme sets for the lifetime of the process.
/// Construction is the expensive step; queries reuse the loaded sets.
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Create a highlighter with the default syntax and theme sets.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Whether `language` resolves to a known syntax.
    ///
    /// `language` is matched first as a syntax token name, then as a
    /// file extension.
    pub fn supports(&self, language: &str) -> bool {
        self.syntax_set.find_syntax_by_token(language).is_some()
            || self.syntax_set.find_syntax_by_extension(language).is_some()
    }

    /// Return the list of available theme names.
    pub fn available_themes(&self) -> Vec<&str> {
        self.theme_set.themes.keys().map(|s| s.as_str()).collect()
    }

    /// Highlight a code string into classed HTML spans.
    ///
    /// Unknown languages fall back to the plain-text syntax, which
    /// still escapes the source but tags no tokens. The result carries
    /// no inline styling; pair it with [`Highlighter::theme_css`].
    pub fn highlight(&self, source: &str, language: &str) -> Result<String, HighlightError> {
        let syntax = match self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
        {
            Some(syntax) => syntax,
            None => {
                tracing::debug!(language, "no syntax for language, using plain text");
                self.syntax_set.find_syntax_plain_text()
            }
        };

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, ClassStyle::Spaced);
        for line in LinesWithEndings::from(source) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(generator.finalize())
    }

    /// Emit the stylesheet for a named theme, scoped to the classed
    /// span output of [`Highlighter::highlight`].
    ///
    /// An unknown theme name falls back to [`DEFAULT_THEME`].
    pub fn theme_css(&self, theme: &str) -> Result<String, HighlightError> {
        let theme = match self.theme_set.themes.get(theme) {
            Some(theme) => theme,
            None => {
                tracing::debug!(theme, "unknown theme, using the default");
                self.theme_set.themes.get(DEFAULT_THEME).unwrap_or_else(|| {
                    self.theme_set
                        .themes
                        .values()
                        .next()
                        .expect("at least one theme")
                })
            }
        };
        Ok(css_for_theme_with_class_style(theme, ClassStyle::Spaced)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_rust_produces_spans() {
        let highlighter = Highlighter::new();
        let html = highlighter.highlight("fn main() {}", "rust").unwrap();
        assert!(html.contains("<span"), "expected classed spans, got {html}");
        assert!(html.contains("main"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let highlighter = Highlighter::new();
        let html = highlighter
            .highlight("some text", "nonexistent_lang_xyz")
            .unwrap();
        assert!(html.contains("some text"));
    }

    #[test]
    fn test_empty_source_highlights_to_empty_output() {
        let highlighter = Highlighter::new();
        let html = highlighter.highlight("", "rust").unwrap();
        assert!(html.is_empty());
    }

    #[test]
    fn test_source_markup_is_escaped() {
        let highlighter = Highlighter::new();
        let html = highlighter
            .highlight("<script>alert(1)</script>", "nonexistent_lang_xyz")
            .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_supports_by_token_and_extension() {
        let highlighter = Highlighter::new();
        assert!(highlighter.supports("rust"));
        assert!(highlighter.supports("rs"));
        assert!(!highlighter.supports("nonexistent_lang_xyz"));
    }

    #[test]
    fn test_theme_css_known_theme() {
        let highlighter = Highlighter::new();
        let css = highlighter.theme_css("base16-ocean.dark").unwrap();
        assert!(!css.is_empty());
    }

    #[test]
    fn test_theme_css_unknown_theme_uses_default() {
        let highlighter = Highlighter::new();
        let fallback = highlighter.theme_css("does_not_exist").unwrap();
        let default = highlighter.theme_css(DEFAULT_THEME).unwrap();
        assert_eq!(fallback, default);
    }

    #[test]
    fn test_available_themes_not_empty() {
        let highlighter = Highlighter::new();
        assert!(!highlighter.available_themes().is_empty());
    }

    #[test]
    fn test_highlight_is_idempotent() {
        let highlighter = Highlighter::new();
        let first = highlighter.highlight("let x = 1;", "rust").unwrap();
        let second = highlighter.highlight("let x = 1;", "rust").unwrap();
        assert_eq!(first, second);
    }
}
