//! Syntax highlighter facade.
//!
//! Adapts a minimal prop set onto [`CodeBlock`]: fills in the default
//! language when the caller supplies none and forwards everything else
//! unchanged. Language tags are not validated here; resolving them is
//! the code block's concern.

use dioxus::prelude::*;

use crate::code_block::CodeBlock;

/// Language assumed when a caller supplies none.
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Syntax-highlighted code view.
#[component]
pub fn SyntaxHighlighter(
    language: Option<String>,
    #[props(default)] show_line_numbers: bool,
    class: Option<String>,
    source: String,
) -> Element {
    let language = language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    rsx! {
        CodeBlock {
            language,
            show_line_numbers,
            class,
            source,
        }
    }
}
