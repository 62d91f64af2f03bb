//! Presentational components for Lattice front-ends.
//!
//! Provides the responsive layout container, the syntax-highlighted
//! code view, and the class-name merge utility they are built on.
//! Components are pure mappings from props to markup: no state, no
//! side effects, identical props render identical output.

pub mod classes;
pub mod code_block;
pub mod container;
pub mod syntax_highlight;

pub use classes::ClassFragment;
pub use code_block::{gutter_line_count, CodeBlock};
pub use container::{container_class, width_class_for_token, MaxWidth, ResponsiveContainer};
pub use syntax_highlight::{SyntaxHighlighter, DEFAULT_LANGUAGE};
