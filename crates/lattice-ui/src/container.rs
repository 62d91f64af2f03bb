//! Responsive layout container.
//!
//! Wraps arbitrary children in a centered block whose maximum width is
//! one of a closed set of tiers. The class list is assembled in a
//! fixed order (base, width, padding, caller extras) so that
//! caller-supplied classes win CSS override ties.

use dioxus::prelude::*;

/// Always-on layout classes: full width up to the cap, centered.
const BASE_CLASSES: &str = "w-full mx-auto";

/// Responsive padding scale applied when padding is on.
const PADDING_CLASSES: &str = "px-4 py-6 sm:px-6 lg:px-8";

/// Maximum-width tier for [`ResponsiveContainer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaxWidth {
    Sm,
    Md,
    Lg,
    /// Extra-large, the default tier.
    #[default]
    Xl,
    Xxl,
    Full,
}

impl MaxWidth {
    /// Returns the width class for this tier.
    pub fn css_class(&self) -> &'static str {
        match self {
            MaxWidth::Sm => "max-w-screen-sm",
            MaxWidth::Md => "max-w-screen-md",
            MaxWidth::Lg => "max-w-screen-lg",
            MaxWidth::Xl => "max-w-screen-xl",
            MaxWidth::Xxl => "max-w-screen-2xl",
            MaxWidth::Full => "max-w-full",
        }
    }

    /// Returns the wire token for this tier (`"sm"` through `"full"`).
    pub fn token(&self) -> &'static str {
        match self {
            MaxWidth::Sm => "sm",
            MaxWidth::Md => "md",
            MaxWidth::Lg => "lg",
            MaxWidth::Xl => "xl",
            MaxWidth::Xxl => "2xl",
            MaxWidth::Full => "full",
        }
    }

    /// Resolve a wire token to a tier.
    ///
    /// Unrecognized tokens resolve to `None`; string-sourced widths
    /// then render without a width class rather than failing.
    pub fn from_token(token: &str) -> Option<MaxWidth> {
        match token {
            "sm" => Some(MaxWidth::Sm),
            "md" => Some(MaxWidth::Md),
            "lg" => Some(MaxWidth::Lg),
            "xl" => Some(MaxWidth::Xl),
            "2xl" => Some(MaxWidth::Xxl),
            "full" => Some(MaxWidth::Full),
            _ => None,
        }
    }

    /// All tiers, in ascending width order.
    pub fn all() -> &'static [MaxWidth] {
        &[
            MaxWidth::Sm,
            MaxWidth::Md,
            MaxWidth::Lg,
            MaxWidth::Xl,
            MaxWidth::Xxl,
            MaxWidth::Full,
        ]
    }
}

/// Width class for a string-sourced tier token, or `None` for an
/// unrecognized token (no width class is applied in that case).
pub fn width_class_for_token(token: &str) -> Option<&'static str> {
    MaxWidth::from_token(token).map(|width| width.css_class())
}

/// Assemble the container class list: base, width, padding, extras.
pub fn container_class(
    max_width: Option<MaxWidth>,
    padding: bool,
    extra: Option<&str>,
) -> String {
    crate::classes![
        BASE_CLASSES,
        max_width.map(|width| width.css_class()),
        padding.then_some(PADDING_CLASSES),
        extra,
    ]
}

/// Responsive-width wrapper around arbitrary content.
///
/// Renders a `div` capped at the requested width tier and centered,
/// with an optional padding scale. Extra classes land after the
/// built-in ones.
#[component]
pub fn ResponsiveContainer(
    #[props(default)] max_width: MaxWidth,
    #[props(default = true)] padding: bool,
    class: Option<String>,
    children: Element,
) -> Element {
    let class_list = container_class(Some(max_width), padding, class.as_deref());

    rsx! {
        div { class: "{class_list}", {children} }
    }
}
