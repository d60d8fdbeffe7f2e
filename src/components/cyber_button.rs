//! Cyber Button Component
//!
//! Neon-outlined action button in the three accent colors and three
//! sizes. Renders an external link when `href` is set, otherwise a
//! plain button.

use dioxus::prelude::*;

use crate::theme::colors::NeonColor;

/// Button size variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    /// Compact, for inline card actions
    Sm,
    /// Default size
    #[default]
    Md,
    /// Hero call-to-action size
    Lg,
}

impl ButtonSize {
    /// Returns the CSS class for this size
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "cyber-btn-sm",
            ButtonSize::Md => "cyber-btn-md",
            ButtonSize::Lg => "cyber-btn-lg",
        }
    }
}

/// Properties for the CyberButton component
#[derive(Clone, PartialEq, Props)]
pub struct CyberButtonProps {
    /// Accent color
    #[props(default)]
    pub variant: NeonColor,
    /// Size variant
    #[props(default)]
    pub size: ButtonSize,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// External link target; renders an anchor when set
    #[props(default)]
    pub href: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Neon action button.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CyberButton {
///         variant: NeonColor::Pink,
///         size: ButtonSize::Lg,
///         onclick: move |_| { /* navigate */ },
///         "CONTACT ME"
///     }
/// }
/// ```
#[component]
pub fn CyberButton(props: CyberButtonProps) -> Element {
    let extra = props.class.clone().unwrap_or_default();
    let class = format!(
        "cyber-btn {} {} {} {}",
        props.size.class(),
        props.variant.border_class(),
        props.variant.text_class(),
        extra,
    );

    if let Some(href) = props.href.clone() {
        return rsx! {
            a {
                class: "{class}",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                span { {props.children} }
                span { class: "cyber-btn-sheen" }
            }
        };
    }

    let onclick = props.onclick;
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            span { {props.children} }
            span { class: "cyber-btn-sheen" }
        }
    }
}
