//! Project Card
//!
//! Card body for the projects carousel: cover image under scan-line
//! overlays, title, description, demo link, and a tech-tag drawer that
//! slides up when the active card is hovered.

use dioxus::prelude::*;

use crate::components::{ButtonSize, CyberButton};
use crate::content::Project;
use crate::theme::colors::NeonColor;

/// Renders the content of a single carousel card.
///
/// # Props
///
/// * `project` - The project to display
/// * `active` - Whether this card is the centered one (drives the image
///   zoom and the tag drawer)
#[component]
pub fn ProjectCard(project: Project, #[props(default = false)] active: bool) -> Element {
    let image_style = if active {
        "transform: scale(1.05);"
    } else {
        "transform: scale(1);"
    };

    rsx! {
        div { class: "pc-image",
            img {
                src: "{project.image_url}",
                alt: "{project.title}",
                draggable: false,
                style: "{image_style}",
            }
        }
        div { class: "pc-body",
            h3 { class: "pc-title neon-cyan", "{project.title}" }
            p { class: "pc-description", "{project.description}" }
            if let Some(demo_url) = project.demo_url {
                div { class: "pc-actions",
                    CyberButton {
                        variant: NeonColor::Cyan,
                        size: ButtonSize::Sm,
                        href: demo_url.to_string(),
                        "\u{2197} VISIT SITE"
                    }
                }
            }
        }
        div { class: "pc-tech",
            for tag in project.tech_tags {
                span { class: "pc-tag", "{tag}" }
            }
        }
    }
}
