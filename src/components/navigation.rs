//! Navigation Bar
//!
//! Fixed top bar: brand glyph on the left, section links on the right.
//! Clicking a link smooth-scrolls to the section through the registry
//! in [`crate::context`] and marks the link active.

use dioxus::prelude::*;

use crate::context::{scroll_to_section, use_sections, Section};

/// Fixed navigation header for the single-page layout.
#[component]
pub fn Navigation() -> Element {
    let sections = use_sections();
    let mut active = use_signal(|| Section::Home);

    rsx! {
        nav { class: "nav-bar",
            div { class: "nav-inner",
                div {
                    class: "nav-brand neon-cyan glitch",
                    "data-text": "<DEV/>",
                    onclick: move |_| {
                        active.set(Section::Home);
                        scroll_to_section(sections, Section::Home);
                    },
                    "<DEV/>"
                }

                div { class: "nav-links",
                    for section in Section::ALL {
                        {
                            let link_class = if active() == section {
                                "nav-link neon-pink"
                            } else {
                                "nav-link"
                            };
                            rsx! {
                                button {
                                    key: "{section.label()}",
                                    class: "{link_class}",
                                    onclick: move |_| {
                                        active.set(section);
                                        scroll_to_section(sections, section);
                                    },
                                    {section.label()}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
