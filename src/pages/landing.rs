//! Landing page - the whole single-page portfolio.
//!
//! Hero, about, projects, and contact sections over the cyber grid,
//! with a fixed navigation bar and a footer. Each section registers its
//! mount handle so navigation can smooth-scroll to it.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

use crate::components::{
    ButtonSize, ContactForm, CyberButton, Navigation, ProjectsCarousel, ProximityArea, SkillBar,
    VariableProximity,
};
use crate::context::{register_section, scroll_to_section, use_content, use_sections, Section};
use crate::theme::colors::NeonColor;

/// The portfolio page.
#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "cyber-grid",
            Navigation {}
            HeroSection {}
            AboutSection {}
            ProjectsSection {}
            ContactSection {}
            SiteFooter {}
        }
    }
}

/// Full-viewport hero: glitch name, terminal role line, calls to action.
#[component]
fn HeroSection() -> Element {
    let content = use_content();
    let sections = use_sections();
    let profile = content.read().profile.clone();
    let name_full = format!("{} {}", profile.name_primary, profile.name_accent);

    rsx! {
        section {
            class: "hero",
            onmounted: move |evt| register_section(sections, Section::Home, evt.data()),

            div { class: "hero-overlay scan-lines" }

            div { class: "hero-content",
                h1 { class: "hero-title glitch", "data-text": "{name_full}",
                    span { class: "neon-cyan", "{profile.name_primary}" }
                    " "
                    span { class: "neon-pink", "{profile.name_accent}" }
                }
                h2 { class: "hero-role neon-green", "{profile.role}" }
                p { class: "hero-tagline", "{profile.tagline}" }

                div { class: "hero-actions",
                    CyberButton {
                        variant: NeonColor::Cyan,
                        size: ButtonSize::Lg,
                        onclick: move |_| scroll_to_section(sections, Section::Projects),
                        "VIEW PROJECTS"
                    }
                    CyberButton {
                        variant: NeonColor::Pink,
                        size: ButtonSize::Lg,
                        onclick: move |_| scroll_to_section(sections, Section::Contact),
                        "CONTACT ME"
                    }
                }
            }

            button {
                class: "hero-scroll-hint neon-border-cyan",
                "aria-label": "Scroll to About",
                onclick: move |_| scroll_to_section(sections, Section::About),
                "\u{25BE}"
            }
        }
    }
}

/// About section: portrait, resume link, the proximity-effect bio
/// paragraphs, the markdown aside, and the skill bars.
#[component]
fn AboutSection() -> Element {
    let content = use_content();
    let sections = use_sections();
    let profile = content.read().profile.clone();
    let skills = content.read().skills.clone();
    let portrait_alt = format!("{} {}", profile.name_primary, profile.name_accent);

    // Markdown-render the supplementary bio
    let bio_html = use_memo(move || {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        let parser = Parser::new_ext(content.read().profile.bio_markdown, options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    });

    rsx! {
        section {
            class: "section",
            onmounted: move |evt| register_section(sections, Section::About, evt.data()),

            div { class: "section-inner",
                h2 { class: "section-title neon-cyan glitch", "data-text": "ABOUT.EXE", "ABOUT.EXE" }

                div { class: "about-grid",
                    div {
                        div { class: "about-portrait neon-border-pink",
                            img { src: "{profile.portrait_url}", alt: "{portrait_alt}" }
                            div { class: "scan-lines" }
                        }
                        div { class: "about-resume",
                            CyberButton {
                                variant: NeonColor::Green,
                                size: ButtonSize::Md,
                                href: profile.resume_url.to_string(),
                                "\u{21E9} DOWNLOAD RESUME"
                            }
                        }
                    }

                    div { class: "about-copy",
                        // The pointer field covers both paragraphs; each one
                        // measures its own center against it
                        ProximityArea {
                            for paragraph in profile.about_paragraphs {
                                p { class: "proximity-paragraph",
                                    VariableProximity { label: paragraph.to_string() }
                                }
                            }
                        }

                        div { class: "about-bio", dangerous_inner_html: "{bio_html()}" }

                        div { class: "about-skills",
                            for (i, skill) in skills.iter().enumerate() {
                                SkillBar {
                                    key: "{skill.name}",
                                    name: skill.name.to_string(),
                                    percentage: skill.percentage,
                                    delay_ms: (i as u64) * 200,
                                    color: skill.color,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Projects section wrapping the carousel.
#[component]
fn ProjectsSection() -> Element {
    let content = use_content();
    let sections = use_sections();
    let projects = content.read().projects.clone();

    rsx! {
        section {
            class: "section",
            onmounted: move |evt| register_section(sections, Section::Projects, evt.data()),

            div { class: "section-inner",
                h2 { class: "section-title neon-pink glitch", "data-text": "PROJECTS.DIR", "PROJECTS.DIR" }
                ProjectsCarousel {
                    items: projects,
                    initial_index: crate::get_initial_project(),
                }
            }
        }
    }
}

/// Contact section: pitch and links on the left, the simulated form on
/// the right.
#[component]
fn ContactSection() -> Element {
    let content = use_content();
    let sections = use_sections();
    let profile = content.read().profile.clone();
    let socials = content.read().socials.clone();

    rsx! {
        section {
            class: "section",
            onmounted: move |evt| register_section(sections, Section::Contact, evt.data()),

            div { class: "section-inner",
                h2 { class: "section-title neon-cyan glitch", "data-text": "CONTACT.SYS", "CONTACT.SYS" }

                div { class: "contact-grid",
                    div {
                        h3 { class: "contact-heading neon-pink", "Let's Connect in Cyberspace" }
                        p { class: "contact-pitch", "{profile.contact_pitch}" }

                        div { class: "contact-links",
                            for link in socials {
                                {
                                    let color_class = link.color.text_class();
                                    match link.href {
                                        Some(href) => rsx! {
                                            a {
                                                key: "{link.label}",
                                                class: "contact-link {color_class}",
                                                href: "{href}",
                                                target: "_blank",
                                                rel: "noopener noreferrer",
                                                span { class: "glyph", "{link.glyph}" }
                                                span { "{link.label}" }
                                            }
                                        },
                                        None => rsx! {
                                            div {
                                                key: "{link.label}",
                                                class: "contact-link",
                                                span { class: "glyph", "{link.glyph}" }
                                                span { "{link.label}" }
                                            }
                                        },
                                    }
                                }
                            }
                        }
                    }

                    ContactForm {}
                }
            }
        }
    }
}

/// Page footer.
#[component]
fn SiteFooter() -> Element {
    let content = use_content();
    let profile = content.read().profile.clone();
    let line = format!(
        "\u{00A9} 2024 {} {}. Coded in the cyberpunk future.",
        profile.name_primary, profile.name_accent
    );

    rsx! {
        footer { class: "footer",
            p { "{line}" }
        }
    }
}
