//! Static portfolio content.
//!
//! The data layer of the site: who the owner is, what they can do, and
//! what they have shipped. Components read this through the content
//! context instead of hardcoding copy.

use crate::theme::colors::NeonColor;

/// Owner identity and long-form copy.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    /// First part of the display name, rendered in cyan.
    pub name_primary: &'static str,
    /// Second part of the display name, rendered in pink.
    pub name_accent: &'static str,
    /// Terminal-style role line under the name.
    pub role: &'static str,
    /// Hero tagline.
    pub tagline: &'static str,
    /// Portrait image for the about section.
    pub portrait_url: &'static str,
    /// Resume download link.
    pub resume_url: &'static str,
    /// Contact-section lead paragraph.
    pub contact_pitch: &'static str,
    /// Supplementary bio, markdown-rendered in the about section.
    pub bio_markdown: &'static str,
    /// The two paragraphs driven by the proximity text effect.
    pub about_paragraphs: [&'static str; 2],
}

/// A single proficiency entry in the about section.
#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency 0-100.
    pub percentage: u8,
    pub color: NeonColor,
}

/// A portfolio project shown in the carousel.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub tech_tags: &'static [&'static str],
    /// Live demo, if one is hosted.
    pub demo_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

/// A contact-section link.
#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    /// `None` renders a plain entry (e.g. a location line).
    pub href: Option<&'static str>,
    pub glyph: &'static str,
    pub color: NeonColor,
}

/// Everything the page renders.
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub socials: Vec<SocialLink>,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name_primary: "SHASHANK",
                name_accent: "K",
                role: "> SOFTWARE ENGINEER_",
                tagline: "Software Engineer at Cognizant with 2+ years building scalable \
                          enterprise web apps and microservices. React-focused, with strong \
                          REST integrations, CI/CD, and cloud-aware architecture experience.",
                portrait_url:
                    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face",
                resume_url: "https://example.com/resume.pdf",
                contact_pitch: "Ready to build something impactful? Reach out and let's \
                                discuss opportunities.",
                bio_markdown: "Off the clock I prototype **neon-soaked UI experiments**, \
                               tinker with *variable fonts*, and keep a running list of \
                               `systems-to-rebuild-in-rust`.",
                about_paragraphs: [
                    "I'm a Software Engineer at Cognizant with 2+ years of experience \
                     delivering scalable, enterprise-grade web applications and \
                     microservices. I've led React.js development for a real-time news \
                     platform, integrated robust REST APIs, and worked hands-on with \
                     CI/CD and containerization.",
                    "Previously a Frontend Intern (Angular), I transitioned into React \
                     full-time. I value clean, maintainable code, secure systems design, \
                     and collaborative delivery across teams.",
                ],
            },
            skills: vec![
                Skill {
                    name: "React.js",
                    percentage: 90,
                    color: NeonColor::Pink,
                },
                Skill {
                    name: "Angular",
                    percentage: 80,
                    color: NeonColor::Cyan,
                },
                Skill {
                    name: "TypeScript / JavaScript (ES6+)",
                    percentage: 90,
                    color: NeonColor::Cyan,
                },
                Skill {
                    name: "REST API Integration",
                    percentage: 88,
                    color: NeonColor::Pink,
                },
                Skill {
                    name: "DevOps: AWS, Docker, CI/CD",
                    percentage: 85,
                    color: NeonColor::Green,
                },
                Skill {
                    name: "Microservices & Cloud-aware Architectures",
                    percentage: 80,
                    color: NeonColor::Green,
                },
            ],
            projects: vec![
                Project {
                    title: "Cyberpunk Dashboard",
                    description: "A futuristic admin dashboard with real-time data \
                                  visualization and neon aesthetics.",
                    image_url:
                        "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
                    tech_tags: &["React", "TypeScript", "Three.js", "Tailwind"],
                    demo_url: Some("https://demo.com"),
                    github_url: Some("https://github.com"),
                },
                Project {
                    title: "Neural Network Visualizer",
                    description: "Interactive 3D visualization of neural networks with \
                                  real-time training data.",
                    image_url:
                        "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?w=600&h=400&fit=crop",
                    tech_tags: &["Python", "TensorFlow", "WebGL", "D3.js"],
                    demo_url: Some("https://demo.com"),
                    github_url: Some("https://github.com"),
                },
                Project {
                    title: "Blockchain Explorer",
                    description: "Decentralized application for exploring blockchain \
                                  transactions with cyberpunk UI.",
                    image_url:
                        "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=600&h=400&fit=crop",
                    tech_tags: &["Solidity", "Web3.js", "React", "Ethereum"],
                    demo_url: Some("https://demo.com"),
                    github_url: Some("https://github.com"),
                },
            ],
            socials: vec![
                SocialLink {
                    label: "kshashank2019@gmail.com",
                    href: Some("mailto:kshashank2019@gmail.com"),
                    glyph: "\u{2709}", // envelope
                    color: NeonColor::Cyan,
                },
                SocialLink {
                    label: "github.com",
                    href: Some("https://github.com"),
                    glyph: "\u{2318}", // place of interest
                    color: NeonColor::Pink,
                },
                SocialLink {
                    label: "linkedin.com",
                    href: Some("https://linkedin.com"),
                    glyph: "\u{260D}", // opposition
                    color: NeonColor::Green,
                },
                SocialLink {
                    label: "India",
                    href: None,
                    glyph: "\u{2316}", // position indicator
                    color: NeonColor::Cyan,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_percentages_are_in_range() {
        for skill in PortfolioContent::default().skills {
            assert!(skill.percentage <= 100, "{} out of range", skill.name);
        }
    }

    #[test]
    fn every_project_carries_tags() {
        for project in PortfolioContent::default().projects {
            assert!(!project.tech_tags.is_empty(), "{} has no tags", project.title);
        }
    }

    #[test]
    fn proximity_paragraphs_are_nonempty() {
        let profile = PortfolioContent::default().profile;
        for paragraph in profile.about_paragraphs {
            assert!(!paragraph.trim().is_empty());
        }
    }
}
