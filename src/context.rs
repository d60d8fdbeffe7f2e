//! Shared context for Neonfolio.
//!
//! Provides the portfolio content and the section registry to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| content);
//!
//! // In child components
//! let content = use_content();
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;

use crate::content::PortfolioContent;

/// Page sections that navigation can jump to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Label shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "HOME",
            Section::About => "ABOUT",
            Section::Projects => "PROJECTS",
            Section::Contact => "CONTACT",
        }
    }
}

/// Mount handles for the page sections, registered as each section
/// mounts. Scroll targets resolve through this map.
pub type SectionNodes = HashMap<Section, Rc<MountedData>>;

/// Hook to access the portfolio content from context.
///
/// Returns a Signal containing the static site content.
pub fn use_content() -> Signal<PortfolioContent> {
    use_context::<Signal<PortfolioContent>>()
}

/// Hook to access the section registry from context.
pub fn use_sections() -> Signal<SectionNodes> {
    use_context::<Signal<SectionNodes>>()
}

/// Records a section's mount handle so navigation can scroll to it.
pub fn register_section(mut sections: Signal<SectionNodes>, section: Section, node: Rc<MountedData>) {
    sections.write().insert(section, node);
}

/// Smoothly scrolls the viewport to a registered section.
///
/// A section that has not mounted yet is a normal transient state, not
/// an error: the call is a silent no-op.
pub fn scroll_to_section(sections: Signal<SectionNodes>, section: Section) {
    let node = sections.read().get(&section).cloned();
    let Some(node) = node else {
        return;
    };
    spawn(async move {
        if let Err(err) = node.scroll_to(ScrollBehavior::Smooth).await {
            tracing::debug!("scroll to {section:?} failed: {err}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_listed_in_page_order() {
        assert_eq!(Section::ALL.first(), Some(&Section::Home));
        assert_eq!(Section::ALL.last(), Some(&Section::Contact));
    }

    #[test]
    fn section_labels_are_uppercase() {
        for section in Section::ALL {
            let label = section.label();
            assert_eq!(label, label.to_uppercase());
        }
    }
}
