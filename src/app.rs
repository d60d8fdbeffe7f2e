use dioxus::prelude::*;

use crate::content::PortfolioContent;
use crate::context::SectionNodes;
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The single-page portfolio
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, portfolio content, the section registry used
/// by navigation, and routing.
#[component]
pub fn App() -> Element {
    // Static site content, shared with every component
    let content: Signal<PortfolioContent> = use_signal(PortfolioContent::default);
    let sections: Signal<SectionNodes> = use_signal(SectionNodes::new);

    use_context_provider(|| content);
    use_context_provider(|| sections);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
