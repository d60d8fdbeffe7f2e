//! Skill Bar Component
//!
//! Animated proficiency bar. The fill width reveals shortly after
//! mount; a per-entry delay staggers a list of bars.

use std::time::Duration;

use dioxus::prelude::*;

use crate::theme::colors::NeonColor;

/// A labeled proficiency bar that animates to its percentage.
///
/// # Props
///
/// * `name` - Skill display name
/// * `percentage` - Proficiency 0-100 (values above 100 are capped)
/// * `delay_ms` - Reveal delay, used to stagger a list
/// * `color` - Accent color for label, border, and fill
#[component]
pub fn SkillBar(
    name: String,
    percentage: u8,
    #[props(default = 0)] delay_ms: u64,
    #[props(default)] color: NeonColor,
) -> Element {
    let mut revealed = use_signal(|| false);

    // Stagger the reveal so the bars fill one after another
    use_effect(move || {
        spawn(async move {
            if delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
            revealed.set(true);
        });
    });

    let capped = percentage.min(100);
    let width = if revealed() { capped } else { 0 };
    let text_class = color.text_class();
    let track_class = format!("skill-track {}", color.border_class());
    let fill_class = format!("skill-fill {}", color.fill_class());

    rsx! {
        div { class: "skill",
            div { class: "skill-header",
                span { class: "skill-name {text_class}", "{name}" }
                span { class: "skill-value {text_class}", "{capped}%" }
            }
            div { class: "{track_class}",
                div {
                    class: "{fill_class}",
                    style: "width: {width}%;",
                }
            }
        }
    }
}
