//! Projects Carousel
//!
//! Pseudo-3D card carousel: one card sits centered and active while its
//! neighbors recede to the sides, and the user changes cards by
//! dragging the track, the prev/next buttons, or the indicator dots.
//!
//! Geometry and gesture classification live in
//! [`neonfolio_widgets::carousel`]; this component feeds the state
//! machine pointer events and DOM measurements and paints whatever
//! translate it reports. The track transform is owned by that single
//! state signal, so a new navigation always overwrites an in-flight
//! one and teardown cannot leak a frame callback.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use tracing::debug;

use neonfolio_widgets::{CardPose, CardRelation, CarouselMetrics, CarouselState};

use crate::components::ProjectCard;
use crate::content::Project;

/// Gap assumed when only one card exists and no pair can be measured.
const FALLBACK_CARD_GAP: f64 = 50.0;
/// Lifetime of the navigation feedback flash (fade in + fade out).
const FLASH_DURATION_MS: u64 = 600;
/// Eased settle used after navigation and drag release.
const SETTLE_TRANSITION: &str = "transform 0.75s cubic-bezier(0.21, 0.61, 0.35, 1)";

/// Carousel over the portfolio's projects.
///
/// # Props
///
/// * `items` - Projects to display, in order
/// * `initial_index` - Card to open on (clamped into range)
#[component]
pub fn ProjectsCarousel(items: Vec<Project>, #[props(default = 0)] initial_index: usize) -> Element {
    let item_count = items.len();
    let mut state = use_signal(|| CarouselState::new(item_count, initial_index));

    // Mount handles for measurement
    let viewport: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let first_card: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let second_card: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // When false the next paint snaps without easing (drag frames,
    // mount/resize re-centering)
    let mut animate = use_signal(|| true);
    // Remounting the overlay by key restarts its fade animation
    let mut flash_seq: Signal<u32> = use_signal(|| 0);
    let mut flash_visible = use_signal(|| false);

    // Re-derives card and container measurements from the rendered DOM,
    // then re-centers the active card. The gap comes from the distance
    // between the first two card slots, so responsive margins are
    // picked up too.
    let remeasure = move |animated: bool| {
        let mut state = state;
        let mut animate = animate;
        spawn(async move {
            let (Some(viewport), Some(first)) = (viewport.peek().clone(), first_card.peek().clone())
            else {
                // not measurable yet - normal while mounting
                return;
            };
            let Ok(container_rect) = viewport.get_client_rect().await else {
                return;
            };
            let Ok(first_rect) = first.get_client_rect().await else {
                return;
            };
            let card_gap = match second_card.peek().clone() {
                Some(second) => match second.get_client_rect().await {
                    Ok(second_rect) => (second_rect.origin.x
                        - (first_rect.origin.x + first_rect.size.width))
                        .max(0.0),
                    Err(_) => FALLBACK_CARD_GAP,
                },
                None => FALLBACK_CARD_GAP,
            };
            let metrics = CarouselMetrics {
                container_width: container_rect.size.width,
                card_width: first_rect.size.width,
                card_gap,
            };
            animate.set(animated);
            state.write().set_metrics(metrics);
            debug!(?metrics, "carousel re-measured");
        });
    };

    let mut begin_flash = move || {
        let next_seq = flash_seq.peek().wrapping_add(1);
        flash_seq.set(next_seq);
        flash_visible.set(true);
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(FLASH_DURATION_MS)).await;
            flash_visible.set(false);
        });
    };

    let mut navigate = move |index: isize| {
        animate.set(true);
        let resolved = state.write().move_to(index);
        debug!(resolved, "carousel navigate");
        begin_flash();
    };

    let onpointerdown = move |evt: PointerEvent| {
        animate.set(false);
        state.write().begin_drag(evt.client_coordinates().x);
    };

    let onpointermove = move |evt: PointerEvent| {
        if state.peek().is_dragging() {
            state.write().drag_to(evt.client_coordinates().x);
        }
    };

    // Pointer-up, -cancel and -leave all end the gesture the same way
    let settle = move |_: PointerEvent| {
        if !state.peek().is_dragging() {
            return;
        }
        animate.set(true);
        let resolved = state.write().release_drag();
        debug!(resolved, "carousel drag settled");
        begin_flash();
    };

    if item_count == 0 {
        return VNode::empty();
    }

    let current = state.read().current_index();
    let translate = state.read().translate();
    let dragging = state.read().is_dragging();
    let transition = if dragging || !animate() {
        "none"
    } else {
        SETTLE_TRANSITION
    };
    let cursor = if dragging { "grabbing" } else { "grab" };
    let track_style =
        format!("transform: translateX({translate}px); transition: {transition}; cursor: {cursor};");

    rsx! {
        div { class: "carousel",
            div {
                class: "carousel-viewport",
                onmounted: move |evt| {
                    let mut viewport = viewport;
                    viewport.set(Some(evt.data()));
                    remeasure(false);
                },
                onresize: move |_| remeasure(false),

                div {
                    class: "carousel-track",
                    style: "{track_style}",
                    onpointerdown: onpointerdown,
                    onpointermove: onpointermove,
                    onpointerup: settle,
                    onpointercancel: settle,
                    onpointerleave: settle,

                    for (i, project) in items.iter().enumerate() {
                        {
                            let relation = CardRelation::classify(i, current);
                            let pose = CardPose::of(relation);
                            let active = relation == CardRelation::Active;
                            let card_class = if active { "pc-card active" } else { "pc-card" };
                            let card_style = format!(
                                "transform: {}; opacity: {}; filter: {}; z-index: {};",
                                pose.transform_css(),
                                pose.opacity,
                                pose.filter_css(),
                                pose.z_index,
                            );
                            rsx! {
                                div {
                                    key: "{project.title}",
                                    class: "pc-slot",
                                    onmounted: move |evt| {
                                        if i == 0 {
                                            let mut first_card = first_card;
                                            first_card.set(Some(evt.data()));
                                            remeasure(false);
                                        } else if i == 1 {
                                            let mut second_card = second_card;
                                            second_card.set(Some(evt.data()));
                                            remeasure(false);
                                        }
                                    },
                                    div {
                                        class: "{card_class}",
                                        style: "{card_style}",
                                        ProjectCard { project: project.clone(), active: active }
                                    }
                                }
                            }
                        }
                    }
                }

                if flash_visible() {
                    div { key: "flash-{flash_seq}", class: "carousel-flash" }
                }

                button {
                    class: "carousel-btn carousel-btn-prev",
                    "aria-label": "Previous project",
                    onclick: move |_| {
                        let current = state.peek().current_index();
                        navigate(current as isize - 1);
                    },
                    "\u{2039}"
                }
                button {
                    class: "carousel-btn carousel-btn-next",
                    "aria-label": "Next project",
                    onclick: move |_| {
                        let current = state.peek().current_index();
                        navigate(current as isize + 1);
                    },
                    "\u{203A}"
                }
            }

            div { class: "carousel-dots",
                for i in 0..item_count {
                    {
                        let dot_class = if i == current {
                            "carousel-dot active"
                        } else {
                            "carousel-dot"
                        };
                        let dot_label = format!("Go to project {}", i + 1);
                        rsx! {
                            button {
                                key: "{i}",
                                class: "{dot_class}",
                                "aria-label": "{dot_label}",
                                onclick: move |_| navigate(i as isize),
                            }
                        }
                    }
                }
            }
        }
    }
}
