//! Variable Proximity Text
//!
//! "Magnetic ink": text whose variable-font axes slide toward an
//! activated preset as the pointer nears the text. A [`ProximityArea`]
//! owns the bounding container and publishes the live pointer position
//! through context; every [`VariableProximity`] inside it re-measures
//! its own center per event and interpolates its axes.
//!
//! The weight math and preset parsing live in
//! [`neonfolio_widgets::proximity`].

use std::rc::Rc;
use std::str::FromStr;

use dioxus::prelude::*;
use tracing::warn;

use neonfolio_widgets::{Falloff, VariationAxes};

/// Rest-state font-variation preset.
const DEFAULT_FROM: &str = "'wght' 400, 'opsz' 9";
/// Fully-activated font-variation preset.
const DEFAULT_TO: &str = "'wght' 900, 'opsz' 36";
/// Default effect radius in px.
const DEFAULT_RADIUS: f64 = 140.0;

/// Live pointer position (viewport coordinates) inside a
/// [`ProximityArea`], or `None` once the pointer has left it.
#[derive(Clone, Copy)]
pub struct ProximityPointer(pub Signal<Option<(f64, f64)>>);

/// Bounding container for the proximity effect.
///
/// Owns the mousemove/mouseleave listeners and publishes the pointer
/// position to its descendants. The text effect never creates or owns
/// its own container; the caller decides how far the "magnetic" field
/// reaches by choosing what to wrap.
#[component]
pub fn ProximityArea(#[props(default)] class: Option<String>, children: Element) -> Element {
    let mut pointer: Signal<Option<(f64, f64)>> = use_signal(|| None);
    use_context_provider(|| ProximityPointer(pointer));

    let class = class.unwrap_or_default();
    rsx! {
        div {
            class: "proximity-area {class}",
            onmousemove: move |evt| {
                let point = evt.client_coordinates();
                pointer.set(Some((point.x, point.y)));
            },
            onmouseleave: move |_| pointer.set(None),
            {children}
        }
    }
}

/// Text element whose weight/optical-size tracks pointer proximity.
///
/// Must be rendered inside a [`ProximityArea`]. Distance is measured
/// against the element's own center, re-read from layout on every move
/// event so the effect stays correct under scroll and resize.
///
/// # Props
///
/// * `label` - Text to render
/// * `from_variation` / `to_variation` - Font-variation presets, e.g.
///   `"'wght' 400, 'opsz' 9"`
/// * `radius` - Effect radius in px
/// * `falloff` - `"linear"` or `"quadratic"`; unknown values warn and
///   fall back to linear
#[component]
pub fn VariableProximity(
    label: String,
    #[props(default = DEFAULT_FROM.to_string())] from_variation: String,
    #[props(default = DEFAULT_TO.to_string())] to_variation: String,
    #[props(default = DEFAULT_RADIUS)] radius: f64,
    #[props(default = "linear".to_string())] falloff: String,
    #[props(default)] class: Option<String>,
) -> Element {
    let pointer = use_context::<ProximityPointer>().0;
    let mut node: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut mix: Signal<f64> = use_signal(|| 0.0);

    // Parsed once on mount; a bad mode degrades to linear
    let falloff_mode = use_hook(|| {
        Falloff::from_str(&falloff).unwrap_or_else(|err| {
            warn!("{err}, falling back to linear");
            Falloff::default()
        })
    });

    // Recompute the weight on every pointer update. The element's rect
    // is re-measured per event rather than cached, so no resize or
    // scroll listener is needed.
    use_effect(move || {
        match pointer() {
            None => mix.set(0.0),
            Some((x, y)) => {
                let Some(node) = node.peek().clone() else {
                    // not mounted yet - skip silently
                    return;
                };
                spawn(async move {
                    if let Ok(rect) = node.get_client_rect().await {
                        let center = (
                            rect.origin.x + rect.size.width / 2.0,
                            rect.origin.y + rect.size.height / 2.0,
                        );
                        mix.set(falloff_mode.weight_at((x, y), center, radius));
                    }
                });
            }
        }
    });

    let from_axes = VariationAxes::parse(&from_variation);
    let to_axes = VariationAxes::parse(&to_variation);
    let settings = VariationAxes::lerp(&from_axes, &to_axes, mix()).to_string();
    let class = class.unwrap_or_default();

    rsx! {
        span {
            class: "variable-proximity {class}",
            style: "font-variation-settings: {settings};",
            onmounted: move |evt| node.set(Some(evt.data())),
            "{label}"
        }
    }
}
